// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed `priority` directives.
//!
//! ```text
//! priority: run hook <hook> before|after <target>   --> HookPriority
//! priority: run module before|after <target>        --> ModulePriority
//! ```

use serde::Serialize;
use std::fmt;

/// Whether the module runs before or after its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityOrder {
    Before,
    After,
}

impl PriorityOrder {
    /// Parses `before` / `after`, ignoring ASCII case.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("before") {
            Some(Self::Before)
        } else if value.eq_ignore_ascii_case("after") {
            Some(Self::After)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

impl fmt::Display for PriorityOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering rule for a single hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookPriority {
    hook: String,
    order: PriorityOrder,
    target: String,
}

impl HookPriority {
    pub fn new(hook: impl Into<String>, order: PriorityOrder, target: impl Into<String>) -> Self {
        Self {
            hook: hook.into(),
            order,
            target: target.into(),
        }
    }

    #[must_use]
    pub fn hook(&self) -> &str {
        &self.hook
    }

    #[must_use]
    pub const fn order(&self) -> PriorityOrder {
        self.order
    }

    /// The other module(s) this rule refers to, as written.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for HookPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run hook {} {} {}", self.hook, self.order, self.target)
    }
}

/// Ordering rule for the module as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModulePriority {
    order: PriorityOrder,
    target: String,
}

impl ModulePriority {
    pub fn new(order: PriorityOrder, target: impl Into<String>) -> Self {
        Self {
            order,
            target: target.into(),
        }
    }

    #[must_use]
    pub const fn order(&self) -> PriorityOrder {
        self.order
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for ModulePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run module {} {}", self.order, self.target)
    }
}
