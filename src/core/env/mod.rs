// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management for child processes.
//!
//! ```text
//! current_env() --> Env (copy-on-write BTreeMap<String, String>)
//!                    |
//!                    +-- with_search_path("/bin:/usr/bin")
//!                    |     clone with PATH replaced
//!                    v
//!              ProcessBuilder::env(env)   child only
//! ```
//!
//! The parent process environment is only ever read, never written.

pub mod container;

#[cfg(test)]
mod tests;

/// Captures the current process environment.
///
/// Variables that are not valid UTF-8 are skipped.
#[must_use]
pub fn current_env() -> container::Env {
    let vars = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();
    container::Env::from_map(vars)
}
