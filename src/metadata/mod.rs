// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module descriptor (`info.txt`) reader.
//!
//! ```text
//! info.txt                        ModuleInfo
//! --------                        ----------
//! # comment          skipped
//! title: Foo         ------>      title = "Foo"
//! category: a, b     ------>      categories = {a, b}
//! hook: lang|        ------>      hooks["lang"] = ""
//! priority: run module before x   module_priorities += (Before, x)
//!
//! load(path) = parse_str(read(path)) + resolve_id(parent dir)
//!   "Module-foo/"  --> id "foo", requires Module-foo/foo.php
//! ```

pub mod priority;
pub mod text;

use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

use crate::error::{MetadataError, PackResult, bail_out};
use priority::{HookPriority, ModulePriority, PriorityOrder};

/// File name of the module descriptor.
pub const DESCRIPTOR_FILE: &str = "info.txt";

/// Extension of the module implementation script.
pub const SCRIPT_EXTENSION: &str = "php";

/// Compiled descriptor grammar.
struct Grammar {
    line: Regex,
    category_separator: Regex,
    hook_priority: Regex,
    module_priority: Regex,
    handler: Regex,
    dbversion: Regex,
    identifier: Regex,
}

impl Grammar {
    fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            line: Regex::new(r"^([A-Za-z0-9_]+)\s*:\s*(.*?)\s*$")?,
            category_separator: Regex::new(r"\s*,\s*")?,
            hook_priority: Regex::new(r"(?i)^run\s+hook\s+(.+)\s+(before|after)\s(.+)$")?,
            module_priority: Regex::new(r"(?i)^run\s+module\s+(before|after)\s(.+)$")?,
            handler: Regex::new(r"^([A-Za-z0-9_]+)\|(.*)$")?,
            dbversion: Regex::new(r"^[0-9]{8}$")?,
            identifier: Regex::new(r"^[A-Za-z0-9_]+$")?,
        })
    }
}

fn grammar() -> PackResult<&'static Grammar> {
    static GRAMMAR: OnceLock<Result<Grammar, regex::Error>> = OnceLock::new();
    GRAMMAR
        .get_or_init(Grammar::compile)
        .as_ref()
        .map_err(|e| bail_out(format!("failed to compile descriptor grammar: {e}")))
}

/// Returns true if `value` is a valid module identifier (`^\w+$`, ASCII).
#[must_use]
pub fn is_identifier(value: &str) -> bool {
    grammar().is_ok_and(|g| g.identifier.is_match(value))
}

/// Parsed contents of a module `info.txt`.
///
/// Free-text fields are empty when unset. Use the fallible accessors
/// ([`ModuleInfo::id`], [`ModuleInfo::version`], ...) where a value is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleInfo {
    id: String,
    title: String,
    description: String,
    author: String,
    url: String,
    version: String,
    required_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    dbversion: Option<String>,
    categories: BTreeSet<String>,
    hooks: BTreeMap<String, String>,
    compat: BTreeMap<String, String>,
    hook_priorities: Vec<HookPriority>,
    module_priorities: Vec<ModulePriority>,
}

/// Position of the line being parsed, for error messages.
struct Location<'a> {
    origin: &'a str,
    line: usize,
}

impl Location<'_> {
    fn invalid(&self, directive: &str, message: impl Into<String>) -> MetadataError {
        MetadataError::InvalidValue {
            directive: directive.to_string(),
            path: self.origin.to_string(),
            line: self.line,
            message: message.into(),
        }
    }
}

impl ModuleInfo {
    /// Parses descriptor text. `origin` names the source in error messages.
    ///
    /// The module id is taken as written; no file system checks are made.
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] for the first line that is malformed,
    /// uses an unknown directive or carries an invalid value.
    pub fn parse_str(content: &str, origin: &str) -> PackResult<Self> {
        let grammar = grammar()?;
        let mut info = Self::default();

        for (index, line) in content.lines().enumerate() {
            let location = Location {
                origin,
                line: index + 1,
            };

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let captures = grammar
                .line
                .captures(line)
                .ok_or_else(|| MetadataError::Syntax {
                    path: origin.to_string(),
                    line: location.line,
                    content: line.to_string(),
                })?;
            let directive = captures[1].to_ascii_lowercase();
            let value = captures.get(2).map_or("", |m| m.as_str());

            info.apply(grammar, &directive, value, &location)?;
        }

        Ok(info)
    }

    /// Reads and parses the descriptor at `path`, then resolves the module id
    /// against the directory that contains it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or the
    /// module id cannot be resolved to an existing `<id>.php` script.
    pub fn load(path: impl AsRef<Path>) -> PackResult<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();

        let read_error = |source| MetadataError::ReadError {
            path: origin.clone(),
            source,
        };
        let content = std::fs::read_to_string(path).map_err(read_error)?;
        let module_dir = std::fs::canonicalize(path)
            .map_err(read_error)?
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| MetadataError::IdDetection {
                message: format!("'{origin}' has no parent directory"),
            })?;

        let mut info = Self::parse_str(&content, &origin)?;
        info.resolve_id(&module_dir)?;

        debug!(id = %info.id, path = %origin, "loaded module info");
        Ok(info)
    }

    fn apply(
        &mut self,
        grammar: &Grammar,
        directive: &str,
        value: &str,
        location: &Location<'_>,
    ) -> PackResult<()> {
        match directive {
            "id" => self.id = value.to_string(),
            "title" => self.title = value.to_string(),
            "desc" => self.description = value.to_string(),
            "author" => self.author = value.to_string(),
            "url" => self.url = value.to_string(),
            "version" => self.version = value.to_string(),
            "require_version" | "required_version" => self.required_version = value.to_string(),
            "category" => {
                self.categories.extend(
                    grammar
                        .category_separator
                        .split(value)
                        .map(ToString::to_string),
                );
            }
            "priority" => self.add_priority(grammar, value, location)?,
            "hook" | "compat" => self.add_handler(grammar, directive, value, location)?,
            "dbversion" => {
                if !grammar.dbversion.is_match(value) {
                    return Err(location
                        .invalid(directive, "expected 8 numbers (format YYYYMMDDXX)")
                        .into());
                }
                self.dbversion = Some(value.to_string());
            }
            _ => {
                return Err(MetadataError::UnknownDirective {
                    directive: directive.to_string(),
                    path: location.origin.to_string(),
                    line: location.line,
                }
                .into());
            }
        }
        Ok(())
    }

    fn add_priority(
        &mut self,
        grammar: &Grammar,
        value: &str,
        location: &Location<'_>,
    ) -> PackResult<()> {
        let cannot_parse = || location.invalid("priority", format!("cannot parse priority '{value}'"));

        if let Some(c) = grammar.hook_priority.captures(value) {
            let order = PriorityOrder::parse(&c[2]).ok_or_else(cannot_parse)?;
            self.hook_priorities
                .push(HookPriority::new(&c[1], order, &c[3]));
        } else if let Some(c) = grammar.module_priority.captures(value) {
            let order = PriorityOrder::parse(&c[1]).ok_or_else(cannot_parse)?;
            self.module_priorities.push(ModulePriority::new(order, &c[2]));
        } else {
            return Err(cannot_parse().into());
        }
        Ok(())
    }

    fn add_handler(
        &mut self,
        grammar: &Grammar,
        directive: &str,
        value: &str,
        location: &Location<'_>,
    ) -> PackResult<()> {
        let c = grammar
            .handler
            .captures(value)
            .ok_or_else(|| location.invalid(directive, "expected <name>|<handler>"))?;
        let name = &c[1];
        let handler = &c[2];

        if handler.trim().is_empty() && (directive != "hook" || name != "lang") {
            return Err(location
                .invalid(directive, "missing value after the '|' character")
                .into());
        }

        let store = if directive == "hook" {
            &mut self.hooks
        } else {
            &mut self.compat
        };
        if store.contains_key(name) {
            return Err(MetadataError::Duplicate {
                directive: directive.to_string(),
                name: name.to_string(),
                path: location.origin.to_string(),
                line: location.line,
            }
            .into());
        }
        store.insert(name.to_string(), handler.to_string());
        Ok(())
    }

    /// Fills in or verifies the module id for a descriptor in `module_dir`.
    fn resolve_id(&mut self, module_dir: &Path) -> PackResult<()> {
        if self.id.trim().is_empty() {
            // "Module-foo" and "foo" both name the module "foo".
            let dir_name = module_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let guess = dir_name
                .rsplit_once('-')
                .map_or(dir_name.as_str(), |(_, id)| id)
                .to_string();

            if !is_identifier(&guess) {
                return Err(MetadataError::IdDetection {
                    message: format!(
                        "based on the directory where info.txt is stored, we guessed '{guess}', \
                         but that module id does not match the required format (letters, \
                         numbers, underscores); either rename the directory or provide the \
                         'id' directive in the module's info.txt"
                    ),
                }
                .into());
            }

            let script = module_dir.join(format!("{guess}.{SCRIPT_EXTENSION}"));
            if !script.exists() {
                return Err(MetadataError::IdDetection {
                    message: format!(
                        "based on the directory where info.txt is stored, we guessed '{guess}', \
                         but the expected module script '{}' does not exist; either rename the \
                         directory, create the module script or provide the 'id' directive in \
                         the module's info.txt",
                        script.display()
                    ),
                }
                .into());
            }

            self.id = guess;
        } else {
            let script = module_dir.join(format!("{}.{SCRIPT_EXTENSION}", self.id));
            if !script.exists() {
                return Err(MetadataError::MissingImplementation {
                    id: self.id.clone(),
                    path: script.display().to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    fn required<'a>(value: &'a str, field: &'static str) -> PackResult<&'a str> {
        if value.trim().is_empty() {
            Err(MetadataError::MissingField { field }.into())
        } else {
            Ok(value)
        }
    }

    /// The module id.
    ///
    /// # Errors
    ///
    /// Fails with `MissingField` when no id is set.
    pub fn id(&self) -> PackResult<&str> {
        Self::required(&self.id, "id")
    }

    /// The module version.
    ///
    /// # Errors
    ///
    /// Fails with `MissingField` when no version is set.
    pub fn version(&self) -> PackResult<&str> {
        Self::required(&self.version, "version")
    }

    /// The module title.
    ///
    /// # Errors
    ///
    /// Fails with `MissingField` when no title is set.
    pub fn title(&self) -> PackResult<&str> {
        Self::required(&self.title, "title")
    }

    /// The module description (`desc` directive).
    ///
    /// # Errors
    ///
    /// Fails with `MissingField` when no description is set.
    pub fn description(&self) -> PackResult<&str> {
        Self::required(&self.description, "description")
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Minimum host application version, or an empty string when unset.
    #[must_use]
    pub fn required_version(&self) -> &str {
        &self.required_version
    }

    #[must_use]
    pub fn dbversion(&self) -> Option<&str> {
        self.dbversion.as_deref()
    }

    #[must_use]
    pub const fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    #[must_use]
    pub const fn hooks(&self) -> &BTreeMap<String, String> {
        &self.hooks
    }

    #[must_use]
    pub const fn compat(&self) -> &BTreeMap<String, String> {
        &self.compat
    }

    #[must_use]
    pub fn hook_priorities(&self) -> &[HookPriority] {
        &self.hook_priorities
    }

    #[must_use]
    pub fn module_priorities(&self) -> &[ModulePriority] {
        &self.module_priorities
    }
}

/// Renders the descriptor back into `info.txt` syntax.
///
/// Parsing the output with [`ModuleInfo::parse_str`] yields an equal value.
impl fmt::Display for ModuleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("id", &self.id),
            ("title", &self.title),
            ("desc", &self.description),
            ("author", &self.author),
            ("url", &self.url),
            ("version", &self.version),
            ("required_version", &self.required_version),
        ];
        for (directive, value) in fields {
            if !value.is_empty() {
                writeln!(f, "{directive}: {value}")?;
            }
        }
        if let Some(dbversion) = &self.dbversion {
            writeln!(f, "dbversion: {dbversion}")?;
        }
        for category in &self.categories {
            writeln!(f, "category: {category}")?;
        }
        for (name, handler) in &self.hooks {
            writeln!(f, "hook: {name}|{handler}")?;
        }
        for (name, handler) in &self.compat {
            writeln!(f, "compat: {name}|{handler}")?;
        }
        for rule in &self.hook_priorities {
            writeln!(f, "priority: {rule}")?;
        }
        for rule in &self.module_priorities {
            writeln!(f, "priority: {rule}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
