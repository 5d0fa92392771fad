// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for modpack.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. modpack.toml (cwd, optional)
//! 3. --ini FILE (repeatable, must exist)
//! 4. MODPACK_* env vars
//! 5. --set section/key=value and CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MODPACK_PATHS__BUILD=/var/tmp        → paths.build = "/var/tmp"
//! MODPACK_TOOLS__SEARCH_PATH=/usr/bin  → tools.search_path = "/usr/bin"
//! MODPACK_PACKAGE__EXCLUDES=a,b        → package.excludes = ["a", "b"]
//! ```

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{GlobalConfig, PackageConfig, ToolsConfig};

/// Name of the optional configuration file read from the current directory.
pub const LOCAL_CONFIG_FILE: &str = "modpack.toml";

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "MODPACK";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Paths configuration.
    pub paths: PathsConfig,
    /// Archiver locations.
    pub tools: ToolsConfig,
    /// Per-build package settings.
    pub package: PackageConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use modpack::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("modpack.toml")
    ///     .with_env_prefix("MODPACK")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve all paths and validate configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if path resolution fails.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.paths.resolve()
    }

    /// Format configuration options for display, one `key = value` per line,
    /// sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_paths_options(&mut options);
        self.format_tools_options(&mut options);
        self.format_package_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("paths.build".into(), self.paths.build.display().to_string());
    }

    fn format_tools_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("tools.zip".into(), self.tools.zip.display().to_string());
        options.insert("tools.tar".into(), self.tools.tar.display().to_string());
        options.insert("tools.search_path".into(), self.tools.search_path.clone());
    }

    fn format_package_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("package.excludes".into(), self.package.excludes.join(", "));
    }
}
