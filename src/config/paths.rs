// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! build/
//!   <package-id or module id>/   staging (removed after a build)
//!   <package-id>.zip
//!   <package-id>.tar.gz
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Build directory used when none is configured.
pub const DEFAULT_BUILD_DIR: &str = "/tmp";

/// Filesystem locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory receiving the staging tree and the archives.
    pub build: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            build: PathBuf::from(DEFAULT_BUILD_DIR),
        }
    }
}

impl PathsConfig {
    /// Makes relative paths absolute against the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `build` is empty or the current directory is unknown.
    pub fn resolve(&mut self) -> Result<()> {
        if self.build.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "paths".to_string(),
                key: "build".to_string(),
                message: "build directory must not be empty".to_string(),
            }
            .into());
        }
        if self.build.is_relative() {
            self.build = std::env::current_dir()?.join(&self.build);
        }
        Ok(())
    }

    #[must_use]
    pub fn build_dir(&self) -> &Path {
        &self.build
    }
}
