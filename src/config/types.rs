// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! [global]   output_log_level, file_log_level, log_file
//! [tools]    zip, tar, search_path
//! [package]  excludes
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Search path handed to archivers when nothing else is configured.
pub const DEFAULT_SEARCH_PATH: &str = "/bin:/usr/bin";

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::DEBUG,
            log_file: None,
        }
    }
}

/// External archivers and the `PATH` they run with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// `zip` executable (bare name or path).
    pub zip: PathBuf,
    /// `tar` executable (bare name or path).
    pub tar: PathBuf,
    /// Colon-separated directories used both to locate the archivers and as
    /// their `PATH`.
    pub search_path: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            zip: PathBuf::from("zip"),
            tar: PathBuf::from("tar"),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
        }
    }
}

/// Settings applied to every package build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageConfig {
    /// Source-relative paths excluded from every package.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excludes: Vec<String>,
}
