// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              PackError (~24 bytes)
//!                     |
//!   +--------+--------+--------+--------+--------+
//!   |        |        |        |        |        |
//!   v        v        v        v        v        v
//! Bail   Metadata  Package  Config  Process     Io
//!          Box       Box      Box     Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Metadata  Syntax, UnknownDirective, InvalidValue, IdDetection, ...
//!   Package   InvalidName, InvalidVersion, NestedBuildDir, ArchiveToolFailed, ...
//!   Config    ParseError, InvalidValue
//!   Process   ExecutableNotFound, SpawnFailed, NonZeroExit
//!
//! All variants boxed => PackError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PackError`].
pub type PackResult<T> = std::result::Result<T, PackError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum PackError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Module descriptor could not be read or is invalid.
    #[error("metadata error: {0}")]
    Metadata(#[from] Box<MetadataError>),

    /// Package build setup or archive creation failed.
    #[error("package error: {0}")]
    Package(#[from] Box<PackageError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a fatal [`PackError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> PackError {
    PackError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PackError {
                fn from(err: $error) -> Self {
                    PackError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    MetadataError => Metadata,
    PackageError => Package,
    ConfigError => Config,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Metadata Errors ---

/// Errors raised while reading a module `info.txt` descriptor.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Descriptor file could not be read.
    #[error("cannot read module info '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A line is neither blank, a comment, nor a `key: value` pair.
    #[error("cannot parse line {line} of {path}: {content}")]
    Syntax {
        path: String,
        line: usize,
        content: String,
    },

    /// Directive name is not recognized.
    #[error("unknown directive '{directive}' at line {line} of {path}")]
    UnknownDirective {
        directive: String,
        path: String,
        line: usize,
    },

    /// A directive value does not match its grammar.
    #[error("invalid {directive} at line {line} of {path}: {message}")]
    InvalidValue {
        directive: String,
        path: String,
        line: usize,
        message: String,
    },

    /// A `hook` or `compat` name was declared twice.
    #[error("duplicate {directive} directive '{name}' at line {line} of {path}")]
    Duplicate {
        directive: String,
        name: String,
        path: String,
        line: usize,
    },

    /// The module id could not be derived from the directory name.
    #[error("cannot autodetect the module id: {message}")]
    IdDetection { message: String },

    /// The implementation script for the module id does not exist.
    #[error(
        "module script '{path}' for module id '{id}' does not exist; either rename \
         the directory, create the module script or provide the correct 'id' directive"
    )]
    MissingImplementation { id: String, path: String },

    /// A required descriptor field is empty.
    #[error("no {field} is set for the module")]
    MissingField { field: &'static str },
}

// --- Package Errors ---

/// Errors raised while setting up or running a package build.
#[derive(Debug, Error)]
pub enum PackageError {
    /// Package name contains characters outside `[A-Za-z0-9_-]` or starts with `-`.
    #[error(
        "illegal format used for package name '{name}' \
         (expected only letters, numbers, underscores and minus signs, \
         not starting with a minus sign)"
    )]
    InvalidName { name: String },

    /// Package version is empty.
    #[error("no version provided for package '{name}'")]
    MissingVersion { name: String },

    /// Package version would not form a single path component.
    #[error("illegal version '{version}' for package '{name}': must not contain path separators")]
    InvalidVersion { name: String, version: String },

    /// A path expected to be a directory is not one.
    #[error("illegal {what} '{path}' provided: not a directory")]
    NotADirectory { what: &'static str, path: String },

    /// Module directory has no descriptor.
    #[error("illegal module source dir '{path}' provided: no info.txt file found")]
    MissingDescriptor { path: String },

    /// Build directory overlaps the source directory.
    #[error("the build dir '{build}' cannot be at, above or below the package source dir '{source_dir}'")]
    NestedBuildDir { build: String, source_dir: String },

    /// Exclusion path lies outside the source root.
    #[error("exclude path '{path}' is not below the package source dir")]
    ExcludeOutsideSource { path: String },

    /// External archiver exited with a non-zero status.
    ///
    /// `stderr` holds the tool's own error output, if it wrote any.
    #[error(
        "the {tool} program exited with a non-zero exit code ({code}){}",
        tool_output(.stderr)
    )]
    ArchiveToolFailed {
        tool: &'static str,
        code: i32,
        stderr: String,
    },
}

fn tool_output(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A `--set` override is not of the form `section/key=value`.
    #[error("invalid option override '{0}' (expected section/key=value)")]
    InvalidOverride(String),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in {search_path})")]
    ExecutableNotFound { name: String, search_path: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

#[cfg(test)]
mod tests;
