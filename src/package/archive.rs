// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Archive production through the external `zip` and `tar` programs.
//!
//! ```text
//! build/                       (cwd for zip)
//!   example-1.0.0/             staging dir
//!   example-1.0.0.zip    <--   zip -qr <build>/example-1.0.0.zip example-1.0.0
//!   example-1.0.0.tar.gz <--   tar -C <build> -zcf <build>/example-1.0.0.tar.gz example-1.0.0
//!
//! child env: parent env with PATH = tools.search_path
//! non-zero exit: partial archive removed, staging dir kept,
//!                tool stderr carried in ArchiveToolFailed
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::types::{DEFAULT_SEARCH_PATH, ToolsConfig};
use crate::core::env::current_env;
use crate::core::process::builder::{ProcessBuilder, ProcessFlags, StreamFlags};
use crate::error::{PackError, PackResult, PackageError, Result};
use crate::utility::fs::copy::remove_file_if_exists;

/// Archive formats produced for every package, in production order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveKind {
    Zip,
    TarGz,
}

impl ArchiveKind {
    pub const ALL: [Self; 2] = [Self::Zip, Self::TarGz];

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::TarGz => "tar.gz",
        }
    }

    /// Name of the program that writes this format.
    #[must_use]
    pub const fn tool_name(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::TarGz => "tar",
        }
    }
}

impl fmt::Display for ArchiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Locations of the archivers and the search path they run with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveTools {
    zip: PathBuf,
    tar: PathBuf,
    search_path: String,
}

impl Default for ArchiveTools {
    fn default() -> Self {
        Self {
            zip: PathBuf::from("zip"),
            tar: PathBuf::from("tar"),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
        }
    }
}

impl ArchiveTools {
    #[must_use]
    pub fn new(zip: impl Into<PathBuf>, tar: impl Into<PathBuf>, search_path: impl Into<String>) -> Self {
        Self {
            zip: zip.into(),
            tar: tar.into(),
            search_path: search_path.into(),
        }
    }

    #[must_use]
    pub fn from_config(tools: &ToolsConfig) -> Self {
        Self::new(&tools.zip, &tools.tar, tools.search_path.clone())
    }

    #[must_use]
    pub fn program(&self, kind: ArchiveKind) -> &Path {
        match kind {
            ArchiveKind::Zip => &self.zip,
            ArchiveKind::TarGz => &self.tar,
        }
    }

    #[must_use]
    pub fn search_path(&self) -> &str {
        &self.search_path
    }

    /// Resolves the archiver for `kind` against the search path.
    fn locate(&self, kind: ArchiveKind, cwd: &Path) -> PackResult<ProcessBuilder> {
        let program = self.program(kind).to_string_lossy();
        Ok(ProcessBuilder::which_in(&program, &self.search_path, cwd)?)
    }

    /// Checks that both archivers can be found.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` for the first missing tool.
    pub fn preflight(&self, cwd: &Path) -> PackResult<()> {
        for kind in ArchiveKind::ALL {
            let builder = self.locate(kind, cwd)?;
            debug!(tool = kind.tool_name(), path = %builder.program().display(), "found archiver");
        }
        Ok(())
    }
}

/// Packs `build_dir/staging_name` into `output`.
///
/// Any existing `output` is replaced. On failure the partial `output` is
/// removed; the staging directory is left for inspection.
///
/// # Errors
///
/// Returns `ProcessError::ExecutableNotFound` if the tool cannot be located,
/// `ProcessError::SpawnFailed` if it cannot be started, and
/// `PackageError::ArchiveToolFailed` if it exits non-zero.
pub async fn create_archive(
    kind: ArchiveKind,
    tools: &ArchiveTools,
    build_dir: &Path,
    staging_name: &str,
    output: &Path,
) -> Result<()> {
    remove_file_if_exists(output).await?;

    let env = current_env().with_search_path(tools.search_path());
    let builder = tools
        .locate(kind, build_dir)?
        .name(kind.tool_name())
        .env(env)
        .cwd(build_dir)
        .flag(ProcessFlags::ALLOW_FAILURE)
        .stderr_flags(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING);

    let builder = match kind {
        ArchiveKind::Zip => builder.arg("-qr").arg(output).arg(staging_name),
        ArchiveKind::TarGz => builder
            .arg("-C")
            .arg(build_dir)
            .arg("-zcf")
            .arg(output)
            .arg(staging_name),
    };

    let result = builder.run().await?;
    if result.success() {
        return Ok(());
    }

    if !result.stderr().is_empty() {
        warn!(tool = kind.tool_name(), stderr = %result.stderr(), "archiver error output");
    }
    if let Err(e) = remove_file_if_exists(output).await {
        warn!(path = %output.display(), error = %e, "failed to remove partial archive");
    }
    Err(PackError::from(PackageError::ArchiveToolFailed {
        tool: kind.tool_name(),
        code: result.exit_code(),
        stderr: result.stderr().to_string(),
    })
    .into())
}
