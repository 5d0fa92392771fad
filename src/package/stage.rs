// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Copies the filtered source tree into the staging directory.
//!
//! ```text
//! source/                      staging/
//!   .git/          skip (VCS)
//!   README         -------->     README      (mode & 0o777)
//!   docs/          -------->     docs/       (mode & 0o777)
//!     guide.txt    -------->       guide.txt
//!   internal/      skip (excluded dir, subtree not visited)
//!   notes.txt      skip (excluded file)
//!
//! order: depth-first, parent before children, names byte-wise sorted
//! ```

use anyhow::Context;
use std::path::Path;
use tokio::fs;
use tracing::trace;

use super::emit;
use super::exclude::ExclusionSet;
use crate::error::Result;
use crate::logging::sink::BuildLog;
use crate::utility::fs::copy::{copy_file_mirrored, mirror_permissions};
use crate::utility::fs::walk::{EntryKind, read_dir_sorted};

/// Version-control metadata, skipped at any depth.
pub const VCS_DIRS: [&str; 3] = [".git", ".svn", ".hg"];

/// Counts of what a staging pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageSummary {
    pub directories: usize,
    pub files: usize,
    pub skipped: usize,
}

/// Copies `source` into the existing directory `staging`, honoring `excludes`.
///
/// Nothing is rolled back on failure.
///
/// # Errors
///
/// Returns an error on the first directory that cannot be read or created,
/// file that cannot be copied, or permission change that fails.
pub async fn stage_tree<L: BuildLog>(
    source: &Path,
    staging: &Path,
    excludes: &ExclusionSet,
    log: &mut L,
) -> Result<StageSummary> {
    let mut summary = StageSummary::default();
    stage_dir(source, staging, Path::new(""), excludes, log, &mut summary).await?;
    Ok(summary)
}

async fn stage_dir<L: BuildLog>(
    src_dir: &Path,
    dst_dir: &Path,
    relative: &Path,
    excludes: &ExclusionSet,
    log: &mut L,
    summary: &mut StageSummary,
) -> Result<()> {
    for entry in read_dir_sorted(src_dir).await? {
        if VCS_DIRS.iter().any(|vcs| entry.name() == *vcs) {
            trace!(path = %entry.path().display(), "skipping version control metadata");
            summary.skipped += 1;
            continue;
        }

        let rel = relative.join(entry.name());
        let target = dst_dir.join(entry.name());

        match entry.kind() {
            EntryKind::Dir | EntryKind::LinkedDir => {
                if excludes.is_excluded_dir(&rel) {
                    emit(log, &format!("Skipped excluded directory: ./{}", rel.display()), 2);
                    summary.skipped += 1;
                    continue;
                }

                fs::create_dir(&target)
                    .await
                    .with_context(|| format!("failed to create directory {}", target.display()))?;
                mirror_permissions(entry.path(), &target).await?;
                summary.directories += 1;

                if entry.kind() == EntryKind::Dir {
                    Box::pin(stage_dir(entry.path(), &target, &rel, excludes, log, summary))
                        .await?;
                }
            }
            EntryKind::File => {
                if excludes.is_excluded_file(&rel) {
                    emit(log, &format!("Skipped excluded file: ./{}", rel.display()), 2);
                    summary.skipped += 1;
                    continue;
                }

                copy_file_mirrored(entry.path(), &target).await?;
                summary.files += 1;
            }
        }
    }

    Ok(())
}
