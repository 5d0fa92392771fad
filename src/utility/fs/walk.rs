// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use anyhow::Context;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;

/// What a directory entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A real directory.
    Dir,
    /// A symbolic link to a directory; never descended into.
    LinkedDir,
    /// Anything else, including symbolic links to files.
    File,
}

/// A single entry from [`read_dir_sorted`].
#[derive(Debug, Clone)]
pub struct DirEntryInfo {
    name: OsString,
    path: PathBuf,
    kind: EntryKind,
}

impl DirEntryInfo {
    #[must_use]
    pub fn name(&self) -> &OsString {
        &self.name
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }
}

/// Lists one directory level, sorted by file name.
///
/// Names compare as raw bytes on Unix, so the order does not depend on the
/// filesystem or the locale.
///
/// # Errors
///
/// Returns an error if the directory or one of its entries cannot be read.
pub async fn read_dir_sorted(dir: &Path) -> Result<Vec<DirEntryInfo>> {
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut listed = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("failed to read entry from {}", dir.display()))?
    {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .with_context(|| format!("failed to stat {}", path.display()))?;

        let kind = if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_symlink() && fs::metadata(&path).await.is_ok_and(|m| m.is_dir()) {
            EntryKind::LinkedDir
        } else {
            EntryKind::File
        };

        listed.push(DirEntryInfo {
            name: entry.file_name(),
            path,
            kind,
        });
    }

    listed.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(listed)
}
