// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Exclusion rules, resolved once against the source root.
//!
//! ```text
//! resolve(root, ["notes.txt", "docs/", "missing"])
//!   missing       --> ignored (cannot appear in the package)
//!   canonicalize  --> must be strictly below root
//!   is_dir?       --> dirs  { "docs" }
//!   otherwise     --> files { "notes.txt" }
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{PackResult, PackageError};

/// Source-relative files and directories left out of a package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    files: BTreeSet<PathBuf>,
    dirs: BTreeSet<PathBuf>,
}

impl ExclusionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `paths` (relative to `source_root`) into an exclusion set.
    ///
    /// `source_root` must already be canonical.
    ///
    /// # Errors
    ///
    /// Returns `PackageError::ExcludeOutsideSource` if an existing path
    /// resolves to the source root itself or to anything outside it, and an
    /// I/O error if an existing path cannot be canonicalized.
    pub fn resolve<I, S>(source_root: &Path, paths: I) -> PackResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let mut set = Self::new();

        for path in paths {
            let path = path.as_ref();
            let full = source_root.join(path);
            if !full.exists() {
                continue;
            }

            let canonical = std::fs::canonicalize(&full)?;
            let relative = match canonical.strip_prefix(source_root) {
                Ok(relative) if !relative.as_os_str().is_empty() => relative.to_path_buf(),
                _ => {
                    return Err(PackageError::ExcludeOutsideSource {
                        path: path.display().to_string(),
                    }
                    .into());
                }
            };

            if canonical.is_dir() {
                set.dirs.insert(relative);
            } else {
                set.files.insert(relative);
            }
        }

        Ok(set)
    }

    /// Returns a new set containing the entries of both sets.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            files: self.files.union(&other.files).cloned().collect(),
            dirs: self.dirs.union(&other.dirs).cloned().collect(),
        }
    }

    #[must_use]
    pub fn is_excluded_file(&self, relative: &Path) -> bool {
        self.files.contains(relative)
    }

    /// True if `relative` is an excluded directory. Entries below it are
    /// never visited, so no prefix check is needed.
    #[must_use]
    pub fn is_excluded_dir(&self, relative: &Path) -> bool {
        self.dirs.contains(relative)
    }

    #[must_use]
    pub const fn files(&self) -> &BTreeSet<PathBuf> {
        &self.files
    }

    #[must_use]
    pub const fn dirs(&self) -> &BTreeSet<PathBuf> {
        &self.dirs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }
}
