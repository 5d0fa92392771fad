// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Placeholder substitution in staged documentation files.
//!
//! ```text
//! TagSet (ordered)                       staging/README
//!   @TITLE@       -> Example Module        "@TITLE@ @VERSION@"
//!   @VERSION@     -> 1.0.0          ==>    "Example Module 1.0.0"
//!   @PACKAGE@     -> example-1.0.0
//!
//! applied one token at a time, in insertion order
//! file rewritten only when its bytes changed
//! ```

use anyhow::Context;
use std::path::Path;
use tokio::fs;

use super::emit;
use crate::error::Result;
use crate::logging::sink::BuildLog;

/// Top-level files in the staging directory that receive substitution.
pub const DOC_FILES: [&str; 9] = [
    "README",
    "INSTALL",
    "UPGRADE",
    "COPYING",
    "AUTHORS",
    "info.txt",
    "ChangeLog",
    "Changelog",
    "NEWS",
];

/// Ordered `token -> value` replacements.
///
/// Earlier tags are applied first, so a value may itself contain a token
/// that a later tag expands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<(String, String)>,
}

impl TagSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags every package build provides.
    #[must_use]
    pub fn base(version: &str, package_id: &str) -> Self {
        Self::new()
            .with("@VERSION@", version)
            .with("@PACKAGE@", package_id)
    }

    /// Appends a tag, builder style.
    #[must_use]
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(token, value);
        self
    }

    pub fn push(&mut self, token: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.tags.push((token.into(), value.into()));
        self
    }

    /// Appends every tag of `other` after the existing ones.
    pub fn extend(&mut self, other: &Self) -> &mut Self {
        self.tags.extend(other.tags.iter().cloned());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Applies every tag to `data` in order.
    ///
    /// Works on raw bytes; documentation files are not required to be UTF-8.
    #[must_use]
    pub fn apply(&self, data: &[u8]) -> Vec<u8> {
        self.iter().fold(data.to_vec(), |text, (token, value)| {
            replace_all(&text, token.as_bytes(), value.as_bytes())
        })
    }
}

fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return haystack.to_vec();
    }

    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(pos) = rest.windows(needle.len()).position(|w| w == needle) {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(replacement);
        rest = &rest[pos + needle.len()..];
    }
    out.extend_from_slice(rest);
    out
}

/// The [`DOC_FILES`] that exist as regular files directly in `staging`.
pub async fn present_doc_files(staging: &Path) -> Vec<&'static str> {
    let mut present = Vec::new();
    for name in DOC_FILES {
        if fs::metadata(staging.join(name))
            .await
            .is_ok_and(|meta| meta.is_file())
        {
            present.push(name);
        }
    }
    present
}

/// Substitutes `tags` in the [`DOC_FILES`] present directly in `staging`.
///
/// Returns the names of the files that were rewritten.
///
/// # Errors
///
/// Returns an error if a present documentation file cannot be read or written.
pub async fn substitute_doc_files<L: BuildLog>(
    staging: &Path,
    tags: &TagSet,
    log: &mut L,
) -> Result<Vec<&'static str>> {
    let mut updated = Vec::new();

    for name in present_doc_files(staging).await {
        let path = staging.join(name);
        let original = fs::read(&path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        let replaced = tags.apply(&original);
        if replaced == original {
            continue;
        }

        fs::write(&path, &replaced)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
        emit(log, &format!("Updated {name}"), 2);
        updated.push(name);
    }

    Ok(updated)
}
