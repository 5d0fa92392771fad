// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Builds for module directories described by an `info.txt`.
//!
//! ```text
//! mods/example/info.txt  --load-->  ModuleInfo
//!   name    = id
//!   version = version
//!   layout  = PackageName   (archive unpacks into example/)
//!   tags    = @TITLE@ @MODULE_ID@ @REQUIRED_VERSION@ @DESCRIPTION@
//!             computed at build time, only if a doc file (info.txt
//!             included) is staged
//! ```

use std::path::Path;

use super::tags::TagSet;
use super::{PackageBuilder, StagingLayout};
use crate::error::{PackResult, PackageError};
use crate::logging::sink::NullLog;
use crate::metadata::text::{strip_tags, wordwrap};
use crate::metadata::{DESCRIPTOR_FILE, ModuleInfo};

/// Column at which `@DESCRIPTION@` is wrapped.
pub const DESCRIPTION_WIDTH: usize = 72;

/// Module-specific tags, in the order they are applied.
///
/// # Errors
///
/// Returns `MetadataError::MissingField` if the module has no id, title or
/// description.
pub fn module_tags(info: &ModuleInfo) -> PackResult<TagSet> {
    let description = wordwrap(&strip_tags(info.description()?), DESCRIPTION_WIDTH);
    Ok(TagSet::new()
        .with("@TITLE@", info.title()?)
        .with("@MODULE_ID@", info.id()?)
        .with("@REQUIRED_VERSION@", info.required_version())
        .with("@DESCRIPTION@", description))
}

impl PackageBuilder<NullLog> {
    /// Creates a builder for the module in `module_dir`.
    ///
    /// # Errors
    ///
    /// - `PackageError::NotADirectory` if `module_dir` is not a directory.
    /// - `PackageError::MissingDescriptor` if it has no `info.txt`.
    /// - Any metadata error from loading the descriptor, including a missing
    ///   id or version. A missing title or description only fails the build,
    ///   and only when a documentation file is staged.
    /// - Any error from [`PackageBuilder::new`].
    pub fn from_module(module_dir: impl AsRef<Path>, build_dir: impl AsRef<Path>) -> PackResult<Self> {
        let module_dir = module_dir.as_ref();
        if !module_dir.is_dir() {
            return Err(PackageError::NotADirectory {
                what: "module source dir",
                path: module_dir.display().to_string(),
            }
            .into());
        }

        let descriptor = module_dir.join(DESCRIPTOR_FILE);
        if !descriptor.is_file() {
            return Err(PackageError::MissingDescriptor {
                path: module_dir.display().to_string(),
            }
            .into());
        }

        let info = ModuleInfo::load(&descriptor)?;
        let mut builder = Self::new(info.id()?, info.version()?, module_dir, build_dir)?
            .with_layout(StagingLayout::PackageName);
        builder.module = Some(info);
        Ok(builder)
    }
}
