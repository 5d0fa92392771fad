// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Package builds.
//!
//! ```text
//! PackageBuilder::new(name, version, source, build)     validate, canonicalize
//!   .register_excludes([...])                           resolve against source
//!   .build()
//!      |
//!      +-- init staging      build/<staging-name>, old contents removed
//!      +-- stage tree        copy minus VCS dirs and exclusions
//!      +-- substitute tags   module tags, extra tags, then @VERSION@ @PACKAGE@
//!      +-- zip               build/<name>-<version>.zip
//!      +-- tar.gz            build/<name>-<version>.tar.gz
//!      +-- clean up staging
//!      v
//!   BuiltArchives { zip, tar_gz }
//! ```
//!
//! Builds sharing a build directory and package id must not run concurrently.

pub mod archive;
pub mod exclude;
pub mod module;
pub mod stage;
pub mod tags;


use anyhow::Context;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use self::archive::{ArchiveKind, ArchiveTools};
use self::exclude::ExclusionSet;
use self::tags::TagSet;
use crate::error::{PackResult, PackageError, Result};
use crate::logging::sink::{BuildLog, NullLog};
use crate::metadata::ModuleInfo;
use crate::utility::fs::copy::{mirror_permissions, remove_tree};

/// Sends a progress message to the sink and mirrors it as a debug event.
pub(crate) fn emit<L: BuildLog>(log: &mut L, message: &str, level: usize) {
    debug!(level, "{message}");
    log.log(message, level);
}

/// How the staging directory inside the build directory is named.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StagingLayout {
    /// `<name>-<version>`
    #[default]
    PackageId,
    /// `<name>`, so the archive unpacks into a directory named after the module.
    PackageName,
}

/// Validated identity and locations of one package build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    name: String,
    version: String,
    source_dir: PathBuf,
    build_dir: PathBuf,
}

impl BuildContext {
    /// Validates the inputs and canonicalizes both directories.
    ///
    /// # Errors
    ///
    /// - `PackageError::InvalidName` if `name` is empty, starts with `-`, or
    ///   has characters outside `[A-Za-z0-9_-]`.
    /// - `PackageError::MissingVersion` / `InvalidVersion` for an empty
    ///   version or one containing a path separator.
    /// - `PackageError::NotADirectory` if either directory is missing.
    /// - `PackageError::NestedBuildDir` if the build directory is the source
    ///   directory, inside it, or one of its ancestors.
    pub fn new(
        name: &str,
        version: &str,
        source_dir: impl AsRef<Path>,
        build_dir: impl AsRef<Path>,
    ) -> PackResult<Self> {
        if !is_package_name(name) {
            return Err(PackageError::InvalidName {
                name: name.to_string(),
            }
            .into());
        }

        let version = version.trim();
        if version.is_empty() {
            return Err(PackageError::MissingVersion {
                name: name.to_string(),
            }
            .into());
        }
        if version.contains(['/', '\\']) || version == "." || version == ".." {
            return Err(PackageError::InvalidVersion {
                name: name.to_string(),
                version: version.to_string(),
            }
            .into());
        }

        let source_dir = canonical_dir(source_dir.as_ref(), "package source dir")?;
        let build_dir = canonical_dir(build_dir.as_ref(), "build dir")?;

        if build_dir.starts_with(&source_dir) || source_dir.starts_with(&build_dir) {
            return Err(PackageError::NestedBuildDir {
                build: build_dir.display().to_string(),
                source_dir: source_dir.display().to_string(),
            }
            .into());
        }

        Ok(Self {
            name: name.to_string(),
            version: version.to_string(),
            source_dir,
            build_dir,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    #[must_use]
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// `<name>-<version>`, the base name of the produced archives.
    #[must_use]
    pub fn package_id(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }

    #[must_use]
    pub fn staging_name(&self, layout: StagingLayout) -> String {
        match layout {
            StagingLayout::PackageId => self.package_id(),
            StagingLayout::PackageName => self.name.clone(),
        }
    }

    #[must_use]
    pub fn archive_path(&self, kind: ArchiveKind) -> PathBuf {
        self.build_dir
            .join(format!("{}.{}", self.package_id(), kind.extension()))
    }
}

/// A leading `-` would be read as an option by the archivers.
fn is_package_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

fn canonical_dir(path: &Path, what: &'static str) -> PackResult<PathBuf> {
    let not_a_directory = || PackageError::NotADirectory {
        what,
        path: path.display().to_string(),
    };
    if !path.is_dir() {
        return Err(not_a_directory().into());
    }
    std::fs::canonicalize(path).map_err(|_| not_a_directory().into())
}

/// Paths of the archives produced by a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltArchives {
    zip: PathBuf,
    tar_gz: PathBuf,
}

impl BuiltArchives {
    #[must_use]
    pub fn zip(&self) -> &Path {
        &self.zip
    }

    #[must_use]
    pub fn tar_gz(&self) -> &Path {
        &self.tar_gz
    }

    /// Both archives, in production order.
    #[must_use]
    pub fn paths(&self) -> [&Path; 2] {
        [&self.zip, &self.tar_gz]
    }
}

/// Builds the `.zip` and `.tar.gz` archives of a package source tree.
#[derive(Debug)]
pub struct PackageBuilder<L: BuildLog = NullLog> {
    context: BuildContext,
    layout: StagingLayout,
    tags: TagSet,
    /// Descriptor whose tags are applied ahead of `tags`
    module: Option<ModuleInfo>,
    excludes: ExclusionSet,
    tools: ArchiveTools,
    logger: L,
}

impl PackageBuilder<NullLog> {
    /// Creates a builder with the default layout, no extra tags or
    /// exclusions, and a silent progress sink.
    ///
    /// # Errors
    ///
    /// See [`BuildContext::new`].
    pub fn new(
        name: &str,
        version: &str,
        source_dir: impl AsRef<Path>,
        build_dir: impl AsRef<Path>,
    ) -> PackResult<Self> {
        Ok(Self {
            context: BuildContext::new(name, version, source_dir, build_dir)?,
            layout: StagingLayout::default(),
            tags: TagSet::new(),
            module: None,
            excludes: ExclusionSet::new(),
            tools: ArchiveTools::default(),
            logger: NullLog,
        })
    }
}

impl<L: BuildLog> PackageBuilder<L> {
    /// Replaces the progress sink.
    pub fn with_logger<M: BuildLog>(self, logger: M) -> PackageBuilder<M> {
        PackageBuilder {
            context: self.context,
            layout: self.layout,
            tags: self.tags,
            module: self.module,
            excludes: self.excludes,
            tools: self.tools,
            logger,
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: StagingLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_tools(mut self, tools: ArchiveTools) -> Self {
        self.tools = tools;
        self
    }

    /// Adds tags applied before the base `@VERSION@` and `@PACKAGE@` tags.
    #[must_use]
    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags.extend(&tags);
        self
    }

    /// Excludes source-relative paths from the package.
    ///
    /// Paths that do not exist are ignored. Registration is cumulative.
    ///
    /// # Errors
    ///
    /// Returns `PackageError::ExcludeOutsideSource` if an existing path does
    /// not resolve strictly below the source directory.
    pub fn register_excludes<I, S>(&mut self, paths: I) -> PackResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let resolved = ExclusionSet::resolve(self.context.source_dir(), paths)?;
        self.excludes = self.excludes.union(&resolved);
        Ok(())
    }

    #[must_use]
    pub const fn context(&self) -> &BuildContext {
        &self.context
    }

    #[must_use]
    pub const fn layout(&self) -> StagingLayout {
        self.layout
    }

    #[must_use]
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// The module descriptor, for builds created by [`PackageBuilder::from_module`].
    #[must_use]
    pub const fn module(&self) -> Option<&ModuleInfo> {
        self.module.as_ref()
    }

    #[must_use]
    pub const fn excludes(&self) -> &ExclusionSet {
        &self.excludes
    }

    #[must_use]
    pub const fn tools(&self) -> &ArchiveTools {
        &self.tools
    }

    #[must_use]
    pub const fn logger(&self) -> &L {
        &self.logger
    }

    pub fn into_logger(self) -> L {
        self.logger
    }

    #[must_use]
    pub fn staging_dir(&self) -> PathBuf {
        self.context
            .build_dir()
            .join(self.context.staging_name(self.layout))
    }

    /// Runs the build.
    ///
    /// # Errors
    ///
    /// Returns the first failure. Files written so far are left in place,
    /// except a partially written archive, which is removed.
    pub async fn build(&mut self) -> Result<BuiltArchives> {
        let package_id = self.context.package_id();
        let staging = self.staging_dir();
        info!(package = %package_id, staging = %staging.display(), "building package");

        emit(&mut self.logger, "", 0);
        emit(&mut self.logger, &format!("Building package {package_id}"), 0);

        self.init_staging(&staging).await?;

        emit(&mut self.logger, "Copying package files to the build dir ...", 1);
        let summary = stage::stage_tree(
            self.context.source_dir(),
            &staging,
            &self.excludes,
            &mut self.logger,
        )
        .await?;
        debug!(
            directories = summary.directories,
            files = summary.files,
            skipped = summary.skipped,
            "staged package files"
        );

        self.substitute_tags(&staging, &package_id).await?;

        let zip = self.produce(ArchiveKind::Zip, &staging).await?;
        let tar_gz = self.produce(ArchiveKind::TarGz, &staging).await?;

        emit(&mut self.logger, "Cleaning up build dir ...", 1);
        remove_tree(&staging).await?;

        let archives = BuiltArchives { zip, tar_gz };
        emit(&mut self.logger, "", 0);
        emit(&mut self.logger, "Package archives created:", 0);
        for path in archives.paths() {
            emit(&mut self.logger, &path.display().to_string(), 1);
        }
        emit(&mut self.logger, "", 0);

        info!(package = %package_id, "package built");
        Ok(archives)
    }

    async fn init_staging(&mut self, staging: &Path) -> Result<()> {
        emit(
            &mut self.logger,
            &format!("Initializing build dir: {} ...", staging.display()),
            1,
        );

        if remove_tree(staging).await? {
            debug!(path = %staging.display(), "removed stale staging directory");
        }
        fs::create_dir(staging)
            .await
            .with_context(|| format!("failed to create staging directory {}", staging.display()))?;
        mirror_permissions(self.context.source_dir(), staging).await
    }

    /// Module tags are only computed when there is a document to rewrite.
    async fn substitute_tags(&mut self, staging: &Path, package_id: &str) -> Result<()> {
        if tags::present_doc_files(staging).await.is_empty() {
            return Ok(());
        }

        let mut all_tags = match &self.module {
            Some(info) => module::module_tags(info)?,
            None => TagSet::new(),
        };
        all_tags.extend(&self.tags);
        all_tags.extend(&TagSet::base(self.context.version(), package_id));
        tags::substitute_doc_files(staging, &all_tags, &mut self.logger).await?;
        Ok(())
    }

    async fn produce(&mut self, kind: ArchiveKind, staging: &Path) -> Result<PathBuf> {
        let output = self.context.archive_path(kind);
        let file_name = output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        emit(
            &mut self.logger,
            &format!("Creating the package archive {file_name} ..."),
            1,
        );

        let staging_name = self.context.staging_name(self.layout);
        let result = archive::create_archive(
            kind,
            &self.tools,
            self.context.build_dir(),
            &staging_name,
            &output,
        )
        .await;

        if let Err(e) = result {
            warn!(
                staging = %staging.display(),
                "archive creation failed; staging directory left in place"
            );
            return Err(e);
        }
        Ok(output)
    }
}
