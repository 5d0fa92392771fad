// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module and package command implementations for modpack.
//!
//! ```text
//! run_module_command / run_package_command
//!   |
//!   v
//! PackageBuilder::from_module / ::new     (validation only)
//!   |
//!   v
//! ArchiveTools::preflight                 (zip + tar on tools.search_path)
//!   |
//!   v
//! register excludes                       (package.excludes, then -x)
//!   |
//!   v
//! build                                   (ScreenLog, or silent with -q)
//! ```

use tracing::info;

use crate::cli::package::{BuildOptions, ModuleArgs, PackageArgs};
use crate::config::Config;
use crate::error::Result;
use crate::logging::sink::{NullLog, ScreenLog};
use crate::package::archive::ArchiveTools;
use crate::package::{BuiltArchives, PackageBuilder};

/// Main handler for the module command.
///
/// # Errors
///
/// Returns an error if the module descriptor is invalid, a tool is missing,
/// or the build fails.
pub async fn run_module_command(args: &ModuleArgs, config: &Config) -> Result<()> {
    let builder = PackageBuilder::from_module(&args.module_dir, config.paths.build_dir())?;
    run_build(builder, &args.build, config).await
}

/// Main handler for the package command.
///
/// # Errors
///
/// Returns an error if the arguments are invalid, a tool is missing, or the
/// build fails.
pub async fn run_package_command(args: &PackageArgs, config: &Config) -> Result<()> {
    let builder = PackageBuilder::new(
        &args.name,
        &args.version,
        &args.source_dir,
        config.paths.build_dir(),
    )?;
    run_build(builder, &args.build, config).await
}

async fn run_build(
    builder: PackageBuilder<NullLog>,
    options: &BuildOptions,
    config: &Config,
) -> Result<()> {
    let tools = ArchiveTools::from_config(&config.tools);
    tools.preflight(builder.context().build_dir())?;

    let mut builder = builder.with_tools(tools);
    builder.register_excludes(&config.package.excludes)?;
    builder.register_excludes(&options.excludes)?;

    let archives = if options.quiet {
        let archives = builder.build().await?;
        print_archives(&archives);
        archives
    } else {
        builder.with_logger(ScreenLog::stdout()).build().await?
    };

    info!(
        zip = %archives.zip().display(),
        tar_gz = %archives.tar_gz().display(),
        "archives ready"
    );
    Ok(())
}

/// Quiet builds still report where the archives went, one path per line.
fn print_archives(archives: &BuiltArchives) {
    for path in archives.paths() {
        println!("{}", path.display());
    }
}
