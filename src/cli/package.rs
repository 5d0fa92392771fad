// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `info`, `module` and `package` commands.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `info` command.
#[derive(Debug, Clone, Args)]
pub struct InfoArgs {
    /// Module directory containing info.txt.
    #[arg(value_name = "MODULE_DIR")]
    pub module_dir: PathBuf,

    /// Prints the descriptor as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Options shared by the packaging commands.
#[derive(Debug, Clone, Default, Args)]
pub struct BuildOptions {
    /// Source-relative path to leave out of the package.
    /// Can be specified multiple times.
    #[arg(short = 'x', long = "exclude", value_name = "PATH", action = clap::ArgAction::Append)]
    pub excludes: Vec<PathBuf>,

    /// Suppresses the build progress output.
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

/// Arguments for the `module` command.
#[derive(Debug, Clone, Args)]
pub struct ModuleArgs {
    /// Module directory containing info.txt.
    #[arg(value_name = "MODULE_DIR")]
    pub module_dir: PathBuf,

    #[command(flatten)]
    pub build: BuildOptions,
}

/// Arguments for the `package` command.
#[derive(Debug, Clone, Args)]
pub struct PackageArgs {
    /// Package name (letters, numbers, underscores and minus signs; no leading minus).
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Directory to package.
    #[arg(value_name = "SOURCE_DIR")]
    pub source_dir: PathBuf,

    /// Package version.
    #[arg(long = "version", value_name = "VERSION")]
    pub version: String,

    #[command(flatten)]
    pub build: BuildOptions,
}
