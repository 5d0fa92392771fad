// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for modpack using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! modpack [global options] <command>
//! version
//! options
//! inis
//! info <MODULE_DIR> [--json]
//! module <MODULE_DIR> [-x PATH]... [-q]
//! package <NAME> <SOURCE_DIR> --version V [-x PATH]... [-q]
//! ```

pub mod global;
pub mod package;


use crate::cli::global::GlobalOptions;
use crate::cli::package::{InfoArgs, ModuleArgs, PackageArgs};
use clap::{Parser, Subcommand};

/// Module Packaging Tool
///
/// Builds distributable archives of modules and other packages.
#[derive(Debug, Parser)]
#[command(
    name = "modpack",
    author,
    version,
    about = "Module Packaging Tool",
    long_about = "modpack Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Builds .zip and .tar.gz archives of modules and other packages.\n\n\
                  Invoking `modpack module some/module` packages the module\n\
                  described by some/module/info.txt. See\n\
                  `modpack <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  modpack loads `modpack.toml` from the current directory if it\n\
                  exists. Additional files can be given with --ini, those are loaded\n\
                  after it and override its values. MODPACK_<SECTION>__<KEY>\n\
                  environment variables and --set options are applied last."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files used by modpack.
    Inis,

    /// Shows the info.txt of a module.
    Info(InfoArgs),

    /// Packages a module directory.
    Module(ModuleArgs),

    /// Packages an arbitrary directory.
    Package(PackageArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
