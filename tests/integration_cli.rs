// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use modpack::cli::{Cli, Command};
use std::path::PathBuf;

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["modpack", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["modpack", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["modpack"]).unwrap();
    assert!(cli.command.is_none());
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_repeated_ini_and_set() {
    let cli = Cli::try_parse_from([
        "modpack",
        "--ini",
        "a.toml",
        "-i",
        "b.toml",
        "--set",
        "tools/tar=/usr/bin/gtar",
        "-s",
        "package/excludes=TODO,notes",
        "--log-file",
        "build.log",
        "options",
    ])
    .unwrap();

    assert_eq!(
        cli.global.inis,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        "tools/tar=/usr/bin/gtar",
        "package/excludes=TODO,notes",
        "global/log_file=build.log",
    ]
    "#);
}

#[test]
fn cli_global_options_after_command() {
    let result = Cli::try_parse_from(["modpack", "options", "-l", "3"]);
    assert!(result.is_err());
}

// =============================================================================
// Packaging Commands
// =============================================================================

#[test]
fn cli_module_with_build_dir() {
    let cli = Cli::try_parse_from(["modpack", "-d", "out", "module", "mods/example"]).unwrap();

    assert_eq!(cli.global.build_dir, Some(PathBuf::from("out")));
    match cli.command {
        Some(Command::Module(args)) => {
            assert_eq!(args.module_dir, PathBuf::from("mods/example"));
            assert!(args.build.excludes.is_empty());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn cli_module_requires_dir() {
    assert!(Cli::try_parse_from(["modpack", "module"]).is_err());
}

#[test]
fn cli_package_with_excludes() {
    let cli = Cli::try_parse_from([
        "modpack",
        "package",
        "phorum-core",
        ".",
        "--version=5.2.19",
        "-x",
        "mods",
        "-x",
        "cache",
        "--quiet",
    ])
    .unwrap();

    match cli.command {
        Some(Command::Package(args)) => {
            assert_eq!(args.name, "phorum-core");
            assert_eq!(args.version, "5.2.19");
            assert_eq!(
                args.build.excludes,
                [PathBuf::from("mods"), PathBuf::from("cache")]
            );
            assert!(args.build.quiet);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn cli_unknown_command() {
    assert!(Cli::try_parse_from(["modpack", "release"]).is_err());
}
