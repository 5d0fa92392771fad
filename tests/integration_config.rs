// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use modpack::config::Config;
use modpack::config::loader::ConfigLoader;
use modpack::logging::LogLevel;
use std::path::PathBuf;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_full() {
    let toml = r#"
[global]
output_log_level = 2
file_log_level = 5
log_file = "/var/log/modpack.log"

[paths]
build = "/srv/build"

[tools]
zip = "/opt/bin/zip"
tar = "gtar"
search_path = "/opt/bin:/usr/bin"
"#;
    let config = Config::parse(toml).unwrap();
    insta::assert_yaml_snapshot!(config, @r#"
    global:
      output_log_level: 2
      file_log_level: 5
      log_file: /var/log/modpack.log
    paths:
      build: /srv/build
    tools:
      zip: /opt/bin/zip
      tar: gtar
      search_path: "/opt/bin:/usr/bin"
    package: {}
    "#);
}

#[test]
fn config_parse_excludes() {
    let config = Config::parse("[package]\nexcludes = [\"TODO\", \"docs/internal\"]\n").unwrap();
    assert_eq!(config.package.excludes, ["TODO", "docs/internal"]);
}

#[test]
fn config_parse_empty_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.paths.build, PathBuf::from("/tmp"));
    assert_eq!(config.tools.search_path, "/bin:/usr/bin");
    assert!(config.package.excludes.is_empty());
}

#[test]
fn config_parse_unknown_section() {
    assert!(Config::parse("[versions]\nsdk = \"10\"\n").is_err());
}

#[test]
fn config_parse_invalid_toml() {
    assert!(Config::parse("[paths\nbuild = 1").is_err());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_later_files_override_earlier() {
    let temp = tempfile::tempdir().unwrap();
    let base = temp.path().join("modpack.toml");
    let local = temp.path().join("local.toml");
    std::fs::write(
        &base,
        "[paths]\nbuild = \"/srv/base\"\n[tools]\ntar = \"gtar\"\n",
    )
    .unwrap();
    std::fs::write(&local, "[paths]\nbuild = \"/srv/local\"\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file_optional(&base)
        .add_toml_file(&local);
    let files = loader.format_loaded_files();
    let config = loader.build().unwrap();

    assert_eq!(config.paths.build, PathBuf::from("/srv/local"));
    assert_eq!(config.tools.tar, PathBuf::from("gtar"));
    assert_eq!(files.len(), 2);
    assert!(files[1].starts_with("2. [file] "));
}

#[test]
fn config_set_option_beats_files() {
    let config = ConfigLoader::new()
        .add_toml_str("[paths]\nbuild = \"/srv/from-file\"\n")
        .set_option("paths/build=/srv/from-cli")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.paths.build, PathBuf::from("/srv/from-cli"));
}

#[test]
fn config_set_option_malformed() {
    let err = ConfigLoader::new().set_option("build=/x").err().unwrap();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid option override 'build=/x' (expected section/key=value)"
    );
}

#[test]
fn config_set_option_invalid_log_level() {
    let result = ConfigLoader::new()
        .set_option("global/output_log_level=12")
        .unwrap()
        .build();
    assert!(result.is_err());
}

#[test]
fn config_from_file_relative_build_dir() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("modpack.toml");
    std::fs::write(&path, "[paths]\nbuild = \"dist\"\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert!(config.paths.build.is_absolute());
    assert!(config.paths.build_dir().ends_with("dist"));
}
