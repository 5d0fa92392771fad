// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for module descriptors.
//!
//! Loads realistic `info.txt` files from module directories on disk.

use modpack::error::{MetadataError, PackError};
use modpack::metadata::ModuleInfo;
use std::path::{Path, PathBuf};

fn module_dir(root: &Path, name: &str, info: &str, script: Option<&str>) -> PathBuf {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("info.txt"), info).unwrap();
    if let Some(script) = script {
        std::fs::write(dir.join(format!("{script}.php")), "<?php\n").unwrap();
    }
    dir
}

// =============================================================================
// Realistic descriptors
// =============================================================================

#[test]
fn metadata_full_module() {
    let temp = tempfile::tempdir().unwrap();
    let dir = module_dir(
        temp.path(),
        "Module-bbcode",
        "\
title: BBcode
desc: This module adds <i>BBcode</i> support.
author: Phorum Dev Team
url: http://www.phorum.org/
version: 2.0.3
require_version: 5.2.0
category: viewlayout
hook: format|phorum_mod_bbcode_format
hook: quote|phorum_mod_bbcode_quote
hook: lang|
priority: run hook format before smileys
",
        Some("bbcode"),
    );

    let info = ModuleInfo::load(dir.join("info.txt")).unwrap();
    assert_eq!(info.id().unwrap(), "bbcode");
    assert_eq!(info.version().unwrap(), "2.0.3");
    assert_eq!(info.hooks().len(), 3);
    assert!(info.compat().is_empty());

    insta::assert_snapshot!(info.to_string(), @r"
    id: bbcode
    title: BBcode
    desc: This module adds <i>BBcode</i> support.
    author: Phorum Dev Team
    url: http://www.phorum.org/
    version: 2.0.3
    required_version: 5.2.0
    category: viewlayout
    hook: format|phorum_mod_bbcode_format
    hook: lang|
    hook: quote|phorum_mod_bbcode_quote
    priority: run hook format before smileys
    ");
}

#[test]
fn metadata_comments_and_blank_lines() {
    let temp = tempfile::tempdir().unwrap();
    let dir = module_dir(
        temp.path(),
        "spamhurdles",
        "# Spam Hurdles\n\n   \ntitle: Spam Hurdles\n  # indented comment\nversion: 1.1\n",
        Some("spamhurdles"),
    );

    let info = ModuleInfo::load(dir.join("info.txt")).unwrap();
    assert_eq!(info.title().unwrap(), "Spam Hurdles");
    assert_eq!(info.dbversion(), None);
}

#[test]
fn metadata_explicit_id_overrides_directory() {
    let temp = tempfile::tempdir().unwrap();
    let dir = module_dir(
        temp.path(),
        "some-checkout",
        "id: event_logging\nversion: 1.0\n",
        Some("event_logging"),
    );

    let info = ModuleInfo::load(dir.join("info.txt")).unwrap();
    assert_eq!(info.id().unwrap(), "event_logging");
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn metadata_derived_id_without_script() {
    let temp = tempfile::tempdir().unwrap();
    let dir = module_dir(temp.path(), "Module-orphan", "version: 1.0\n", None);

    match ModuleInfo::load(dir.join("info.txt")).unwrap_err() {
        PackError::Metadata(inner) => match *inner {
            MetadataError::IdDetection { message } => {
                assert!(message.contains("'orphan'"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn metadata_error_reports_file() {
    let temp = tempfile::tempdir().unwrap();
    let dir = module_dir(
        temp.path(),
        "broken",
        "title: Broken\nhook: nohandler\n",
        Some("broken"),
    );

    let err = ModuleInfo::load(dir.join("info.txt")).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("metadata error: invalid hook at line 2 of "));
    assert!(message.ends_with("expected <name>|<handler>"), "{message}");
}
