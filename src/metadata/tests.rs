// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::ModuleInfo;
use super::priority::PriorityOrder;
use crate::error::{MetadataError, PackError};

const SAMPLE: &str = "\
# Sample module descriptor
title: Example Module
desc: Shows <b>bold</b> things.
Author : Jane Doe
url: https://example.org/example
version: 1.2.0
require_version: 5.2.0
dbversion: 20230101
category: admin, user features ,admin
hook: lang|
hook: common|mod_example_common
compat: mb_substr|mbstring
priority: run hook common before *
priority: RUN module AFTER other_module
";

fn metadata_error(err: PackError) -> MetadataError {
    match err {
        PackError::Metadata(inner) => *inner,
        other => panic!("expected a metadata error, got {other:?}"),
    }
}

#[test]
fn test_parse_sample() {
    let info = ModuleInfo::parse_str(SAMPLE, "info.txt").unwrap();

    assert_eq!(info.title().unwrap(), "Example Module");
    assert_eq!(info.author(), "Jane Doe");
    assert_eq!(info.required_version(), "5.2.0");
    assert_eq!(info.dbversion(), Some("20230101"));
    assert_eq!(info.hooks().get("lang").map(String::as_str), Some(""));
    assert_eq!(info.module_priorities()[0].order(), PriorityOrder::After);
    assert_eq!(info.module_priorities()[0].target(), "other_module");
    assert_eq!(info.hook_priorities()[0].hook(), "common");
    assert_eq!(info.hook_priorities()[0].target(), "*");
}

#[test]
fn test_category_duplicates_collapse() {
    let info = ModuleInfo::parse_str("category: a, b,a\ncategory: b , c", "info.txt").unwrap();
    let categories: Vec<_> = info.categories().iter().map(String::as_str).collect();
    assert_eq!(categories, ["a", "b", "c"]);
}

#[test]
fn test_round_trip() {
    let info = ModuleInfo::parse_str(SAMPLE, "info.txt").unwrap();
    let rendered = info.to_string();
    let reparsed = ModuleInfo::parse_str(&rendered, "rendered").unwrap();
    assert_eq!(info, reparsed);

    insta::assert_snapshot!(rendered, @r"
    title: Example Module
    desc: Shows <b>bold</b> things.
    author: Jane Doe
    url: https://example.org/example
    version: 1.2.0
    required_version: 5.2.0
    dbversion: 20230101
    category: admin
    category: user features
    hook: common|mod_example_common
    hook: lang|
    compat: mb_substr|mbstring
    priority: run hook common before *
    priority: run module after other_module
    ");
}

#[test]
fn test_unknown_directive_fails() {
    let err = ModuleInfo::parse_str("title: ok\ncolour: blue\nversion: 1", "info.txt").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"metadata error: unknown directive 'colour' at line 2 of info.txt");
}

#[test]
fn test_syntax_error_names_line() {
    let err = ModuleInfo::parse_str("\n\ntitle: ok\nthis is not valid\n", "mods/foo/info.txt")
        .unwrap_err();
    match metadata_error(err) {
        MetadataError::Syntax { line, content, .. } => {
            assert_eq!(line, 4);
            assert_eq!(content, "this is not valid");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_handlers() {
    assert!(ModuleInfo::parse_str("hook: lang|", "info.txt").is_ok());
    assert!(ModuleInfo::parse_str("hook: lang|   ", "info.txt").is_ok());

    for value in ["hook: common|", "compat: lang|", "compat: foo| "] {
        let err = ModuleInfo::parse_str(value, "info.txt").unwrap_err();
        assert!(
            matches!(metadata_error(err), MetadataError::InvalidValue { .. }),
            "{value} should be rejected"
        );
    }
}

#[test]
fn test_handler_requires_separator() {
    let err = ModuleInfo::parse_str("hook: common", "info.txt").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"metadata error: invalid hook at line 1 of info.txt: expected <name>|<handler>"
    );
}

#[test]
fn test_duplicate_handler_fails() {
    let err = ModuleInfo::parse_str("hook: a|x\ncompat: a|y\nhook: a|z", "info.txt").unwrap_err();
    match metadata_error(err) {
        MetadataError::Duplicate {
            directive, line, ..
        } => {
            assert_eq!(directive, "hook");
            assert_eq!(line, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_dbversion_validation() {
    assert!(ModuleInfo::parse_str("dbversion: 20230102", "info.txt").is_ok());
    for bad in ["20230101AB", "2023010", "2023010101", "२०२३०१०१"] {
        let content = format!("dbversion: {bad}");
        assert!(
            ModuleInfo::parse_str(&content, "info.txt").is_err(),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn test_invalid_priority() {
    let err = ModuleInfo::parse_str("priority: first please", "info.txt").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"metadata error: invalid priority at line 1 of info.txt: cannot parse priority 'first please'"
    );
}

#[test]
fn test_required_accessors() {
    let info = ModuleInfo::parse_str("title: only a title", "info.txt").unwrap();
    assert!(info.title().is_ok());
    assert!(info.id().is_err());
    assert!(info.description().is_err());
    insta::assert_snapshot!(
        info.version().unwrap_err().to_string(),
        @"metadata error: no version is set for the module"
    );
    assert_eq!(info.required_version(), "");
}

#[test]
fn test_load_derives_id_from_directory() {
    let temp = tempfile::tempdir().unwrap();
    let module_dir = temp.path().join("Module-example");
    std::fs::create_dir(&module_dir).unwrap();
    std::fs::write(module_dir.join("info.txt"), "version: 1.0\n").unwrap();
    std::fs::write(module_dir.join("example.php"), "<?php\n").unwrap();

    let info = ModuleInfo::load(module_dir.join("info.txt")).unwrap();
    assert_eq!(info.id().unwrap(), "example");
}

#[test]
fn test_load_rejects_bad_directory_name() {
    let temp = tempfile::tempdir().unwrap();
    let module_dir = temp.path().join("my module");
    std::fs::create_dir(&module_dir).unwrap();
    std::fs::write(module_dir.join("info.txt"), "version: 1.0\n").unwrap();

    let err = ModuleInfo::load(module_dir.join("info.txt")).unwrap_err();
    assert!(matches!(
        metadata_error(err),
        MetadataError::IdDetection { .. }
    ));
}

#[test]
fn test_load_requires_script_for_explicit_id() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("info.txt"), "id: named\nversion: 1.0\n").unwrap();

    let err = ModuleInfo::load(temp.path().join("info.txt")).unwrap_err();
    assert!(matches!(
        metadata_error(err),
        MetadataError::MissingImplementation { .. }
    ));

    std::fs::write(temp.path().join("named.php"), "<?php\n").unwrap();
    let info = ModuleInfo::load(temp.path().join("info.txt")).unwrap();
    assert_eq!(info.id().unwrap(), "named");
}

#[test]
fn test_load_missing_file() {
    let err = ModuleInfo::load("/nonexistent/info.txt").unwrap_err();
    assert!(matches!(
        metadata_error(err),
        MetadataError::ReadError { .. }
    ));
}

#[test]
fn test_json_serialization() {
    let info = ModuleInfo::parse_str("id: foo\nversion: 2.0\npriority: run module before bar", "info.txt")
        .unwrap();
    insta::assert_snapshot!(serde_json::to_string(&info).unwrap(), @r#"{"id":"foo","title":"","description":"","author":"","url":"","version":"2.0","required_version":"","categories":[],"hooks":{},"compat":{},"hook_priorities":[],"module_priorities":[{"order":"before","target":"bar"}]}"#);
}
