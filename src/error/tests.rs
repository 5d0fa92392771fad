// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{MetadataError, PackError, PackResult, PackageError, bail_out};

#[test]
fn test_metadata_error_display() {
    let err = MetadataError::Syntax {
        path: "info.txt".to_string(),
        line: 3,
        content: "no colon here".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"cannot parse line 3 of info.txt: no colon here");
}

#[test]
fn test_package_error_display() {
    let err = PackageError::ArchiveToolFailed {
        tool: "tar",
        code: 2,
        stderr: String::new(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"the tar program exited with a non-zero exit code (2)"
    );

    let err = PackageError::ArchiveToolFailed {
        tool: "zip",
        code: 12,
        stderr: "zip error: Nothing to do!\n".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"the zip program exited with a non-zero exit code (12): zip error: Nothing to do!"
    );
}

#[test]
fn test_boxed_conversion_keeps_message() {
    let err: PackError = MetadataError::MissingField { field: "version" }.into();
    assert!(matches!(err, PackError::Metadata(_)));
    insta::assert_snapshot!(err.to_string(), @"metadata error: no version is set for the module");
}

#[test]
fn test_bail_out() {
    let err = bail_out("stop");
    insta::assert_snapshot!(err.to_string(), @"fatal error: stop");
}

#[test]
fn test_pack_error_size() {
    // Box<str> (Bailed) is 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<PackError>();
    assert!(size <= 24, "PackError is {size} bytes, expected <= 24");
}

#[test]
fn test_pack_result_size() {
    let size = std::mem::size_of::<PackResult<()>>();
    assert!(size <= 24, "PackResult<()> is {size} bytes, expected <= 24");
}
