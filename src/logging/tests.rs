// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::LogLevel;
use super::sink::{BuildLog, NullLog, ScreenLog};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::from_u8(4), Some(LogLevel::DEBUG));
    assert_eq!(LogLevel::from_u8(9), None);
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    insta::assert_debug_snapshot!(filters, @r#"
    [
        "off",
        "modpack=error",
        "modpack=warn",
        "modpack=info",
        "modpack=debug",
        "modpack=trace",
        "trace",
    ]
    "#);
}

#[test]
fn test_screen_log_indentation() {
    let mut log = ScreenLog::new(Vec::new());
    log.log("Building package demo-1.0", 0);
    log.log("Copying package files to the build dir ...", 1);
    log.log("Updated README", 2);

    let output = String::from_utf8(log.into_inner()).unwrap();
    assert_eq!(
        output,
        "Building package demo-1.0\n\
         > Copying package files to the build dir ...\n  \
         > Updated README\n"
    );
}

#[test]
fn test_screen_log_empty_message() {
    assert_eq!(ScreenLog::<Vec<u8>>::format_line("", 0), "");
    assert_eq!(ScreenLog::<Vec<u8>>::format_line("x", 3), "    > x");
}

#[test]
fn test_closure_sink_collects() {
    let mut lines = Vec::new();
    {
        let mut sink = |message: &str, level: usize| lines.push((level, message.to_string()));
        sink.log("top", 0);
        sink.log("nested", 1);
    }
    assert_eq!(lines, vec![(0, "top".to_string()), (1, "nested".to_string())]);
}

#[test]
fn test_null_log_is_silent() {
    let mut sink = NullLog;
    sink.log("ignored", 0);
}
