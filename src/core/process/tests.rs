// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::{ProcessBuilder, ProcessFlags, StreamFlags};
use crate::core::env::container::Env;
use crate::error::ProcessError;

const SEARCH_PATH: &str = "/bin:/usr/bin";

fn sh(script: &str) -> ProcessBuilder {
    ProcessBuilder::new("/bin/sh").arg("-c").arg(script)
}

#[tokio::test]
async fn test_process_echo() {
    let output = ProcessBuilder::which_in("echo", SEARCH_PATH, "/")
        .expect("echo should be on the default search path")
        .arg("hello")
        .stdout_flags(StreamFlags::KEEP_IN_STRING)
        .run()
        .await
        .expect("echo should succeed");

    assert!(output.success());
    insta::assert_snapshot!(output.stdout().trim(), @"hello");
}

#[tokio::test]
async fn test_process_exit_code_allowed() {
    let output = sh("exit 42")
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await
        .expect("process should complete");

    assert_eq!(output.exit_code(), 42);
}

#[tokio::test]
async fn test_process_exit_code_rejected() {
    let err = sh("exit 3").run().await.unwrap_err();
    let process_err = err
        .downcast_ref::<ProcessError>()
        .expect("non-zero exit should be a ProcessError");
    assert!(matches!(process_err, ProcessError::NonZeroExit { code: 3, .. }));
}

#[tokio::test]
async fn test_process_env_replaces_parent_env() {
    let mut env = Env::new();
    env.set("TEST_VAR", "test_value");
    env.set("PATH", SEARCH_PATH);

    let output = sh("echo \"$TEST_VAR:$PATH:${HOME:-unset}\"")
        .env(env)
        .stdout_flags(StreamFlags::KEEP_IN_STRING)
        .run()
        .await
        .expect("process should succeed");

    insta::assert_snapshot!(output.stdout().trim(), @"test_value:/bin:/usr/bin:unset");
}

#[tokio::test]
async fn test_process_cwd() {
    let dir = tempfile::tempdir().unwrap();
    let output = sh("pwd -P")
        .cwd(dir.path())
        .stdout_flags(StreamFlags::KEEP_IN_STRING)
        .run()
        .await
        .unwrap();

    let expected = canonical_string(dir.path());
    assert_eq!(output.stdout().trim(), expected);
}

fn canonical_string(path: &std::path::Path) -> String {
    std::fs::canonicalize(path)
        .unwrap()
        .to_string_lossy()
        .into_owned()
}

#[tokio::test]
async fn test_spawn_failure() {
    let err = ProcessBuilder::new("/nonexistent/program_12345")
        .run()
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ProcessError>(),
        Some(ProcessError::SpawnFailed { .. })
    ));
}

#[test]
fn test_executable_lookup_found() {
    let builder = ProcessBuilder::which_in("sh", SEARCH_PATH, "/").expect("sh should be found");
    assert!(builder.program().is_absolute());
    assert!(builder.program().exists());
    assert!(ProcessBuilder::find_in("/bin/sh", "", "/").is_some());
}

#[test]
fn test_executable_lookup_not_found() {
    let program = "nonexistent_program_12345";

    let err = ProcessBuilder::which_in(program, SEARCH_PATH, "/").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"executable not found: 'nonexistent_program_12345' (not in /bin:/usr/bin)"
    );
    assert!(ProcessBuilder::find_in(program, SEARCH_PATH, "/").is_none());
}

#[test]
fn test_lookup_ignores_caller_path() {
    // cargo lives in the caller's PATH but not in an empty search path.
    assert!(ProcessBuilder::find_in("cargo", "/nonexistent", "/").is_none());
}

#[test]
fn test_command_line_quotes_spaces() {
    let builder = ProcessBuilder::new("zip").args(["-qr", "my archive.zip", "dir"]);
    assert_eq!(builder.command_line(), "zip -qr \"my archive.zip\" dir");
}

#[tokio::test]
async fn test_process_stderr_kept_and_stdout_discarded() {
    let output = sh("echo out; echo err >&2; exit 5")
        .flag(ProcessFlags::ALLOW_FAILURE)
        .stdout_flags(StreamFlags::empty())
        .stderr_flags(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING)
        .run()
        .await
        .unwrap();

    assert_eq!(output.exit_code(), 5);
    assert_eq!(output.stdout(), "");
    assert_eq!(output.stderr(), "err");
}

#[tokio::test]
async fn test_process_non_utf8_argument_passed_verbatim() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join(OsStr::from_bytes(b"caf\xe9"));
    std::fs::create_dir(&target).unwrap();

    let output = sh("test -d \"$1\"")
        .arg("sh")
        .arg(&target)
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await
        .unwrap();
    assert!(output.success());
}
