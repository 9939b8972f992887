// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn run_with_timeout_success() {
    let mut cmd = Command::new("echo");
    cmd.arg("hello");
    let output = run_with_timeout(cmd, Duration::from_secs(5), "echo")
        .await
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hello");
}

#[tokio::test]
async fn nonzero_exit_is_returned_not_raised() {
    let cmd = Command::new("false");
    let output = run_with_timeout(cmd, Duration::from_secs(5), "false")
        .await
        .unwrap();
    assert!(!output.status.success());
}

#[tokio::test]
async fn spawn_failure_names_the_command() {
    let cmd = Command::new("/nonexistent/xclogparser");
    let err = run_with_timeout(cmd, Duration::from_secs(5), "dump command")
        .await
        .unwrap_err();
    assert!(err.starts_with("dump command failed:"), "got: {}", err);
}

#[tokio::test]
async fn elapsed_timeout_is_reported() {
    let mut cmd = Command::new("sleep");
    cmd.arg("10").kill_on_drop(true);
    let err = run_with_timeout(cmd, Duration::from_millis(100), "osascript keystroke")
        .await
        .unwrap_err();
    assert_eq!(err, "osascript keystroke timed out after 0.1s");
}
