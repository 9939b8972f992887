// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn tool(argv: &[&str]) -> CommandDumpTool {
    let argv: Vec<String> = argv.iter().map(|s| s.to_string()).collect();
    CommandDumpTool::from_argv(&argv, Duration::from_secs(5)).unwrap()
}

fn log_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.xcactivitylog");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[tokio::test]
async fn appends_path_without_placeholder() {
    let (_dir, path) = log_file("dumped text\n");
    assert_eq!(tool(&["cat"]).dump(&path).await.unwrap(), "dumped text\n");
}

#[tokio::test]
async fn substitutes_placeholder() {
    let (_dir, path) = log_file("via placeholder");
    let text = tool(&["sh", "-c", "cat \"$0\"", "{path}"])
        .dump(&path)
        .await
        .unwrap();
    assert_eq!(text, "via placeholder");
}

#[tokio::test]
async fn nonzero_exit_is_failure() {
    let (_dir, path) = log_file("x");
    let err = tool(&["sh", "-c", "echo broken >&2; exit 3"])
        .dump(&path)
        .await
        .unwrap_err();
    match err {
        DumpError::Failed { stderr, .. } => assert_eq!(stderr, "broken"),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn blank_output_is_empty() {
    let (_dir, path) = log_file("x");
    let err = tool(&["sh", "-c", "echo '   '", "{path}"])
        .dump(&path)
        .await
        .unwrap_err();
    assert!(matches!(err, DumpError::Empty));
}

#[tokio::test]
async fn missing_program_is_command_error() {
    let (_dir, path) = log_file("x");
    let err = tool(&["/nonexistent/dumper"]).dump(&path).await.unwrap_err();
    assert!(matches!(err, DumpError::Command(_)));
}

#[tokio::test]
async fn slow_command_times_out() {
    let (_dir, path) = log_file("x");
    let argv = vec!["sleep".to_string(), "10".to_string()];
    let slow = CommandDumpTool::from_argv(&argv, Duration::from_millis(100)).unwrap();
    let err = slow.dump(&path).await.unwrap_err();
    assert!(err.to_string().contains("timed out"), "got: {err}");
}

#[test]
fn empty_argv_is_none() {
    assert!(CommandDumpTool::from_argv(&[], Duration::from_secs(1)).is_none());
}
