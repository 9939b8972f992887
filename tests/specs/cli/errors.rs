//! CLI error handling specs
//!
//! Verify error messages and exit codes for invalid invocations.

use crate::prelude::*;

#[test]
fn missing_subcommand_shows_help() {
    let ws = Workspace::new();
    ws.xcr().exits(2).stderr_has("Usage: xcr");
}

#[test]
fn unknown_action_is_rejected() {
    let ws = Workspace::new();
    ws.xcr()
        .args(&["build", "App.xcodeproj", "--action", "archive"])
        .exits(2)
        .stderr_has("unknown action 'archive'");
}

#[test]
fn build_of_missing_project_fails_fast() {
    let ws = Workspace::new();
    ws.xcr()
        .args(&["build", "--derived-data"])
        .arg_path(ws.path().join("DerivedData"))
        .arg_path(ws.path().join("Missing.xcodeproj"))
        .exits(EXIT_BUILD_FAILED)
        .stderr_has("project not found");
}

#[test]
fn invalid_config_file_is_reported() {
    let ws = Workspace::new();
    ws.file("config.toml", b"poll_interval_ms = 0\n");
    let log = ws.file("A.xcactivitylog", b"");

    ws.xcr()
        .args(&["decode"])
        .arg_path(&log)
        .exits(EXIT_BUILD_FAILED)
        .stderr_has("poll_interval_ms");
}

#[test]
fn log_file_receives_tracing_output() {
    let ws = Workspace::new();
    let log = ws.file("A.xcactivitylog", b"garbage");
    let trace = ws.path().join("logs/xcr.log");

    ws.xcr()
        .env("XCR_LOG", "debug")
        .env("XCR_LOG_FILE", &trace)
        .env("XCR_DUMP_COMMAND", "false")
        .args(&["decode"])
        .arg_path(&log)
        .exits(EXIT_UNDECODABLE);

    let written = std::fs::read_to_string(&trace).unwrap();
    assert!(written.contains("structured decode failed"), "{written}");
}
