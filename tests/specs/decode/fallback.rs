//! Fallback decoding
//!
//! Logs the structured decoder cannot read are dumped to text and scanned
//! line by line; when that fails too, the raw path is reported.

use crate::prelude::*;

const DUMP: &str = "\
CompileC /src/App/Helper.m normal arm64
/src/App/Helper.m:8:9: warning: unused variable 'temp' [-Wunused-variable]
/src/App/ViewController.h:12:30: error: expected ';' after method prototype
/src/App/ViewController.h:11:1: note: to match this '('
";

#[test]
fn gzip_text_is_scanned_when_structure_is_unreadable() {
    let ws = Workspace::new();
    let log = ws.gzip_text("A.xcactivitylog", DUMP);

    ws.xcr()
        .args(&["decode"])
        .arg_path(&log)
        .exits(EXIT_BUILD_FAILED)
        .stdout_has("(fallback decode)")
        .stdout_has("  ● /src/App/ViewController.h:12:30: expected ';' after method prototype\n")
        .stdout_has("  ● /src/App/Helper.m:8:9: unused variable 'temp' [-Wunused-variable]\n")
        .stdout_lacks("to match this")
        .stdout_has("BUILD FAILED (1 error)");
}

#[test]
fn configured_dump_command_replaces_gzip_dump() {
    let ws = Workspace::new();
    let log = ws.file("A.xcactivitylog", DUMP.as_bytes());

    ws.xcr()
        .env("XCR_DUMP_COMMAND", "cat")
        .args(&["decode"])
        .arg_path(&log)
        .exits(EXIT_BUILD_FAILED)
        .stdout_has("(fallback decode)")
        .stdout_has("expected ';' after method prototype");
}

#[test]
fn dump_command_from_config_file() {
    let ws = Workspace::new();
    ws.file("config.toml", b"dump_command = [\"cat\", \"{path}\"]\n");
    let log = ws.file("A.xcactivitylog", DUMP.as_bytes());

    ws.xcr()
        .args(&["decode"])
        .arg_path(&log)
        .exits(EXIT_BUILD_FAILED)
        .stdout_has("(fallback decode)");
}

#[test]
fn undecodable_log_reports_raw_path() {
    let ws = Workspace::new();
    let log = ws.file("A.xcactivitylog", b"\x00\x01 not a build log");

    ws.xcr()
        .env("XCR_DUMP_COMMAND", "false")
        .args(&["decode"])
        .arg_path(&log)
        .exits(EXIT_UNDECODABLE)
        .stdout_has("BUILD LOG UNREADABLE")
        .stdout_has(&format!("raw log: {}", log.display()));
}

#[test]
fn undecodable_log_as_json() {
    let ws = Workspace::new();
    let log = ws.file("A.xcactivitylog", b"garbage");

    let run = ws
        .xcr()
        .args(&["decode", "--output", "json"])
        .arg_path(&log)
        .exits(EXIT_UNDECODABLE);
    let json = run.json();

    assert_eq!(json["status"], "undecodable");
    assert_eq!(json["retryable"], false);
    assert_eq!(json["reason"]["kind"], "undecodable");
}
