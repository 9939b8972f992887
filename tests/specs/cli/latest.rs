//! `xcr latest` specs

use crate::prelude::*;

#[test]
fn prints_newest_log_of_project() {
    let ws = Workspace::new();
    let log = ws.file("DerivedData/App-abcdef/Logs/Build/1.xcactivitylog", b"log");

    ws.xcr()
        .args(&["latest", "App.xcodeproj", "--derived-data"])
        .arg_path(ws.path().join("DerivedData"))
        .passes()
        .stdout_eq(&format!("{}\n", log.display()));
}

#[test]
fn derived_data_from_environment() {
    let ws = Workspace::new();
    let log = ws.file("DD/App-abcdef/Logs/Build/1.xcactivitylog", b"log");

    let run = ws
        .xcr()
        .env("XCR_DERIVED_DATA", ws.path().join("DD"))
        .args(&["latest", "App", "-o", "json"])
        .passes();

    assert_eq!(run.json()["artifact"], log.to_str().unwrap());
}

#[test]
fn unbuilt_project_fails() {
    let ws = Workspace::new();

    ws.xcr()
        .args(&["latest", "App", "--derived-data"])
        .arg_path(ws.path().join("DerivedData"))
        .exits(EXIT_BUILD_FAILED)
        .stderr_has("no DerivedData for App");
}
