// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::TempDir;

#[test]
fn finds_log_by_project_path_or_name() {
    let dd = TempDir::new().unwrap();
    let logs = dd.path().join("App-abc/Logs/Build");
    std::fs::create_dir_all(&logs).unwrap();
    std::fs::write(logs.join("A.xcactivitylog"), b"x").unwrap();

    let expected = logs.join("A.xcactivitylog");
    assert_eq!(
        find_latest(dd.path(), Path::new("/src/App/App.xcodeproj")).unwrap(),
        expected
    );
    assert_eq!(find_latest(dd.path(), Path::new("App")).unwrap(), expected);
}

#[test]
fn unbuilt_project_is_an_error() {
    let dd = TempDir::new().unwrap();
    let err = find_latest(dd.path(), Path::new("App.xcodeproj")).unwrap_err();
    assert!(err.to_string().contains("no DerivedData for App"), "{err}");
}

#[test]
fn empty_log_dir_is_an_error() {
    let dd = TempDir::new().unwrap();
    std::fs::create_dir_all(dd.path().join("App-abc/Logs/Build")).unwrap();
    let err = find_latest(dd.path(), Path::new("App")).unwrap_err();
    assert!(err.to_string().starts_with("no build logs in"), "{err}");
}
