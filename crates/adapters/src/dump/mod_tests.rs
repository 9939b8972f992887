// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::time::Duration;

#[test]
fn no_command_selects_gzip_dump() {
    let tool = ConfiguredDumpTool::from_config(None, Duration::from_secs(1));
    assert!(matches!(tool, ConfiguredDumpTool::Gzip(_)));
}

#[test]
fn empty_command_selects_gzip_dump() {
    let tool = ConfiguredDumpTool::from_config(Some(&[]), Duration::from_secs(1));
    assert!(matches!(tool, ConfiguredDumpTool::Gzip(_)));
}

#[test]
fn command_is_selected_when_configured() {
    let argv = vec!["xclogparser".to_string(), "dump".to_string()];
    let tool = ConfiguredDumpTool::from_config(Some(&argv), Duration::from_secs(1));
    assert!(matches!(tool, ConfiguredDumpTool::Command(_)));
}

#[tokio::test]
async fn configured_tool_dispatches() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.txt");
    std::fs::write(&path, "hello").unwrap();

    let argv = vec!["cat".to_string()];
    let tool = ConfiguredDumpTool::from_config(Some(&argv), Duration::from_secs(5));
    assert_eq!(tool.dump(&path).await.unwrap(), "hello");

    let tool = ConfiguredDumpTool::from_config(None, Duration::from_secs(5));
    assert!(matches!(
        tool.dump(&path).await,
        Err(DumpError::NotCompressed { .. })
    ));
}
