// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! AppleScript trigger: System Events keystrokes sent to Xcode

use super::{BuildTrigger, TriggerError};
use crate::env::osascript_timeout;
use crate::subprocess::{run_with_timeout, PERMISSION_CHECK_TIMEOUT};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use xcr_core::BuildAction;

/// Application name reported by System Events.
pub const XCODE_APP: &str = "Xcode";

const PERMISSION_PROBE: &str = r#"tell application "System Events" to return true"#;

const FRONTMOST_APP: &str = r#"tell application "System Events"
    return name of first application process whose frontmost is true
end tell"#;

/// Trigger that drives Xcode through `osascript`
#[derive(Clone, Default)]
pub struct OsaScriptTrigger;

impl OsaScriptTrigger {
    pub fn new() -> Self {
        Self
    }

    async fn run_script(
        script: &str,
        timeout: std::time::Duration,
        description: &str,
    ) -> Result<String, TriggerError> {
        let mut cmd = Command::new("osascript");
        cmd.args(["-e", script]).kill_on_drop(true);
        let output = run_with_timeout(cmd, timeout, description)
            .await
            .map_err(TriggerError::Command)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(TriggerError::Script(stderr));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Keystroke that starts `action` (with the command modifier).
pub fn action_key(action: BuildAction) -> char {
    match action {
        BuildAction::Build => 'b',
        BuildAction::Run => 'r',
    }
}

/// Activate Xcode, send the action keystroke, then switch back to the
/// previous application.
pub fn trigger_script(action: BuildAction) -> String {
    format!(
        r#"tell application "{XCODE_APP}" to activate
delay 0.1
tell application "System Events" to keystroke "{key}" using {{command down}}
delay 0.1
tell application "System Events" to keystroke tab using {{command down}}"#,
        key = action_key(action)
    )
}

pub fn open_script(project: &Path) -> String {
    let path = project.to_string_lossy().replace('\\', "\\\\").replace('"', "\\\"");
    format!(
        r#"tell application "{XCODE_APP}"
    activate
    open "{path}"
end tell"#
    )
}

#[async_trait]
impl BuildTrigger for OsaScriptTrigger {
    async fn has_permissions(&self) -> bool {
        Self::run_script(PERMISSION_PROBE, PERMISSION_CHECK_TIMEOUT, "osascript probe")
            .await
            .is_ok()
    }

    async fn is_frontmost(&self) -> bool {
        match Self::run_script(FRONTMOST_APP, osascript_timeout(), "osascript frontmost").await {
            Ok(app) => app == XCODE_APP,
            Err(e) => {
                tracing::debug!(error = %e, "could not read frontmost application");
                false
            }
        }
    }

    async fn open_project(&self, project: &Path) -> Result<(), TriggerError> {
        Self::run_script(&open_script(project), osascript_timeout(), "osascript open")
            .await
            .map_err(|e| TriggerError::Open {
                path: project.to_path_buf(),
                reason: e.to_string(),
            })?;
        // Xcode needs a moment before it accepts keystrokes
        tokio::time::sleep(crate::env::open_settle()).await;
        Ok(())
    }

    async fn trigger(&self, action: BuildAction) -> Result<(), TriggerError> {
        tracing::info!(action = %action, "sending keystroke to Xcode");
        Self::run_script(&trigger_script(action), osascript_timeout(), "osascript keystroke").await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "osascript_tests.rs"]
mod tests;
