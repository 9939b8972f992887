// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! External dump command (e.g. `xclogparser dump --file {path}`)

use super::{DumpError, DumpTool};
use crate::subprocess::run_with_timeout;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

/// Placeholder replaced by the log path in command arguments.
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Runs a configured program and captures its stdout.
#[derive(Debug, Clone)]
pub struct CommandDumpTool {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandDumpTool {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    /// Split an argv into program and arguments. `None` for an empty argv.
    pub fn from_argv(argv: &[String], timeout: Duration) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.to_vec(), timeout))
    }

    fn command(&self, path: &Path) -> Command {
        let path = path.to_string_lossy();
        let mut cmd = Command::new(&self.program);
        let mut substituted = false;
        for arg in &self.args {
            if arg.contains(PATH_PLACEHOLDER) {
                substituted = true;
                cmd.arg(arg.replace(PATH_PLACEHOLDER, &path));
            } else {
                cmd.arg(arg);
            }
        }
        if !substituted {
            cmd.arg(&*path);
        }
        cmd.kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl DumpTool for CommandDumpTool {
    async fn dump(&self, path: &Path) -> Result<String, DumpError> {
        let cmd = self.command(path);
        let output = run_with_timeout(cmd, self.timeout, &self.program)
            .await
            .map_err(DumpError::Command)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::debug!(
                program = %self.program,
                status = %output.status,
                stderr = %stderr,
                "dump command failed"
            );
            return Err(DumpError::Failed {
                status: output.status.to_string(),
                stderr,
            });
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        if text.trim().is_empty() {
            return Err(DumpError::Empty);
        }
        Ok(text)
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
