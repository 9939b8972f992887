// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build request issued by the caller before the watch/decode cycle starts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Action requested from the IDE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildAction {
    #[default]
    Build,
    Run,
}

impl BuildAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildAction::Build => "build",
            BuildAction::Run => "run",
        }
    }
}

impl fmt::Display for BuildAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown action '{0}'; expected build or run")]
pub struct UnknownAction(pub String);

impl FromStr for BuildAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "build" => Ok(BuildAction::Build),
            "run" => Ok(BuildAction::Run),
            _ => Err(UnknownAction(s.to_string())),
        }
    }
}

/// Immutable description of one build/run invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub project_path: PathBuf,
    pub action: BuildAction,
    pub target: Option<String>,
    pub timeout: Duration,
}

impl BuildRequest {
    pub fn new(project_path: impl Into<PathBuf>, action: BuildAction, timeout: Duration) -> Self {
        Self {
            project_path: project_path.into(),
            action,
            target: None,
            timeout,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Project name as the IDE derives it: the file stem of the project path.
    ///
    /// `/src/App/App.xcodeproj` → `App`.
    pub fn project_name(&self) -> Option<&str> {
        self.project_path.file_stem().and_then(|s| s.to_str())
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
