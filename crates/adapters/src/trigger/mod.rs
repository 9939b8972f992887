// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Starting builds in the IDE

mod osascript;

pub use osascript::OsaScriptTrigger;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeBuildTrigger, TriggerCall};

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use xcr_core::BuildAction;

/// Errors from driving the IDE
#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("{0}")]
    Command(String),
    #[error("osascript failed: {0}")]
    Script(String),
    #[error("failed to open {}: {reason}", path.display())]
    Open { path: PathBuf, reason: String },
}

/// Delivers build/run requests to the IDE.
#[async_trait]
pub trait BuildTrigger: Clone + Send + Sync + 'static {
    /// Whether UI automation is permitted for this process
    async fn has_permissions(&self) -> bool;

    /// Whether the IDE is the frontmost application
    async fn is_frontmost(&self) -> bool;

    /// Open and activate the project
    async fn open_project(&self, project: &Path) -> Result<(), TriggerError>;

    /// Send the build or run command
    async fn trigger(&self, action: BuildAction) -> Result<(), TriggerError>;
}
