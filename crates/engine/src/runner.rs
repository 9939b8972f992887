// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build runner: trigger a build, wait for its log, decode it.

use crate::decoder::LogDecoder;
use crate::derived_data;
use crate::watcher::ArtifactWatcher;
use std::path::PathBuf;
use std::time::SystemTime;
use thiserror::Error;
use xcr_adapters::{ArtifactScanner, BuildTrigger, DumpTool, TriggerError};
use xcr_core::{BuildRequest, DecodeResult, TimeoutFailure};

/// Failures before a log could be decoded
#[derive(Debug, Error)]
pub enum RunError {
    #[error("project not found: {}", .0.display())]
    ProjectNotFound(PathBuf),

    #[error(
        "UI automation is not permitted; grant accessibility access to this terminal \
         in System Settings > Privacy & Security > Accessibility"
    )]
    MissingPermissions,

    #[error("failed to trigger build: {0}")]
    Trigger(#[from] TriggerError),

    #[error(transparent)]
    Timeout(#[from] TimeoutFailure),
}

/// Outcome of one build request
#[derive(Debug)]
pub struct BuildReport {
    /// The decoded log, kept for manual inspection
    pub artifact: PathBuf,
    pub result: DecodeResult,
}

/// Drives one build/run request end to end
pub struct BuildRunner<T, S, D> {
    trigger: T,
    watcher: ArtifactWatcher<S>,
    decoder: LogDecoder<D>,
    derived_data: PathBuf,
}

impl<T, S, D> BuildRunner<T, S, D>
where
    T: BuildTrigger,
    S: ArtifactScanner,
    D: DumpTool,
{
    pub fn new(
        trigger: T,
        watcher: ArtifactWatcher<S>,
        decoder: LogDecoder<D>,
        derived_data: PathBuf,
    ) -> Self {
        Self {
            trigger,
            watcher,
            decoder,
            derived_data,
        }
    }

    pub async fn run(&self, request: &BuildRequest) -> Result<BuildReport, RunError> {
        let project = &request.project_path;
        let name = match request.project_name() {
            Some(name) if project.exists() => name,
            _ => return Err(RunError::ProjectNotFound(project.clone())),
        };

        if !self.trigger.has_permissions().await {
            return Err(RunError::MissingPermissions);
        }

        if let Some(target) = &request.target {
            // Keystroke triggers build the scheme selected in the IDE
            tracing::info!(
                requested_target = %target,
                "target selection is not supported, building the active scheme"
            );
        }

        if self.trigger.is_frontmost().await {
            tracing::debug!("IDE already frontmost, not reopening project");
        } else {
            tracing::info!(project = %project.display(), "opening project");
            self.trigger.open_project(project).await?;
        }

        let root = derived_data::watch_root(&self.derived_data, name);
        let since = SystemTime::now();
        tracing::info!(
            project = name,
            action = %request.action,
            root = %root.display(),
            "triggering build"
        );
        self.trigger.trigger(request.action).await?;

        let artifact = self.watcher.watch(&root, since, request.timeout).await?;
        let path = artifact.path().to_path_buf();
        let result = self.decoder.decode(artifact).await;
        match &result {
            Ok(outcome) => tracing::info!(
                path = %path.display(),
                strategy = %outcome.strategy,
                errors = outcome.error_count(),
                warnings = outcome.warning_count(),
                "build log decoded"
            ),
            Err(failure) => tracing::warn!(retryable = failure.is_retryable(), "{failure}"),
        }
        Ok(BuildReport {
            artifact: path,
            result,
        })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
