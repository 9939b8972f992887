// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build-log watcher
//!
//! Polls a directory tree for the newest build log written since the build
//! was requested and waits until its size and mtime stop changing.

mod stabilizer;

pub use stabilizer::{select_candidate, Observation, Stabilizer, MIN_STABLE_SAMPLES};

use std::path::Path;
use std::time::{Duration, SystemTime};
use tokio::time::Instant;
use xcr_adapters::{ArtifactScanner, ChangeWake};
use xcr_core::{Config, StableArtifact, TimeoutFailure};

/// Polling parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    pub poll_interval: Duration,
    pub quiet_window: Duration,
    /// Wake early on filesystem change notifications
    pub notify: bool,
}

impl WatchConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            poll_interval: config.poll_interval(),
            quiet_window: config.quiet_window(),
            notify: config.watch_notify,
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Watches for a stabilized build log
#[derive(Clone)]
pub struct ArtifactWatcher<S> {
    scanner: S,
    config: WatchConfig,
}

impl<S: ArtifactScanner> ArtifactWatcher<S> {
    pub fn new(scanner: S, config: WatchConfig) -> Self {
        Self { scanner, config }
    }

    /// Wait for a log under `root` modified at or after `since` to stabilize.
    ///
    /// Fails only when `timeout` elapses first.
    pub async fn watch(
        &self,
        root: &Path,
        since: SystemTime,
        timeout: Duration,
    ) -> Result<StableArtifact, TimeoutFailure> {
        let start = Instant::now();
        let mut stabilizer = Stabilizer::new(self.config.quiet_window);
        let mut wake = self.change_wake(root);
        let mut polls: u64 = 0;

        tracing::debug!(
            root = %root.display(),
            poll_ms = self.config.poll_interval.as_millis() as u64,
            quiet_ms = self.config.quiet_window.as_millis() as u64,
            timeout_ms = timeout.as_millis() as u64,
            "watching for build log"
        );

        loop {
            polls += 1;
            match self.scanner.scan(root).await {
                Ok(files) => {
                    let candidate = select_candidate(files, since, Instant::now().into_std());
                    match stabilizer.observe(candidate) {
                        Observation::Stable(artifact) => {
                            tracing::info!(
                                path = %artifact.path().display(),
                                size = artifact.size(),
                                polls,
                                elapsed_ms = start.elapsed().as_millis() as u64,
                                "build log stabilized"
                            );
                            return Ok(artifact);
                        }
                        observation => {
                            tracing::debug!(poll = polls, ?observation, "watch poll");
                        }
                    }
                }
                // A failed scan leaves tracking untouched
                Err(e) => tracing::warn!(root = %root.display(), error = %e, "scan failed"),
            }

            let elapsed = start.elapsed();
            if elapsed >= timeout {
                tracing::info!(
                    root = %root.display(),
                    polls,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "watch timed out"
                );
                return Err(TimeoutFailure {
                    root: root.to_path_buf(),
                    elapsed,
                });
            }

            let nap = self.config.poll_interval.min(timeout - elapsed);
            tokio::select! {
                _ = tokio::time::sleep(nap) => {}
                Some(()) = next_change(&mut wake) => {
                    tracing::trace!("woken by filesystem change");
                }
            }
        }
    }

    fn change_wake(&self, root: &Path) -> Option<ChangeWake> {
        if !self.config.notify {
            return None;
        }
        match ChangeWake::watch(root) {
            Ok(wake) => Some(wake),
            Err(e) => {
                tracing::debug!(
                    root = %root.display(),
                    error = %e,
                    "change notifications unavailable, polling only"
                );
                None
            }
        }
    }
}

async fn next_change(wake: &mut Option<ChangeWake>) -> Option<()> {
    match wake {
        Some(wake) => wake.changed().await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
#[path = "watcher_tests.rs"]
mod tests;
