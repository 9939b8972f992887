// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem listing for build-log discovery

mod walk;
mod wake;

pub use wake::ChangeWake;
pub use walk::WalkDirScanner;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeScanner;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

/// Errors from scanning a watch root
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to scan {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid artifact pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },
    #[error("scan task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("{0}")]
    Scripted(String),
}

/// A file that matched the artifact pattern, with its metadata at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub modified: SystemTime,
    pub size: u64,
}

/// Lists candidate build logs under a root directory.
#[async_trait]
pub trait ArtifactScanner: Clone + Send + Sync + 'static {
    /// All matching regular files under `root`. A missing root is empty, not
    /// an error.
    async fn scan(&self, root: &Path) -> Result<Vec<ScannedFile>, ScanError>;
}
