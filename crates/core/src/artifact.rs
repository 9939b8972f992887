// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build-log artifact observations and the watcher's two outcomes.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

/// One observation of a candidate log file during polling.
///
/// Recreated on every poll and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCandidate {
    pub path: PathBuf,
    pub modified: SystemTime,
    pub size: u64,
    pub sampled_at: Instant,
}

impl ArtifactCandidate {
    /// True when `other` shows the same file with unchanged size and mtime.
    pub fn same_state(&self, other: &ArtifactCandidate) -> bool {
        self.path == other.path && self.size == other.size && self.modified == other.modified
    }
}

/// A candidate whose size and mtime held still across the quiet window.
///
/// Produced once per build request and consumed by value by the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StableArtifact {
    path: PathBuf,
    size: u64,
    #[serde(skip)]
    modified: SystemTime,
}

impl StableArtifact {
    /// Promote a candidate observation.
    pub fn promote(candidate: &ArtifactCandidate) -> Self {
        Self {
            path: candidate.path.clone(),
            size: candidate.size,
            modified: candidate.modified,
        }
    }

    /// Treat an existing file as already stable (e.g. decoding an old log).
    pub fn from_path(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let meta = std::fs::metadata(&path)?;
        Ok(Self {
            size: meta.len(),
            modified: meta.modified()?,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size in bytes at promotion time.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Modification time at promotion time.
    pub fn modified(&self) -> SystemTime {
        self.modified
    }
}

/// No artifact stabilized before the deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutFailure {
    pub root: PathBuf,
    pub elapsed: Duration,
}

impl fmt::Display for TimeoutFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no stable build log under {} after {}",
            self.root.display(),
            crate::format_duration(self.elapsed)
        )
    }
}

impl std::error::Error for TimeoutFailure {}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
