// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake scanner for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ArtifactScanner, ScanError, ScannedFile};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Default)]
struct FakeScannerState {
    script: VecDeque<Result<Vec<ScannedFile>, String>>,
    last: Vec<ScannedFile>,
    roots: Vec<PathBuf>,
}

/// Scanner that replays scripted observations, one per scan.
///
/// Once the script runs out, the last successful observation repeats.
#[derive(Clone, Default)]
pub struct FakeScanner {
    inner: Arc<Mutex<FakeScannerState>>,
}

impl FakeScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the files seen by the next unscripted scan.
    pub fn push_poll(&self, files: Vec<ScannedFile>) {
        self.inner.lock().script.push_back(Ok(files));
    }

    /// Queue a failing scan.
    pub fn push_error(&self, message: &str) {
        self.inner.lock().script.push_back(Err(message.to_string()));
    }

    /// Number of scans performed so far
    pub fn scan_count(&self) -> usize {
        self.inner.lock().roots.len()
    }

    /// Roots passed to each scan, in order
    pub fn roots(&self) -> Vec<PathBuf> {
        self.inner.lock().roots.clone()
    }
}

#[async_trait]
impl ArtifactScanner for FakeScanner {
    async fn scan(&self, root: &Path) -> Result<Vec<ScannedFile>, ScanError> {
        let mut inner = self.inner.lock();
        inner.roots.push(root.to_path_buf());
        match inner.script.pop_front() {
            Some(Ok(files)) => {
                inner.last = files.clone();
                Ok(files)
            }
            Some(Err(message)) => Err(ScanError::Scripted(message)),
            None => Ok(inner.last.clone()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
