// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake dump tool for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{DumpError, DumpTool};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

struct FakeDumpState {
    output: Result<String, String>,
    calls: Vec<PathBuf>,
}

/// Dump tool returning canned text (or a canned failure) and recording calls
#[derive(Clone)]
pub struct FakeDumpTool {
    inner: Arc<Mutex<FakeDumpState>>,
}

impl FakeDumpTool {
    pub fn succeeding(text: &str) -> Self {
        Self::with_output(Ok(text.to_string()))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_output(Err(message.to_string()))
    }

    fn with_output(output: Result<String, String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeDumpState {
                output,
                calls: Vec::new(),
            })),
        }
    }

    /// Paths passed to `dump`, in order
    pub fn calls(&self) -> Vec<PathBuf> {
        self.inner.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().calls.len()
    }
}

#[async_trait]
impl DumpTool for FakeDumpTool {
    async fn dump(&self, path: &Path) -> Result<String, DumpError> {
        let mut inner = self.inner.lock();
        inner.calls.push(path.to_path_buf());
        inner.output.clone().map_err(DumpError::Command)
    }
}
