// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake build trigger for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{BuildTrigger, TriggerError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use xcr_core::BuildAction;

/// Recorded trigger call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerCall {
    OpenProject { path: PathBuf },
    Trigger { action: BuildAction },
}

struct FakeTriggerState {
    permitted: bool,
    frontmost: bool,
    fail_trigger: Option<String>,
    calls: Vec<TriggerCall>,
}

/// Build trigger that records calls instead of touching the IDE
#[derive(Clone)]
pub struct FakeBuildTrigger {
    inner: Arc<Mutex<FakeTriggerState>>,
}

impl Default for FakeBuildTrigger {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeTriggerState {
                permitted: true,
                frontmost: false,
                fail_trigger: None,
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeBuildTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_permitted(&self, permitted: bool) {
        self.inner.lock().permitted = permitted;
    }

    pub fn set_frontmost(&self, frontmost: bool) {
        self.inner.lock().frontmost = frontmost;
    }

    /// Make the next `trigger` calls fail with `message`
    pub fn fail_trigger(&self, message: &str) {
        self.inner.lock().fail_trigger = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<TriggerCall> {
        self.inner.lock().calls.clone()
    }
}

#[async_trait]
impl BuildTrigger for FakeBuildTrigger {
    async fn has_permissions(&self) -> bool {
        self.inner.lock().permitted
    }

    async fn is_frontmost(&self) -> bool {
        self.inner.lock().frontmost
    }

    async fn open_project(&self, project: &Path) -> Result<(), TriggerError> {
        let mut inner = self.inner.lock();
        inner.calls.push(TriggerCall::OpenProject {
            path: project.to_path_buf(),
        });
        inner.frontmost = true;
        Ok(())
    }

    async fn trigger(&self, action: BuildAction) -> Result<(), TriggerError> {
        let mut inner = self.inner.lock();
        inner.calls.push(TriggerCall::Trigger { action });
        match &inner.fail_trigger {
            Some(message) => Err(TriggerError::Script(message.clone())),
            None => Ok(()),
        }
    }
}
