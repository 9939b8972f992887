// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem change notifications used to wake the poll loop early

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use tokio::sync::mpsc;

/// Recursive watch on a directory. Bursts of events collapse into a single
/// pending wake.
pub struct ChangeWake {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<()>,
}

impl ChangeWake {
    pub fn watch(root: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel(1);
        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if res.is_ok() {
                // Full channel means a wake is already pending
                let _ = tx.try_send(());
            }
        })?;
        watcher.watch(root, RecursiveMode::Recursive)?;
        Ok(Self {
            _watcher: watcher,
            rx,
        })
    }

    /// Wait for the next change. Returns `None` if the watcher stopped.
    pub async fn changed(&mut self) -> Option<()> {
        self.rx.recv().await
    }
}

#[cfg(test)]
#[path = "wake_tests.rs"]
mod tests;
