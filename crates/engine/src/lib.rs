// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! xcr engine: watch for a build log, decode it, orchestrate build requests

pub mod decoder;
pub mod derived_data;
mod runner;
pub mod watcher;

pub use decoder::LogDecoder;
pub use runner::{BuildReport, BuildRunner, RunError};
pub use watcher::{ArtifactWatcher, WatchConfig};
