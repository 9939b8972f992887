// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O: the filesystem, log dump tools and the IDE

pub mod dump;
mod env;
pub mod scan;
pub mod subprocess;
pub mod trigger;

pub use dump::{CommandDumpTool, ConfiguredDumpTool, DumpError, DumpTool, GzipTextDump};
pub use scan::{ArtifactScanner, ChangeWake, ScanError, ScannedFile, WalkDirScanner};
pub use trigger::{BuildTrigger, OsaScriptTrigger, TriggerError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use dump::FakeDumpTool;
#[cfg(any(test, feature = "test-support"))]
pub use scan::FakeScanner;
#[cfg(any(test, feature = "test-support"))]
pub use trigger::{FakeBuildTrigger, TriggerCall};
