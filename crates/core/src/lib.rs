// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! xcr-core: data model shared by the xcr watcher, decoder and CLI

pub mod artifact;
pub mod config;
pub mod decode;
pub mod diagnostic;
pub mod request;
pub mod time_fmt;

pub use artifact::{ArtifactCandidate, StableArtifact, TimeoutFailure};
pub use config::{Config, ConfigError};
pub use decode::{DecodeFailure, DecodeOutcome, DecodeResult, DecodeStrategy, FailureReason};
pub use diagnostic::{Diagnostic, DiagnosticSet, Severity};
pub use request::{BuildAction, BuildRequest};
pub use time_fmt::format_duration;
