// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Result of decoding one stabilized build log.

use crate::diagnostic::{Diagnostic, Severity};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Which decoding tier produced the diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeStrategy {
    /// Structured SLF object graph read directly from the artifact.
    Primary,
    /// Line patterns over a textual dump of the artifact.
    Fallback,
}

impl fmt::Display for DecodeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeStrategy::Primary => f.write_str("primary"),
            DecodeStrategy::Fallback => f.write_str("fallback"),
        }
    }
}

/// Ordered, de-duplicated diagnostics from a successful decode.
///
/// An empty list is a clean build, not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeOutcome {
    pub diagnostics: Vec<Diagnostic>,
    pub strategy: DecodeStrategy,
}

impl DecodeOutcome {
    pub fn new(diagnostics: Vec<Diagnostic>, strategy: DecodeStrategy) -> Self {
        Self {
            diagnostics,
            strategy,
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Pass/fail verdict: the build passed when no errors were found.
    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }
}

/// Why a decode attempt gave up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// Both the structured decoder and the textual dump failed.
    Undecodable { primary: String, fallback: String },
    /// The artifact grew or shrank after stabilization; the watch cycle
    /// can be retried.
    ModifiedAfterStabilization { expected: u64, actual: u64 },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Undecodable { primary, fallback } => {
                write!(f, "primary decode failed ({primary}); fallback failed ({fallback})")
            }
            FailureReason::ModifiedAfterStabilization { expected, actual } => write!(
                f,
                "log changed after it stabilized (size {expected} -> {actual})"
            ),
        }
    }
}

/// Terminal decode failure, carrying the raw artifact path for manual inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeFailure {
    pub path: PathBuf,
    pub reason: FailureReason,
}

impl DecodeFailure {
    /// True when re-running the whole watch cycle may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self.reason, FailureReason::ModifiedAfterStabilization { .. })
    }
}

impl fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not decode {}: {}", self.path.display(), self.reason)
    }
}

impl std::error::Error for DecodeFailure {}

pub type DecodeResult = Result<DecodeOutcome, DecodeFailure>;

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;
