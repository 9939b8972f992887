// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log decoder
//!
//! Turns a stabilized build log into diagnostics. The structured SLF decoder
//! runs first; when it fails the log is dumped to text once and scanned with
//! line patterns instead.

pub mod primary;
pub mod text;

use std::path::{Path, PathBuf};
use xcr_adapters::DumpTool;
use xcr_core::{
    DecodeFailure, DecodeOutcome, DecodeResult, DecodeStrategy, FailureReason, StableArtifact,
};

/// Two-tier decoder over a dump tool
#[derive(Clone)]
pub struct LogDecoder<D> {
    dump: D,
}

impl<D: DumpTool> LogDecoder<D> {
    pub fn new(dump: D) -> Self {
        Self { dump }
    }

    /// Decode a stabilized artifact.
    ///
    /// The artifact is consumed: a second decode of the same log needs a new
    /// watch cycle.
    pub async fn decode(&self, artifact: StableArtifact) -> DecodeResult {
        let path = artifact.path().to_path_buf();

        if let Ok(meta) = tokio::fs::metadata(&path).await {
            if meta.len() != artifact.size() {
                tracing::warn!(
                    path = %path.display(),
                    expected = artifact.size(),
                    actual = meta.len(),
                    "log changed after stabilization"
                );
                return Err(DecodeFailure {
                    path,
                    reason: FailureReason::ModifiedAfterStabilization {
                        expected: artifact.size(),
                        actual: meta.len(),
                    },
                });
            }
        }

        let primary_error = match self.try_primary(&path).await {
            Ok(outcome) => return Ok(outcome),
            Err(e) => e,
        };
        tracing::warn!(
            path = %path.display(),
            error = %primary_error,
            "structured decode failed, falling back to text dump"
        );

        match self.try_fallback(&path).await {
            Ok(outcome) => Ok(outcome),
            Err(fallback_error) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %fallback_error,
                    "text dump failed"
                );
                Err(DecodeFailure {
                    path,
                    reason: FailureReason::Undecodable {
                        primary: primary_error,
                        fallback: fallback_error,
                    },
                })
            }
        }
    }

    /// Structured decode on the blocking pool.
    pub async fn try_primary(&self, path: &Path) -> Result<DecodeOutcome, String> {
        let owned: PathBuf = path.to_path_buf();
        let diagnostics = tokio::task::spawn_blocking(move || primary::decode(&owned))
            .await
            .map_err(|e| format!("decoder task failed: {e}"))?
            .map_err(|e| e.to_string())?;
        tracing::info!(
            path = %path.display(),
            count = diagnostics.len(),
            "structured decode succeeded"
        );
        Ok(DecodeOutcome::new(diagnostics, DecodeStrategy::Primary))
    }

    /// One dump invocation followed by line-pattern extraction.
    pub async fn try_fallback(&self, path: &Path) -> Result<DecodeOutcome, String> {
        let dump = self.dump.dump(path).await.map_err(|e| e.to_string())?;
        let diagnostics = text::extract(&dump);
        tracing::info!(
            path = %path.display(),
            bytes = dump.len(),
            count = diagnostics.len(),
            "fallback decode succeeded"
        );
        Ok(DecodeOutcome::new(diagnostics, DecodeStrategy::Fallback))
    }
}

#[cfg(test)]
#[path = "decoder_tests.rs"]
mod tests;
