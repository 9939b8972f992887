// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Textual dumps of build logs, used when structured decoding fails

mod command;
mod gzip;

pub use command::CommandDumpTool;
pub use gzip::GzipTextDump;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeDumpTool;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from producing a textual dump
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is not a gzip stream")]
    NotCompressed { path: PathBuf },
    #[error("{0}")]
    Command(String),
    #[error("dump command exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
    #[error("dump produced no output")]
    Empty,
    #[error("dump task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Converts a build log into line-oriented text.
#[async_trait]
pub trait DumpTool: Clone + Send + Sync + 'static {
    async fn dump(&self, path: &Path) -> Result<String, DumpError>;
}

/// The dump tool chosen by configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredDumpTool {
    Gzip(GzipTextDump),
    Command(CommandDumpTool),
}

impl ConfiguredDumpTool {
    /// A command tool when `argv` is set, otherwise the built-in gzip dump.
    pub fn from_config(argv: Option<&[String]>, timeout: std::time::Duration) -> Self {
        match argv.and_then(|argv| CommandDumpTool::from_argv(argv, timeout)) {
            Some(tool) => Self::Command(tool),
            None => Self::Gzip(GzipTextDump),
        }
    }
}

#[async_trait]
impl DumpTool for ConfiguredDumpTool {
    async fn dump(&self, path: &Path) -> Result<String, DumpError> {
        match self {
            Self::Gzip(tool) => tool.dump(path).await,
            Self::Command(tool) => tool.dump(path).await,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
