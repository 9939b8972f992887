// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors that carry a process exit code.

use thiserror::Error;

/// Build errors found, or an operational failure
pub const BUILD_FAILED: i32 = 1;
/// No build log stabilized in time
pub const TIMED_OUT: i32 = 2;
/// The build log could not be decoded
pub const UNDECODABLE: i32 = 3;

/// Exit with `code`, printing `message` unless it is empty.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Exit code without an error line; the report already explains it.
    pub fn silent(code: i32) -> Self {
        Self::new(code, String::new())
    }
}
