// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

use std::time::Duration;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Pause after opening a project before keystrokes are sent (default: 2000ms).
pub fn open_settle() -> Duration {
    parse_duration_ms("XCR_OPEN_SETTLE_MS").unwrap_or(Duration::from_secs(2))
}

/// Limit for individual osascript invocations (default: 10000ms).
pub fn osascript_timeout() -> Duration {
    parse_duration_ms("XCR_OSASCRIPT_TIMEOUT_MS").unwrap_or(Duration::from_secs(10))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
