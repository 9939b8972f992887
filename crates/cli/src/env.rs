// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;
use std::time::Duration;

// --- Duration helpers (private) ---

fn parse_u64(var: &str) -> Option<u64> {
    std::env::var(var).ok().and_then(|s| s.trim().parse::<u64>().ok())
}

fn parse_duration_ms(var: &str) -> Option<Duration> {
    parse_u64(var).map(Duration::from_millis)
}

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.trim().is_empty())
}

// --- Config file ---

/// Explicit config file path (XCR_CONFIG)
pub fn config_path() -> Option<PathBuf> {
    non_empty("XCR_CONFIG").map(PathBuf::from)
}

// --- Logging ---

/// Tracing filter directives (XCR_LOG), e.g. `xcr_engine=debug`
pub fn log_filter() -> Option<String> {
    non_empty("XCR_LOG")
}

/// Write logs to this file instead of stderr (XCR_LOG_FILE)
pub fn log_file() -> Option<PathBuf> {
    non_empty("XCR_LOG_FILE").map(PathBuf::from)
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

// --- Watch settings ---

pub fn timeout_secs() -> Option<u64> {
    parse_u64("XCR_TIMEOUT_SECS")
}

pub fn poll_ms() -> Option<Duration> {
    parse_duration_ms("XCR_POLL_MS")
}

pub fn quiet_ms() -> Option<Duration> {
    parse_duration_ms("XCR_QUIET_MS")
}

pub fn dump_timeout_ms() -> Option<Duration> {
    parse_duration_ms("XCR_DUMP_TIMEOUT_MS")
}

pub fn derived_data() -> Option<PathBuf> {
    non_empty("XCR_DERIVED_DATA").map(PathBuf::from)
}

/// External dump command (XCR_DUMP_COMMAND), split on whitespace
pub fn dump_command() -> Option<Vec<String>> {
    non_empty("XCR_DUMP_COMMAND").map(|s| s.split_whitespace().map(str::to_string).collect())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
