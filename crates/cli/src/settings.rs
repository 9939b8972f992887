// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Settings layering: defaults < config file < environment < flags.

use crate::env;
use anyhow::Context;
use clap::Args;
use std::path::{Path, PathBuf};
use xcr_core::Config;

/// Watch settings that can be overridden per invocation
#[derive(Args, Debug, Default, Clone)]
pub struct WatchFlags {
    /// Give up after this many seconds without a finished build log
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Delay between directory scans
    #[arg(long, value_name = "MS")]
    pub poll_ms: Option<u64>,

    /// How long a log must stay unchanged before it is decoded
    #[arg(long, value_name = "MS")]
    pub quiet_ms: Option<u64>,

    /// DerivedData directory (default: ~/Library/Developer/Xcode/DerivedData)
    #[arg(long, value_name = "DIR")]
    pub derived_data: Option<PathBuf>,
}

/// Load settings from `explicit`, `XCR_CONFIG`, or the default location,
/// then apply environment overrides.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(env::config_path)
        .or_else(Config::default_path);
    let mut config = match &path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    apply_env(&mut config);
    config.validate().context("invalid settings")?;
    tracing::debug!(path = ?path, ?config, "settings loaded");
    Ok(config)
}

fn apply_env(config: &mut Config) {
    if let Some(secs) = env::timeout_secs() {
        config.timeout_secs = secs;
    }
    if let Some(poll) = env::poll_ms() {
        config.poll_interval_ms = poll.as_millis() as u64;
    }
    if let Some(quiet) = env::quiet_ms() {
        config.quiet_window_ms = quiet.as_millis() as u64;
    }
    if let Some(timeout) = env::dump_timeout_ms() {
        config.dump_timeout_ms = timeout.as_millis() as u64;
    }
    if let Some(dir) = env::derived_data() {
        config.derived_data = Some(dir);
    }
    if let Some(argv) = env::dump_command() {
        config.dump_command = Some(argv);
    }
}

impl WatchFlags {
    pub fn apply(&self, config: &mut Config) -> anyhow::Result<()> {
        if let Some(secs) = self.timeout {
            config.timeout_secs = secs;
        }
        if let Some(ms) = self.poll_ms {
            config.poll_interval_ms = ms;
        }
        if let Some(ms) = self.quiet_ms {
            config.quiet_window_ms = ms;
        }
        if let Some(dir) = &self.derived_data {
            config.derived_data = Some(dir.clone());
        }
        config.validate().context("invalid command-line settings")?;
        Ok(())
    }
}

/// DerivedData root or a configuration error.
pub fn derived_data_root(config: &Config) -> anyhow::Result<PathBuf> {
    config.derived_data_root().ok_or_else(|| {
        anyhow::anyhow!("cannot locate DerivedData: no home directory; pass --derived-data")
    })
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
