// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User settings loaded from `config.toml`.
//!
//! Every field is optional in the file; missing keys keep their defaults.
//! Environment variables and command-line flags are layered on top by the CLI.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default file-name pattern of Xcode build logs.
pub const DEFAULT_ARTIFACT_PATTERN: &str = "*.xcactivitylog";

/// DerivedData location relative to the home directory.
const DERIVED_DATA_SUBDIR: &str = "Library/Developer/Xcode/DerivedData";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Overall watch timeout.
    pub timeout_secs: u64,
    /// Delay between directory scans.
    pub poll_interval_ms: u64,
    /// Minimum span of unchanged samples before a log counts as finished.
    pub quiet_window_ms: u64,
    /// Limit for the external dump command.
    pub dump_timeout_ms: u64,
    /// DerivedData root; defaults to `~/Library/Developer/Xcode/DerivedData`.
    pub derived_data: Option<PathBuf>,
    /// Glob matched against log file names.
    pub artifact_pattern: String,
    /// Maximum directory depth scanned below the watch root.
    pub scan_depth: usize,
    /// External dump command (argv). `{path}` is replaced by the log path;
    /// without a placeholder the path is appended. Unset means the built-in
    /// gzip text dump.
    pub dump_command: Option<Vec<String>>,
    /// Wake the poll loop on filesystem change notifications.
    pub watch_notify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_secs: 300,
            poll_interval_ms: 1000,
            quiet_window_ms: 2000,
            dump_timeout_ms: 60_000,
            derived_data: None,
            artifact_pattern: DEFAULT_ARTIFACT_PATTERN.to_string(),
            scan_depth: 4,
            dump_command: None,
            watch_notify: true,
        }
    }
}

impl Config {
    /// `<config_dir>/xcr/config.toml`, e.g. `~/Library/Application Support/xcr/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("xcr").join("config.toml"))
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "poll_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.artifact_pattern.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "artifact_pattern",
                reason: "must not be empty".to_string(),
            });
        }
        if let Some(argv) = &self.dump_command {
            if argv.first().is_none_or(|program| program.trim().is_empty()) {
                return Err(ConfigError::Invalid {
                    field: "dump_command",
                    reason: "must name a program".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn quiet_window(&self) -> Duration {
        Duration::from_millis(self.quiet_window_ms)
    }

    pub fn dump_timeout(&self) -> Duration {
        Duration::from_millis(self.dump_timeout_ms)
    }

    /// Resolved DerivedData root, if one is configured or a home directory exists.
    pub fn derived_data_root(&self) -> Option<PathBuf> {
        self.derived_data
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(DERIVED_DATA_SUBDIR)))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
