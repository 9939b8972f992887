// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in dump: decompress the log and read it as lossy UTF-8

use super::{DumpError, DumpTool};
use async_trait::async_trait;
use flate2::read::MultiGzDecoder;
use std::io::Read;
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Reads the gzip stream directly. Structured tokens come out as noise
/// around the human-readable compiler output, which is what the line
/// patterns look for.
#[derive(Debug, Clone, Copy, Default)]
pub struct GzipTextDump;

impl GzipTextDump {
    fn dump_blocking(path: &Path) -> Result<String, DumpError> {
        let io_err = |source| DumpError::Io {
            path: path.to_path_buf(),
            source,
        };
        let raw = std::fs::read(path).map_err(io_err)?;
        if !raw.starts_with(&GZIP_MAGIC) {
            return Err(DumpError::NotCompressed {
                path: path.to_path_buf(),
            });
        }
        let mut bytes = Vec::new();
        MultiGzDecoder::new(raw.as_slice())
            .read_to_end(&mut bytes)
            .map_err(io_err)?;
        if bytes.is_empty() {
            return Err(DumpError::Empty);
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[async_trait]
impl DumpTool for GzipTextDump {
    async fn dump(&self, path: &Path) -> Result<String, DumpError> {
        // Reading and inflating a large log would stall the runtime
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::dump_blocking(&path)).await?
    }
}

#[cfg(test)]
#[path = "gzip_tests.rs"]
mod tests;
