// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Activity-log container: a gzip stream around the SLF bytes.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::error::ParseError;
use crate::parser::parse;
use crate::tree::ActivityLog;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug, Error)]
pub enum SlfError {
    #[error("failed to read log: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse log: {0}")]
    Parse(#[from] ParseError),
}

/// Read a log file and return the uncompressed SLF bytes. Files that do not
/// start with the gzip magic are returned as-is.
pub fn read_container(path: &Path) -> Result<Vec<u8>, SlfError> {
    let mut raw = Vec::new();
    BufReader::new(File::open(path)?).read_to_end(&mut raw)?;
    decompress(raw)
}

/// Read and parse a log file.
pub fn read_log(path: &Path) -> Result<ActivityLog, SlfError> {
    let bytes = read_container(path)?;
    let log = parse(&bytes)?;
    debug!(
        path = %path.display(),
        version = log.version,
        bytes = bytes.len(),
        "parsed activity log"
    );
    Ok(log)
}

pub(crate) fn decompress(raw: Vec<u8>) -> Result<Vec<u8>, SlfError> {
    if !raw.starts_with(&GZIP_MAGIC) {
        return Ok(raw);
    }
    let mut out = Vec::with_capacity(raw.len() * 4);
    MultiGzDecoder::new(raw.as_slice()).read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(test)]
#[path = "container_tests.rs"]
mod tests;
