// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Directory-walking scanner

use super::{ArtifactScanner, ScanError, ScannedFile};
use async_trait::async_trait;
use glob::Pattern;
use std::path::Path;
use walkdir::WalkDir;

/// Scanner that walks the root with a bounded depth and matches file names
/// against a glob.
#[derive(Debug, Clone)]
pub struct WalkDirScanner {
    pattern: Pattern,
    max_depth: usize,
}

impl WalkDirScanner {
    pub fn new(pattern: &str, max_depth: usize) -> Result<Self, ScanError> {
        let pattern = Pattern::new(pattern).map_err(|source| ScanError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { pattern, max_depth })
    }

    fn scan_blocking(&self, root: &Path) -> Result<Vec<ScannedFile>, ScanError> {
        match std::fs::metadata(root) {
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(ScanError::Io {
                    path: root.to_path_buf(),
                    source,
                })
            }
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).max_depth(self.max_depth) {
            // Entries can vanish mid-walk while the build tool rotates logs
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file()
                || !self.pattern.matches(&entry.file_name().to_string_lossy())
            {
                continue;
            }
            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) => {
                    tracing::debug!(path = %entry.path().display(), error = %e, "skipping entry");
                    continue;
                }
            };
            let Ok(modified) = metadata.modified() else {
                continue;
            };
            files.push(ScannedFile {
                size: metadata.len(),
                modified,
                path: entry.into_path(),
            });
        }
        Ok(files)
    }
}

#[async_trait]
impl ArtifactScanner for WalkDirScanner {
    async fn scan(&self, root: &Path) -> Result<Vec<ScannedFile>, ScanError> {
        // walkdir and metadata reads are synchronous
        let scanner = self.clone();
        let root = root.to_path_buf();
        tokio::task::spawn_blocking(move || scanner.scan_blocking(&root)).await?
    }
}

#[cfg(test)]
#[path = "walk_tests.rs"]
mod tests;
