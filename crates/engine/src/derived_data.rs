// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locating a project's build logs under DerivedData.
//!
//! Xcode keeps one directory per project named `<Project>-<hash>`, with build
//! logs in its `Logs/Build` subdirectory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

const BUILD_LOGS_SUBDIR: &str = "Logs/Build";
const LOG_EXTENSION: &str = "xcactivitylog";

/// Newest `<project>-*` directory under `root`.
///
/// A missing root is not an error: nothing has been built yet.
pub fn find_project_derived_data(root: &Path, project: &str) -> io::Result<Option<PathBuf>> {
    let prefix = format!("{project}-");
    newest_entry(root, |path, is_dir| {
        is_dir
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| name.starts_with(&prefix) && name.len() > prefix.len())
    })
}

/// Directory to watch for a project's next build log.
///
/// Falls back to the whole DerivedData root when the project has never been
/// built, since Xcode creates its directory during the first build.
pub fn watch_root(derived_data: &Path, project: &str) -> PathBuf {
    match find_project_derived_data(derived_data, project) {
        Ok(Some(dir)) => dir.join(BUILD_LOGS_SUBDIR),
        Ok(None) => derived_data.to_path_buf(),
        Err(e) => {
            tracing::debug!(
                root = %derived_data.display(),
                error = %e,
                "cannot list DerivedData, watching its root"
            );
            derived_data.to_path_buf()
        }
    }
}

/// Build-log directory of a project, if it has been built before.
pub fn project_log_dir(derived_data: &Path, project: &str) -> io::Result<Option<PathBuf>> {
    Ok(find_project_derived_data(derived_data, project)?.map(|dir| dir.join(BUILD_LOGS_SUBDIR)))
}

/// Newest build log directly inside `dir`.
pub fn latest_build_log(dir: &Path) -> io::Result<Option<PathBuf>> {
    newest_entry(dir, |path, is_dir| {
        !is_dir && path.extension().is_some_and(|ext| ext == LOG_EXTENSION)
    })
}

fn newest_entry(
    dir: &Path,
    keep: impl Fn(&Path, bool) -> bool,
) -> io::Result<Option<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let Ok(meta) = entry.metadata() else {
            continue;
        };
        if !keep(&path, meta.is_dir()) {
            continue;
        }
        let modified = meta.modified()?;
        // Ties break on path so the choice is deterministic
        let newer = match &newest {
            Some((t, p)) => (modified, &path) > (*t, p),
            None => true,
        };
        if newer {
            newest = Some((modified, path));
        }
    }
    Ok(newest.map(|(_, path)| path))
}

#[cfg(test)]
#[path = "derived_data_tests.rs"]
mod tests;
