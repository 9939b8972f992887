// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `xcr latest <project>` - Print the newest build log of a project

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::Args;
use xcr_core::Config;
use xcr_engine::derived_data;

use crate::output::OutputFormat;
use crate::settings;

#[derive(Args)]
pub struct LatestArgs {
    /// Project path or name (e.g. App.xcodeproj or App)
    pub project: PathBuf,

    /// DerivedData directory (default: ~/Library/Developer/Xcode/DerivedData)
    #[arg(long, value_name = "DIR")]
    pub derived_data: Option<PathBuf>,
}

pub fn handle(args: LatestArgs, mut config: Config, format: OutputFormat) -> Result<()> {
    if let Some(dir) = args.derived_data {
        config.derived_data = Some(dir);
    }
    let root = settings::derived_data_root(&config)?;
    let log = find_latest(&root, &args.project)?;

    match format {
        OutputFormat::Text => println!("{}", log.display()),
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "artifact": log }));
        }
    }
    Ok(())
}

pub(crate) fn find_latest(root: &Path, project: &Path) -> Result<PathBuf> {
    let name = project
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("invalid project path: {}", project.display()))?;

    let dir = derived_data::project_log_dir(root, name)?
        .ok_or_else(|| anyhow!("no DerivedData for {name} under {}", root.display()))?;
    derived_data::latest_build_log(&dir)?
        .ok_or_else(|| anyhow!("no build logs in {}", dir.display()))
}

#[cfg(test)]
#[path = "latest_tests.rs"]
mod tests;
