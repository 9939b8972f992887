// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `xcr build <project>` - Build in Xcode and report the diagnostics

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use xcr_adapters::{ConfiguredDumpTool, OsaScriptTrigger, WalkDirScanner};
use xcr_core::{BuildAction, BuildRequest, Config};
use xcr_engine::{ArtifactWatcher, BuildRunner, LogDecoder, RunError, WatchConfig};

use crate::exit_error::{self, ExitError};
use crate::output::{self, OutputFormat};
use crate::settings::{self, WatchFlags};

#[derive(Args)]
pub struct BuildArgs {
    /// Path to the .xcodeproj or .xcworkspace
    pub project: PathBuf,

    /// What to ask Xcode for
    #[arg(long, default_value_t = BuildAction::Build, value_name = "build|run")]
    pub action: BuildAction,

    /// Target to build (informational; Xcode builds the active scheme)
    #[arg(long)]
    pub target: Option<String>,

    #[command(flatten)]
    pub watch: WatchFlags,
}

pub async fn handle(args: BuildArgs, mut config: Config, format: OutputFormat) -> Result<()> {
    args.watch.apply(&mut config)?;
    let derived_data = settings::derived_data_root(&config)?;

    let scanner = WalkDirScanner::new(&config.artifact_pattern, config.scan_depth)?;
    let dump =
        ConfiguredDumpTool::from_config(config.dump_command.as_deref(), config.dump_timeout());
    let runner = BuildRunner::new(
        OsaScriptTrigger::new(),
        ArtifactWatcher::new(scanner, WatchConfig::from_config(&config)),
        LogDecoder::new(dump),
        derived_data,
    );

    // osascript resolves relative paths against its own working directory
    let project = std::fs::canonicalize(&args.project).unwrap_or(args.project);
    let mut request = BuildRequest::new(project, args.action, config.timeout());
    if let Some(target) = args.target {
        request = request.with_target(target);
    }

    match runner.run(&request).await {
        Ok(report) => output::print_result(&report.artifact, &report.result, format),
        Err(RunError::Timeout(failure)) => {
            Err(ExitError::new(exit_error::TIMED_OUT, failure.to_string()).into())
        }
        Err(e) => Err(e.into()),
    }
}
