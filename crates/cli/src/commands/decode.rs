// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `xcr decode <log>` - Decode an existing build log without building

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use xcr_adapters::ConfiguredDumpTool;
use xcr_core::{Config, StableArtifact};
use xcr_engine::LogDecoder;

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct DecodeArgs {
    /// Path to an .xcactivitylog file
    pub log: PathBuf,
}

pub async fn handle(args: DecodeArgs, config: Config, format: OutputFormat) -> Result<()> {
    let artifact = StableArtifact::from_path(&args.log)
        .with_context(|| format!("cannot read build log {}", args.log.display()))?;
    let dump =
        ConfiguredDumpTool::from_config(config.dump_command.as_deref(), config.dump_timeout());

    let result = LogDecoder::new(dump).decode(artifact).await;
    output::print_result(&args.log, &result, format)
}
