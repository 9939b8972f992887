// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! xcr - Build in Xcode and report errors and warnings from the build log

mod color;
mod commands;
mod env;
mod exit_error;
mod logging;
mod output;
mod settings;

use output::OutputFormat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{build, decode, latest};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "xcr",
    version,
    about = "Build Xcode projects and report errors and warnings from the build log"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Config file (default: <config dir>/xcr/config.toml, or XCR_CONFIG)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trigger a build in Xcode, wait for its log and report diagnostics
    Build(build::BuildArgs),
    /// Decode an existing build log
    Decode(decode::DecodeArgs),
    /// Print the newest build log of a project
    Latest(latest::LatestArgs),
}

#[tokio::main]
async fn main() {
    let log_guard = match logging::setup() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", format_error(&e));
            std::process::exit(1);
        }
    };

    let result = run().await;
    // Flush the file writer before exiting
    drop(log_guard);

    if let Err(e) = result {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(exit_error::BUILD_FAILED, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped. Otherwise the full chain is rendered so
/// context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;
    let config = settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Build(args) => build::handle(args, config, format).await,
        Commands::Decode(args) => decode::handle(args, config, format).await,
        Commands::Latest(args) => latest::handle(args, config, format),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
