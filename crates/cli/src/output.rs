// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build report rendering.

use crate::color::Painter;
use crate::exit_error::{self, ExitError};
use clap::ValueEnum;
use serde_json::json;
use std::fmt::Write;
use std::path::Path;
use xcr_core::{DecodeFailure, DecodeOutcome, DecodeResult, Diagnostic};

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a decode result and map it to the process outcome.
pub fn print_result(
    artifact: &Path,
    result: &DecodeResult,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(artifact, result, Painter::detect())),
        OutputFormat::Json => {
            let value = render_json(artifact, result);
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    exit_status(result)
}

/// Exit status for a decode result: clean and warning-only builds succeed.
pub fn exit_status(result: &DecodeResult) -> anyhow::Result<()> {
    match result {
        Ok(outcome) if outcome.passed() => Ok(()),
        Ok(_) => Err(ExitError::silent(exit_error::BUILD_FAILED).into()),
        Err(_) => Err(ExitError::silent(exit_error::UNDECODABLE).into()),
    }
}

pub fn render_text(artifact: &Path, result: &DecodeResult, painter: Painter) -> String {
    match result {
        Ok(outcome) => render_outcome(artifact, outcome, painter),
        Err(failure) => render_failure(failure, painter),
    }
}

fn render_outcome(artifact: &Path, outcome: &DecodeOutcome, painter: Painter) -> String {
    let mut buf = String::new();
    let _ = writeln!(
        buf,
        "{}",
        painter.muted(&format!("log: {} ({} decode)", artifact.display(), outcome.strategy))
    );

    let errors: Vec<&Diagnostic> = outcome.errors().collect();
    let warnings: Vec<&Diagnostic> = outcome.warnings().collect();
    section(&mut buf, "Errors", &errors, painter, |p, s| p.red(s));
    section(&mut buf, "Warnings", &warnings, painter, |p, s| p.yellow(s));

    let verdict = if !errors.is_empty() {
        painter.red(&format!("BUILD FAILED ({})", count(errors.len(), "error")))
    } else if !warnings.is_empty() {
        painter.yellow(&format!(
            "BUILD SUCCEEDED WITH WARNINGS ({})",
            count(warnings.len(), "warning")
        ))
    } else {
        painter.green("BUILD SUCCEEDED")
    };
    let _ = writeln!(buf, "\n{verdict}");
    buf
}

fn section(
    buf: &mut String,
    title: &str,
    diagnostics: &[&Diagnostic],
    painter: Painter,
    tint: impl Fn(&Painter, &str) -> String,
) {
    if diagnostics.is_empty() {
        return;
    }
    let _ = writeln!(
        buf,
        "\n{}",
        painter.header(&format!("{title} ({}):", diagnostics.len()))
    );
    for diagnostic in diagnostics {
        let _ = writeln!(buf, "  {} {}", tint(&painter, "●"), diagnostic);
    }
}

fn render_failure(failure: &DecodeFailure, painter: Painter) -> String {
    let mut buf = String::new();
    let _ = writeln!(buf, "{}", painter.red("BUILD LOG UNREADABLE"));
    let _ = writeln!(buf, "  {}", failure.reason);
    let _ = writeln!(buf, "  raw log: {}", failure.path.display());
    if failure.is_retryable() {
        let hint = painter.muted("the log was still being written; run again");
        let _ = writeln!(buf, "  {hint}");
    }
    buf
}

pub fn render_json(artifact: &Path, result: &DecodeResult) -> serde_json::Value {
    match result {
        Ok(outcome) => json!({
            "status": if outcome.passed() { "passed" } else { "failed" },
            "artifact": artifact,
            "strategy": outcome.strategy,
            "errors": outcome.errors().collect::<Vec<_>>(),
            "warnings": outcome.warnings().collect::<Vec<_>>(),
        }),
        Err(failure) => json!({
            "status": "undecodable",
            "artifact": failure.path,
            "retryable": failure.is_retryable(),
            "reason": failure.reason,
        }),
    }
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
