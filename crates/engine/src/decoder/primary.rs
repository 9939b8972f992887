// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured decoding: diagnostics straight from the SLF object graph.

use std::path::Path;
use xcr_core::{Diagnostic, DiagnosticSet, Severity};
use xcr_slf::{severity, ActivityLog, MessageNode, SlfError};

/// Read, decompress and parse a log, then collect its diagnostics.
pub fn decode(path: &Path) -> Result<Vec<Diagnostic>, SlfError> {
    let log = xcr_slf::read_log(path)?;
    Ok(diagnostics(&log))
}

/// Errors and warnings in document order, de-duplicated.
pub fn diagnostics(log: &ActivityLog) -> Vec<Diagnostic> {
    log.messages().filter_map(to_diagnostic).collect::<DiagnosticSet>().into_vec()
}

fn to_diagnostic(message: &MessageNode) -> Option<Diagnostic> {
    let severity = match message.severity {
        severity::ERROR => Severity::Error,
        severity::WARNING => Severity::Warning,
        // Notes and remarks
        _ => return None,
    };
    let title = message.title.trim();
    if title.is_empty() {
        return None;
    }
    let location = message.location.as_ref();
    let diagnostic = Diagnostic::new(severity, location.and_then(|l| l.file_path()), title);
    Some(match location {
        Some(l) => diagnostic.at(l.line, l.column),
        None => diagnostic,
    })
}

#[cfg(test)]
#[path = "primary_tests.rs"]
mod tests;
