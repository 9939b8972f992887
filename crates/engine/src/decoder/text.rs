// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fallback decoding: line patterns over a textual dump of the log.

use regex::{Captures, Regex};
use std::path::PathBuf;
use std::sync::LazyLock;
use xcr_core::{Diagnostic, DiagnosticSet, Severity};

const ERROR_MARKER: &str = "error:";
const WARNING_MARKER: &str = "warning:";

/// Longer lines are skipped by the marker-less heuristics.
const HEURISTIC_LINE_LIMIT: usize = 1000;

/// Heuristic messages are cut to this many characters.
const HEURISTIC_MESSAGE_LIMIT: usize = 200;

/// `/path/File.ext:line:col`
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static LOCATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(/[^:"\x00-\x1f]+\.(?:swift|c|cc|cpp|cxx|h|hpp|m|mm|metal)):(\d+):(\d+)"#)
        .expect("constant regex pattern is valid")
});

/// `/path/File.ext:` with no position
#[allow(clippy::expect_used)]
static PATH_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(/[^:"\x00-\x1f]+\.(?:swift|c|cc|cpp|cxx|h|hpp|m|mm|metal)):"#)
        .expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static SWIFT_POSITIONED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(/[^:"\x00-\x1f]+\.swift):(\d+):(\d+)\s+(.+)"#)
        .expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static OBJC_POSITIONED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(/[^:"\x00-\x1f]+\.mm?):(\d+):(\d+)\s+(.+)"#)
        .expect("constant regex pattern is valid")
});

/// Swift compiler errors that are sometimes printed without an `error:` marker.
const SWIFT_PHRASES: &[&str] = &[
    "cannot override",
    "ambiguous use",
    "overriding declaration",
    "overriding property must be",
    "conflicts with",
    "must be unwrapped",
    "requires an 'override' keyword",
    "getter for",
    "setter for",
    "value of optional type",
];

/// Objective-C counterparts of [`SWIFT_PHRASES`].
const OBJC_PHRASES: &[&str] = &[
    "property",
    "not found",
    "no visible @interface",
    "declares the selector",
];

/// Diagnostics found in a dump, in line order, de-duplicated.
pub fn extract(text: &str) -> Vec<Diagnostic> {
    text.lines()
        .filter_map(classify_line)
        .collect::<DiagnosticSet>()
        .into_vec()
}

/// Classify one line. Notes and unrecognized lines yield `None`.
pub fn classify_line(line: &str) -> Option<Diagnostic> {
    // ASCII lowercasing keeps byte offsets aligned with `line`
    let lower = line.to_ascii_lowercase();
    if let Some(at) = lower.find(ERROR_MARKER) {
        return marked(line, Severity::Error, at, ERROR_MARKER.len());
    }
    if line.len() < HEURISTIC_LINE_LIMIT {
        if let Some(diagnostic) = heuristic(line, &lower) {
            return Some(diagnostic);
        }
    }
    if let Some(at) = lower.find(WARNING_MARKER) {
        return marked(line, Severity::Warning, at, WARNING_MARKER.len());
    }
    None
}

fn marked(line: &str, severity: Severity, at: usize, marker_len: usize) -> Option<Diagnostic> {
    let message = line[at + marker_len..].trim();
    if message.is_empty() {
        return None;
    }
    let prefix = &line[..at];
    if let Some(caps) = LOCATED.captures(prefix) {
        let diagnostic = Diagnostic::new(severity, Some(PathBuf::from(&caps[1])), message);
        return Some(diagnostic.at(caps[2].parse().ok(), caps[3].parse().ok()));
    }
    let path = PATH_PREFIX
        .captures(prefix)
        .map(|caps| PathBuf::from(&caps[1]));
    Some(Diagnostic::new(severity, path, message))
}

fn heuristic(line: &str, lower: &str) -> Option<Diagnostic> {
    let (caps, phrases) = if let Some(caps) = SWIFT_POSITIONED.captures(line) {
        (caps, SWIFT_PHRASES)
    } else if let Some(caps) = OBJC_POSITIONED.captures(line) {
        (caps, OBJC_PHRASES)
    } else {
        return None;
    };
    if !phrases.iter().any(|phrase| lower.contains(phrase)) {
        return None;
    }
    Some(positioned_error(&caps))
}

fn positioned_error(caps: &Captures<'_>) -> Diagnostic {
    let message: String = caps[4]
        .trim()
        .chars()
        .take(HEURISTIC_MESSAGE_LIMIT)
        .collect();
    Diagnostic::new(Severity::Error, Some(PathBuf::from(&caps[1])), message)
        .at(caps[2].parse().ok(), caps[3].parse().ok())
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
