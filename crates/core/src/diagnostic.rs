// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error/warning records extracted from a build log.

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Diagnostic severity. Notes and remarks are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A single error or warning.
///
/// Identity is the `(severity, file_path, message)` triple; `line` and
/// `column` ride along from the first occurrence but do not distinguish
/// otherwise identical diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl Diagnostic {
    pub fn new(
        severity: Severity,
        file_path: Option<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            file_path,
            message: message.into(),
            line: None,
            column: None,
        }
    }

    pub fn error(file_path: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, file_path.map(PathBuf::from), message)
    }

    pub fn warning(file_path: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, file_path.map(PathBuf::from), message)
    }

    /// Attach a 1-based source position.
    pub fn at(mut self, line: Option<u32>, column: Option<u32>) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    fn key(&self) -> DiagnosticKey {
        DiagnosticKey {
            severity: self.severity,
            file_path: self.file_path.clone(),
            message: self.message.clone(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.file_path {
            write!(f, "{}", path.display())?;
            if let Some(line) = self.line {
                write!(f, ":{}", line)?;
                if let Some(column) = self.column {
                    write!(f, ":{}", column)?;
                }
            }
            write!(f, ": ")?;
        }
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DiagnosticKey {
    severity: Severity,
    file_path: Option<PathBuf>,
    message: String,
}

/// Insertion-ordered set of diagnostics, collapsing repeated triples.
///
/// The first occurrence wins and keeps its position.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticSet {
    entries: IndexMap<DiagnosticKey, Diagnostic>,
}

impl DiagnosticSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a diagnostic. Returns false if its triple was already present.
    pub fn insert(&mut self, diagnostic: Diagnostic) -> bool {
        match self.entries.entry(diagnostic.key()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(diagnostic);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.values()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries.into_values().collect()
    }
}

impl Extend<Diagnostic> for DiagnosticSet {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        for diagnostic in iter {
            self.insert(diagnostic);
        }
    }
}

impl FromIterator<Diagnostic> for DiagnosticSet {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
