// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Helpers for synthesizing activity logs in tests.
//!
//! [`SlfWriter`] emits raw tokens. [`SectionSpec`] and [`MessageSpec`] describe
//! a build-step tree that [`encode_log`] serializes with the field layout the
//! parser expects for a given format version.

use std::io::{self, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::lexer::MAGIC;
use crate::severity;

/// Format version used when a test does not care.
pub const DEFAULT_VERSION: u64 = 10;

/// Low-level SLF token writer. Class names are defined on first use.
#[derive(Debug, Clone)]
pub struct SlfWriter {
    buf: Vec<u8>,
    classes: Vec<String>,
}

impl Default for SlfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SlfWriter {
    pub fn new() -> Self {
        Self {
            buf: MAGIC.to_vec(),
            classes: Vec::new(),
        }
    }

    /// A writer with no header, for malformed-input tests.
    pub fn headerless() -> Self {
        Self {
            buf: Vec::new(),
            classes: Vec::new(),
        }
    }

    pub fn int(&mut self, value: u64) -> &mut Self {
        self.buf.extend_from_slice(format!("{value}#").as_bytes());
        self
    }

    pub fn double(&mut self, value: f64) -> &mut Self {
        for byte in value.to_le_bytes() {
            self.buf.extend_from_slice(format!("{byte:02x}").as_bytes());
        }
        self.buf.push(b'^');
        self
    }

    pub fn null(&mut self) -> &mut Self {
        self.buf.push(b'-');
        self
    }

    pub fn string(&mut self, value: &str) -> &mut Self {
        self.framed(b'"', value.as_bytes())
    }

    pub fn json(&mut self, value: &str) -> &mut Self {
        self.framed(b'*', value.as_bytes())
    }

    pub fn list(&mut self, count: usize) -> &mut Self {
        self.buf.extend_from_slice(format!("{count}(").as_bytes());
        self
    }

    /// Start an instance of `class`, defining the class name if needed.
    pub fn instance(&mut self, class: &str) -> &mut Self {
        let index = match self.classes.iter().position(|c| c == class) {
            Some(i) => i + 1,
            None => {
                self.framed(b'%', class.as_bytes());
                self.classes.push(class.to_string());
                self.classes.len()
            }
        };
        self.buf.extend_from_slice(format!("{index}@").as_bytes());
        self
    }

    /// Append bytes verbatim.
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn finish(&self) -> Vec<u8> {
        self.buf.clone()
    }

    fn framed(&mut self, marker: u8, bytes: &[u8]) -> &mut Self {
        self.buf
            .extend_from_slice(format!("{}", bytes.len()).as_bytes());
        self.buf.push(marker);
        self.buf.extend_from_slice(bytes);
        self
    }
}

/// A build step to serialize.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpec {
    pub class: String,
    pub title: String,
    pub sections: Vec<SectionSpec>,
    pub messages: Vec<MessageSpec>,
}

impl SectionSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            class: "IDEActivityLogSection".to_string(),
            title: title.into(),
            sections: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn section(mut self, section: SectionSpec) -> Self {
        self.sections.push(section);
        self
    }

    pub fn message(mut self, message: MessageSpec) -> Self {
        self.messages.push(message);
        self
    }
}

/// A message to serialize. Lines and columns are 1-based here.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageSpec {
    pub class: String,
    pub title: String,
    pub severity: u64,
    pub kind: String,
    pub file: Option<String>,
    pub line: u64,
    pub column: u64,
    pub sub_messages: Vec<MessageSpec>,
}

impl MessageSpec {
    pub fn new(severity: u64, file: Option<&str>, title: impl Into<String>) -> Self {
        Self {
            class: "IDEDiagnosticActivityLogMessage".to_string(),
            title: title.into(),
            severity,
            kind: String::new(),
            file: file.map(str::to_string),
            line: 1,
            column: 1,
            sub_messages: Vec::new(),
        }
    }

    pub fn error(file: Option<&str>, title: impl Into<String>) -> Self {
        Self::new(severity::ERROR, file, title).kind("com.apple.dt.IDE.diagnostic")
    }

    pub fn warning(file: Option<&str>, title: impl Into<String>) -> Self {
        Self::new(severity::WARNING, file, title).kind("com.apple.dt.IDE.diagnostic")
    }

    pub fn note(file: Option<&str>, title: impl Into<String>) -> Self {
        Self::new(severity::NOTE, file, title)
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn at(mut self, line: u64, column: u64) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    pub fn sub_message(mut self, message: MessageSpec) -> Self {
        self.sub_messages.push(message);
        self
    }
}

/// Serialize a whole log with `main` as its main section. The main section
/// follows the version token directly, as in logs written by the IDE.
pub fn encode_log(version: u64, main: &SectionSpec) -> Vec<u8> {
    let mut w = SlfWriter::new();
    w.int(version);
    write_section(&mut w, version, main);
    w.finish()
}

/// Serialize a log whose main section is `depth` single-child sections
/// wrapping `leaf`. Written without recursion so very deep logs can be built.
pub fn encode_nested_log(version: u64, depth: usize, leaf: &SectionSpec) -> Vec<u8> {
    let mut w = SlfWriter::new();
    w.int(version);
    for level in 0..depth {
        write_section_head(&mut w, "IDEActivityLogSection", &format!("level {level}"), 1);
    }
    write_section(&mut w, version, leaf);
    for _ in 0..depth {
        write_section_tail(&mut w, version, "IDEActivityLogSection", &[]);
    }
    w.finish()
}

/// Gzip-compress bytes the way the IDE stores activity logs.
pub fn gzip(bytes: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()
}

/// Write a gzipped log for `main` to `path`.
pub fn write_log(path: &Path, main: &SectionSpec) -> io::Result<()> {
    std::fs::write(path, gzip(&encode_log(DEFAULT_VERSION, main))?)
}

pub fn write_section(w: &mut SlfWriter, version: u64, section: &SectionSpec) {
    write_section_head(w, &section.class, &section.title, section.sections.len());
    for child in &section.sections {
        write_section(w, version, child);
    }
    write_section_tail(w, version, &section.class, &section.messages);
}

/// Fields up to and including the sub-section list header.
pub fn write_section_head(w: &mut SlfWriter, class: &str, title: &str, children: usize) {
    w.instance(class)
        .int(0)
        .string("Xcode.IDEActivityLogDomainType.BuildLog")
        .string(title)
        .string(title)
        .double(0.0)
        .double(1.0);
    w.list(children);
}

/// Fields after the sub-sections.
pub fn write_section_tail(
    w: &mut SlfWriter,
    version: u64,
    class: &str,
    messages: &[MessageSpec],
) {
    w.string("");
    w.list(messages.len());
    for message in messages {
        write_message(w, message);
    }
    w.int(0).int(0).int(0).string("").null();
    w.string("").string("").string("").string("");
    if version >= 9 {
        w.list(0);
    }
    if version >= 11 {
        w.int(0);
    }
    if class == "IDEActivityLogUnitTestSection" {
        for _ in 0..6 {
            w.null();
        }
    }
}

pub fn write_message(w: &mut SlfWriter, message: &MessageSpec) {
    w.instance(&message.class)
        .string(&message.title)
        .string("")
        .double(0.0)
        .int(u64::MAX)
        .int(0);
    w.list(message.sub_messages.len());
    for sub in &message.sub_messages {
        write_message(w, sub);
    }
    w.int(message.severity).string(&message.kind);
    match &message.file {
        Some(file) => {
            let line = message.line.saturating_sub(1);
            let column = message.column.saturating_sub(1);
            w.instance("DVTTextDocumentLocation")
                .string(&format!("file://{file}"))
                .double(0.0)
                .int(line)
                .int(column)
                .int(line)
                .int(column)
                .int(u64::MAX)
                .int(0)
                .int(4);
        }
        None => {
            w.null();
        }
    }
    w.string("").list(0).string("");
    if message.class == "IDEActivityLogActionMessage" {
        w.null();
    }
}
