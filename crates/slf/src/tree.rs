// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decoded activity-log tree.

use std::path::PathBuf;

/// A decoded activity log.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityLog {
    pub version: u64,
    pub main_section: StepNode,
}

impl ActivityLog {
    /// All messages in document order, at any depth.
    pub fn messages(&self) -> Messages<'_> {
        Messages {
            stack: vec![self.main_section.children.iter()],
        }
    }
}

/// Node of the build-step tree.
#[derive(Debug, Clone, PartialEq)]
pub enum LogNode {
    Step(StepNode),
    Message(MessageNode),
}

/// A build step (section). Children hold sub-steps first, then the step's
/// own messages, matching their order in the stream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepNode {
    pub class: String,
    pub title: String,
    pub location: Option<DocumentLocation>,
    pub children: Vec<LogNode>,
}

/// A message attached to a step. Sub-messages (notes, fix-its, analyzer
/// steps) are kept as children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageNode {
    pub class: String,
    pub title: String,
    pub severity: u64,
    pub kind: String,
    pub location: Option<DocumentLocation>,
    pub children: Vec<LogNode>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentLocation {
    pub url: String,
    /// 1-based
    pub line: Option<u32>,
    /// 1-based
    pub column: Option<u32>,
}

impl DocumentLocation {
    /// Filesystem path of the document, if the URL names one.
    pub fn file_path(&self) -> Option<PathBuf> {
        let raw = self.url.strip_prefix("file://").unwrap_or(&self.url);
        if raw.is_empty() {
            return None;
        }
        Some(PathBuf::from(percent_decode(raw)))
    }
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3).and_then(|h| std::str::from_utf8(h).ok());
            if let Some(byte) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Pre-order walk over every [`MessageNode`] in a log.
///
/// Uses an explicit stack of child iterators, so arbitrarily deep trees do
/// not grow the call stack.
pub struct Messages<'a> {
    stack: Vec<std::slice::Iter<'a, LogNode>>,
}

impl<'a> Iterator for Messages<'a> {
    type Item = &'a MessageNode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                None => {
                    self.stack.pop();
                }
                Some(LogNode::Step(step)) => self.stack.push(step.children.iter()),
                Some(LogNode::Message(message)) => {
                    self.stack.push(message.children.iter());
                    return Some(message);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
