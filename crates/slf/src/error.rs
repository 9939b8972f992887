// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer and parser errors. Offsets are byte positions in the decompressed stream.

use crate::schema::Role;
use crate::token::TokenKind;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("missing SLF0 header")]
    BadMagic,

    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEof { offset: usize },

    #[error("unknown token marker {marker:?} at byte {offset}")]
    UnknownMarker { marker: char, offset: usize },

    #[error("invalid {kind} payload {payload:?} at byte {offset}")]
    InvalidPayload {
        kind: TokenKind,
        payload: String,
        offset: usize,
    },

    #[error("{kind} at byte {offset} declares {len} bytes but only {available} remain")]
    Truncated {
        kind: TokenKind,
        offset: usize,
        len: usize,
        available: usize,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("lexer error: {0}")]
    Lexer(#[from] LexError),

    #[error("unsupported log format version {version}")]
    UnsupportedVersion { version: u64 },

    #[error("unexpected {found} at byte {offset}, expected {expected}")]
    UnexpectedToken {
        found: TokenKind,
        expected: String,
        offset: usize,
    },

    #[error("unexpected end of log, expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("unknown class {name:?} at byte {offset}")]
    UnknownClass { name: String, offset: usize },

    #[error("class reference {index} at byte {offset} has no matching class name")]
    UndefinedClass { index: usize, offset: usize },

    #[error("class {name:?} at byte {offset} cannot appear where a {expected} is expected")]
    WrongRole {
        name: String,
        expected: Role,
        offset: usize,
    },

    #[error("log nests deeper than {limit} levels")]
    TooDeep { limit: usize },

    #[error("log has no main section")]
    MissingMainSection,
}
