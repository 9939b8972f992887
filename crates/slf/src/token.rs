// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! SLF tokens.

use std::fmt;

/// A lexed SLF token. String-like payloads borrow from the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// `<decimal>#`
    Int(u64),
    /// `<16 hex digits>^`, little-endian IEEE-754 bytes
    Double(f64),
    /// `-`
    Null,
    /// `<len>"<bytes>`
    String(&'a [u8]),
    /// `<len>*<bytes>`, an embedded JSON document
    Json(&'a [u8]),
    /// `<count>(`, followed by `count` elements
    List(usize),
    /// `<len>%<name>`, registers a class name
    ClassName(&'a [u8]),
    /// `<index>@`, an instance of the 1-based class name `index`
    ClassRef(usize),
}

impl Token<'_> {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Int(_) => TokenKind::Int,
            Token::Double(_) => TokenKind::Double,
            Token::Null => TokenKind::Null,
            Token::String(_) => TokenKind::String,
            Token::Json(_) => TokenKind::Json,
            Token::List(_) => TokenKind::List,
            Token::ClassName(_) => TokenKind::ClassName,
            Token::ClassRef(_) => TokenKind::ClassRef,
        }
    }
}

/// Payload-free token discriminant, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Int,
    Double,
    Null,
    String,
    Json,
    List,
    ClassName,
    ClassRef,
}

impl TokenKind {
    /// The marker byte that terminates this token kind.
    pub fn marker(&self) -> u8 {
        match self {
            TokenKind::Int => b'#',
            TokenKind::Double => b'^',
            TokenKind::Null => b'-',
            TokenKind::String => b'"',
            TokenKind::Json => b'*',
            TokenKind::List => b'(',
            TokenKind::ClassName => b'%',
            TokenKind::ClassRef => b'@',
        }
    }

    pub fn from_marker(marker: u8) -> Option<Self> {
        Some(match marker {
            b'#' => TokenKind::Int,
            b'^' => TokenKind::Double,
            b'-' => TokenKind::Null,
            b'"' => TokenKind::String,
            b'*' => TokenKind::Json,
            b'(' => TokenKind::List,
            b'%' => TokenKind::ClassName,
            b'@' => TokenKind::ClassRef,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Int => "integer",
            TokenKind::Double => "double",
            TokenKind::Null => "null",
            TokenKind::String => "string",
            TokenKind::Json => "json",
            TokenKind::List => "list",
            TokenKind::ClassName => "class name",
            TokenKind::ClassRef => "class instance",
        };
        f.write_str(name)
    }
}

/// A token with the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<'a> {
    pub token: Token<'a>,
    pub offset: usize,
}
