// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! SLF tokenizer.
//!
//! Every token is an optional payload followed by a one-byte marker. Numbers
//! are decimal except doubles, which are 16 hex digits. String-like tokens
//! carry their byte length as the payload and the raw bytes after the marker.

use crate::error::LexError;
use crate::token::{Spanned, Token, TokenKind};

/// Header that starts every SLF stream.
pub const MAGIC: &[u8; 4] = b"SLF0";

pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned after the `SLF0` header.
    pub fn new(input: &'a [u8]) -> Result<Self, LexError> {
        if !input.starts_with(MAGIC) {
            return Err(LexError::BadMagic);
        }
        Ok(Self {
            input,
            pos: MAGIC.len(),
        })
    }

    /// Byte offset of the next token.
    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn next_token(&mut self) -> Result<Option<Spanned<'a>>, LexError> {
        if self.pos >= self.input.len() {
            return Ok(None);
        }

        let start = self.pos;
        let payload_end = self.input[start..]
            .iter()
            .position(|b| !b.is_ascii_hexdigit())
            .map_or(self.input.len(), |n| start + n);
        let Some(&marker) = self.input.get(payload_end) else {
            return Err(LexError::UnexpectedEof {
                offset: payload_end,
            });
        };
        let kind = TokenKind::from_marker(marker).ok_or(LexError::UnknownMarker {
            marker: char::from(marker),
            offset: payload_end,
        })?;
        let payload = &self.input[start..payload_end];
        self.pos = payload_end + 1;

        let token = match kind {
            TokenKind::Int => Token::Int(decimal(payload, kind, start)?),
            TokenKind::Double => Token::Double(hex_double(payload, start)?),
            TokenKind::Null => {
                if !payload.is_empty() {
                    return Err(invalid(payload, kind, start));
                }
                Token::Null
            }
            TokenKind::String => Token::String(self.take_bytes(payload, kind, start)?),
            TokenKind::Json => Token::Json(self.take_bytes(payload, kind, start)?),
            TokenKind::ClassName => Token::ClassName(self.take_bytes(payload, kind, start)?),
            TokenKind::List => Token::List(length(payload, kind, start)?),
            TokenKind::ClassRef => Token::ClassRef(length(payload, kind, start)?),
        };
        Ok(Some(Spanned {
            token,
            offset: start,
        }))
    }

    fn take_bytes(
        &mut self,
        payload: &[u8],
        kind: TokenKind,
        offset: usize,
    ) -> Result<&'a [u8], LexError> {
        let len = length(payload, kind, offset)?;
        let available = self.input.len() - self.pos;
        if len > available {
            return Err(LexError::Truncated {
                kind,
                offset,
                len,
                available,
            });
        }
        let bytes = &self.input[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Spanned<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.next_token();
        if result.is_err() {
            // Stop after the first error
            self.pos = self.input.len();
        }
        result.transpose()
    }
}

fn invalid(payload: &[u8], kind: TokenKind, offset: usize) -> LexError {
    LexError::InvalidPayload {
        kind,
        payload: String::from_utf8_lossy(payload).into_owned(),
        offset,
    }
}

fn decimal(payload: &[u8], kind: TokenKind, offset: usize) -> Result<u64, LexError> {
    if payload.is_empty() || !payload.iter().all(u8::is_ascii_digit) {
        return Err(invalid(payload, kind, offset));
    }
    std::str::from_utf8(payload)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .ok_or_else(|| invalid(payload, kind, offset))
}

fn length(payload: &[u8], kind: TokenKind, offset: usize) -> Result<usize, LexError> {
    let value = decimal(payload, kind, offset)?;
    usize::try_from(value).map_err(|_| invalid(payload, kind, offset))
}

fn hex_double(payload: &[u8], offset: usize) -> Result<f64, LexError> {
    let err = || invalid(payload, TokenKind::Double, offset);
    if payload.len() != 16 {
        return Err(err());
    }
    let mut bytes = [0u8; 8];
    for (slot, pair) in bytes.iter_mut().zip(payload.chunks_exact(2)) {
        let digits = std::str::from_utf8(pair).map_err(|_| err())?;
        *slot = u8::from_str_radix(digits, 16).map_err(|_| err())?;
    }
    Ok(f64::from_le_bytes(bytes))
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
