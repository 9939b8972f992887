// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Reader for Xcode's SLF build-log format (`.xcactivitylog`).
//!
//! An activity log is a gzip stream wrapping an `SLF0` token stream that
//! serializes an object graph: a tree of build-step sections, each holding
//! diagnostic messages.
//!
//! # Quick Start
//!
//! ```ignore
//! let log = xcr_slf::read_log(path)?;
//! for message in log.messages() {
//!     println!("{} {}", message.severity, message.title);
//! }
//! # Ok::<(), xcr_slf::SlfError>(())
//! ```
//!
//! # Layers
//!
//! - [`Lexer`] turns bytes into [`Token`]s (`12#`, `5"hello`, `3(`, `1@`, ...)
//! - [`parse`] drives per-class schemas over the tokens with an explicit frame
//!   stack and builds a [`LogNode`] tree
//! - [`ActivityLog::messages`] walks the tree pre-order without recursion

mod container;
mod error;
mod lexer;
mod parser;
mod schema;
mod token;
mod tree;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use container::{read_container, read_log, SlfError};
pub use error::{LexError, ParseError};
pub use lexer::{Lexer, MAGIC};
pub use parser::{parse, MAX_DEPTH, SUPPORTED_VERSIONS};
pub use schema::Role;
pub use token::{Spanned, Token, TokenKind};
pub use tree::{ActivityLog, DocumentLocation, LogNode, MessageNode, Messages, StepNode};

/// Message severity values used by the IDE.
pub mod severity {
    pub const NOTE: u64 = 0;
    pub const WARNING: u64 = 1;
    pub const ERROR: u64 = 2;
}
