// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;

pub mod codes {
    /// Section headers: pastel cyan / steel blue
    pub const HEADER: u8 = 74;
    /// Locations and secondary text: darker grey
    pub const MUTED: u8 = 240;

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// Applies the report palette, or passes text through when color is off.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    colorize: bool,
}

impl Painter {
    /// Painter following [`should_colorize`].
    pub fn detect() -> Self {
        Self {
            colorize: should_colorize(),
        }
    }

    /// Painter that never emits color codes.
    pub fn plain() -> Self {
        Self { colorize: false }
    }

    #[cfg(test)]
    pub fn forced() -> Self {
        Self { colorize: true }
    }

    pub fn header(&self, text: &str) -> String {
        self.wrap(&fg256(codes::HEADER), text)
    }

    pub fn muted(&self, text: &str) -> String {
        self.wrap(&fg256(codes::MUTED), text)
    }

    pub fn red(&self, text: &str) -> String {
        self.wrap(codes::RED, text)
    }

    pub fn yellow(&self, text: &str) -> String {
        self.wrap(codes::YELLOW, text)
    }

    pub fn green(&self, text: &str) -> String {
        self.wrap(codes::GREEN, text)
    }

    fn wrap(&self, start: &str, text: &str) -> String {
        if self.colorize {
            format!("{start}{text}{}", codes::RESET)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
