/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
 *
 * File:      diagnostics/logger.rs
 * Purpose:   Leveled tracing for the tokenizer and parser.
 *
 * Author:    Sam Wilcox
 *
 * License:
 * This file is part of the SCOPE programming language project.
 *
 * SCOPE is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::error::Error;
use std::fmt;
use tracing::{debug, error};

/// How chatty a debug message is.
///
/// A message is emitted only when its level is at or below the configured
/// verbosity. Level 0 is never used for messages, so `verbosity = 0`
/// silences everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Phase boundaries: "starting tokenization", final counts.
    Phase = 1,
    /// One message per token or parsed construct.
    Detail = 2,
    /// Discarded whitespace and comments.
    Trivia = 3,
}

/// The `debug` / `error` / `fatal` channel used by the lexer and parser.
///
/// Messages go through `tracing`; installing a subscriber is the caller's
/// business (the `scopelang` binary does it in `main`).
///
/// `fatal` does not abort anything by itself. It records the error and
/// hands it back so the caller can `return Err(...)`, which unwinds the
/// whole parse through `?`.
#[derive(Debug, Clone, Copy)]
pub struct Diagnostics {
    verbosity: u8,
    stage: &'static str,
}

impl Diagnostics {
    pub fn new(verbosity: u8, stage: &'static str) -> Self {
        Self { verbosity, stage }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level as u8 <= self.verbosity
    }

    /// Non-fatal trace. Never changes control flow.
    ///
    /// Pass `format_args!(..)` to avoid building strings for messages
    /// that end up filtered out.
    pub fn debug(&self, level: Level, message: impl fmt::Display) {
        if self.enabled(level) {
            debug!(stage = self.stage, level = level as u8, "{}", message);
        }
    }

    pub fn error(&self, message: impl fmt::Display) {
        error!(stage = self.stage, "{}", message);
    }

    /// Logs `err` as fatal and returns it for propagation.
    pub fn fatal<E: Error>(&self, err: E) -> E {
        self.error(format_args!("fatal: {}", err));
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexError;
    use crate::span::Span;

    #[test]
    fn verbosity_gates_levels() {
        let silent = Diagnostics::new(0, "test");
        assert!(!silent.enabled(Level::Phase));

        let detail = Diagnostics::new(2, "test");
        assert!(detail.enabled(Level::Phase));
        assert!(detail.enabled(Level::Detail));
        assert!(!detail.enabled(Level::Trivia));
    }

    #[test]
    fn fatal_hands_back_the_error() {
        let diagnostics = Diagnostics::new(0, "test");
        let err = LexError::UnterminatedComment {
            span: Span::new(1, 0),
        };
        assert_eq!(diagnostics.fatal(err.clone()), err);
    }
}
