/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
 *
 * File:      config.rs
 * Purpose:   Per-invocation configuration for the tokenizer and parser.
 *
 * Every lexer and parser instance receives its own `Config` value, so two
 * parses running side by side can use different verbosity levels or input
 * policies without touching any shared state.
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

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// What the tokenizer does with characters that match no token category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedInput {
    /// Stop at the first unmatched character with a `LexError`.
    #[default]
    Reject,

    /// Drop unmatched characters and keep scanning.
    ///
    /// An unterminated `/*` lexes as the plain symbols `/` and `*`
    /// under this policy.
    Skip,
}

/// Front end configuration.
///
/// # Verbosity
/// ```text
/// 0  → silent
/// 1  → phase start / finish
/// 2  → every token and every parsed construct
/// 3  → discarded whitespace and comments as well
/// ```
///
/// # JSON form
/// ```json
/// { "verbosity": 2, "unmatched": "skip", "max_depth": 512 }
/// ```
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub verbosity: u8,
    pub unmatched: UnmatchedInput,

    /// Deepest allowed nesting of braces and parentheses combined.
    pub max_depth: usize,
}

pub const DEFAULT_MAX_DEPTH: usize = 128;

impl Default for Config {
    fn default() -> Self {
        Self {
            verbosity: 0,
            unmatched: UnmatchedInput::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

impl Config {
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_unmatched(mut self, unmatched: UnmatchedInput) -> Self {
        self.unmatched = unmatched;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
