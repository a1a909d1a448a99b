/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Public surface of the SCOPE front end.
 *
 * SCOPE is a small experimental language in which every construct is a
 * brace-delimited scope: functions, loops, structures and implementation
 * blocks all share one shape. This crate turns source text into tokens
 * and tokens into an AST forest.
 *
 *   Source → lexer::tokenize → Vec<Token> → parser::parse → Vec<Node>
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the SCOPE programming language project.
 *
 * SCOPE is dual-licensed under the terms of:
 *   - The MIT license
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

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

pub use ast::{Node, NodeKind, TreeNode};
pub use config::{Config, UnmatchedInput};
pub use error::{FrontendError, LexError, ParseError};
pub use lexer::{tokenize, tokenize_with, Token, TokenKind};
pub use parser::{parse, parse_with};

/// Tokenizes and parses `source` in one go.
///
/// Returns the complete top-level forest, or the first lexical or
/// structural error. Never returns a partial forest.
pub fn parse_source(source: &str, config: &Config) -> Result<Vec<Node>, FrontendError> {
    let tokens = tokenize_with(source, config)?;
    Ok(parse_with(tokens, config)?)
}
