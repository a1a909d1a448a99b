/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the fundamental lexical token types produced by the
 *            SCOPE tokenizer and consumed by the parser.
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

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Represents the **category of a lexical token** in the SCOPE language.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → AST
/// ```
///
/// The declaration order mirrors the order in which the tokenizer tries
/// each category, so earlier kinds win over later ones at the same
/// position (`for` is a scope keyword, never an identifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// `function`, `for`, `struct`, `implement`
    ScopeKeyword,

    /// `int`
    TypeKeyword,

    /// `out`, `inc`, `dec`, `jump`
    ///
    /// Built-in operations that are written like function calls.
    OperatorKeyword,

    /// A user-defined name.
    ///
    /// Used for:
    /// - Named scopes
    /// - Function and struct names
    /// - Variables and parameters
    /// - The `return` statement, which is not reserved
    Identifier,

    /// A decimal integer literal: `42`
    Literal,

    /// One of `{ } ( ) ; , : = < > + - * /`
    Symbol,

    /// End-of-stream marker.
    ///
    /// Always the **final token** of a tokenized source, with an empty
    /// lexeme. The parser never advances past it.
    Eof,
}

impl TokenKind {
    /// Name used in dumps and error messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::ScopeKeyword => "scope keyword",
            TokenKind::TypeKeyword => "type keyword",
            TokenKind::OperatorKeyword => "operator keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Literal => "integer literal",
            TokenKind::Symbol => "symbol",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Represents a **single lexical token** produced by the SCOPE tokenizer.
///
/// # Example Tokens
/// ```text
/// function →  { kind: ScopeKeyword, lexeme: "function", span: 1:1 }
/// total    →  { kind: Identifier,   lexeme: "total",    span: 1:10 }
/// 42       →  { kind: Literal,      lexeme: "42",       span: 2:5 }
/// ```
///
/// Tokens are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// Where the first character of the lexeme appeared.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, "", span)
    }

    /// True for the symbol token spelled `ch`.
    pub fn is_symbol(&self, ch: char) -> bool {
        self.kind == TokenKind::Symbol && self.lexeme.chars().eq(std::iter::once(ch))
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    /// Prints **only the lexeme**, which is what users want to see in
    /// error messages (`found ';'`), not the internal structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
