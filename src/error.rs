/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
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

use crate::lexer::token::Token;
use crate::span::Span;
use std::fmt;
use thiserror::Error;

/// Failure while turning source text into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token, comment or whitespace run.
    #[error("unexpected character '{ch}'")]
    UnexpectedCharacter { ch: char, span: Span },

    /// `/*` without a closing `*/`.
    #[error("unterminated block comment")]
    UnterminatedComment { span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. } => *span,
            LexError::UnterminatedComment { span } => *span,
        }
    }

    /// Stable error code (L0001, L0002, …)
    pub fn code(&self) -> &'static str {
        match self {
            LexError::UnexpectedCharacter { .. } => "L0001",
            LexError::UnterminatedComment { .. } => "L0002",
        }
    }

    pub fn help(&self) -> Option<String> {
        match self {
            LexError::UnexpectedCharacter { .. } => Some(
                "only letters, digits, '_', whitespace and { } ( ) ; , : = < > + - * / are allowed"
                    .to_string(),
            ),
            LexError::UnterminatedComment { .. } => {
                Some("close the comment with '*/'".to_string())
            }
        }
    }
}

/// What the parser was looking at when it gave up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Token(Token),
    EndOfStream(Span),
}

impl Found {
    pub fn from_token(token: &Token) -> Self {
        if token.is_eof() {
            Found::EndOfStream(token.span)
        } else {
            Found::Token(token.clone())
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Found::Token(token) => token.span,
            Found::EndOfStream(span) => *span,
        }
    }

    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Found::EndOfStream(_))
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(token) => write!(f, "{} '{}'", token.kind, token.lexeme),
            Found::EndOfStream(_) => f.write_str("end of input"),
        }
    }
}

/// Structural violation found by the parser.
///
/// Parsing stops at the first one; there is no recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A specific construct was required here.
    #[error("expected {expected}, found {found}")]
    Expected { expected: String, found: Found },

    /// The token cannot start anything in this position.
    #[error("unexpected {found} {context}")]
    UnexpectedToken { found: Found, context: &'static str },

    /// Braces and parentheses nested past the configured limit.
    #[error("nesting exceeds {limit} levels at {found}")]
    TooDeep { found: Found, limit: usize },
}

impl ParseError {
    pub fn expected(expected: impl Into<String>, found: &Token) -> Self {
        ParseError::Expected {
            expected: expected.into(),
            found: Found::from_token(found),
        }
    }

    pub fn unexpected(found: &Token, context: &'static str) -> Self {
        ParseError::UnexpectedToken {
            found: Found::from_token(found),
            context,
        }
    }

    pub fn too_deep(found: &Token, limit: usize) -> Self {
        ParseError::TooDeep {
            found: Found::from_token(found),
            limit,
        }
    }

    pub fn found(&self) -> &Found {
        match self {
            ParseError::Expected { found, .. } => found,
            ParseError::UnexpectedToken { found, .. } => found,
            ParseError::TooDeep { found, .. } => found,
        }
    }

    pub fn span(&self) -> Span {
        self.found().span()
    }

    /// Stable error code (P0001, P0002, …)
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::Expected { .. } => "P0001",
            ParseError::UnexpectedToken { .. } => "P0002",
            ParseError::TooDeep { .. } => "P0003",
        }
    }

    pub fn help(&self) -> Option<String> {
        if let ParseError::TooDeep { .. } = self {
            return Some("raise `max_depth` in the config or flatten the input".to_string());
        }
        if self.found().is_end_of_stream() {
            Some("the input ended early; check for a missing '}' or ';'".to_string())
        } else {
            None
        }
    }
}

/// Any failure of the tokenize → parse pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontendError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl FrontendError {
    pub fn span(&self) -> Span {
        match self {
            FrontendError::Lex(err) => err.span(),
            FrontendError::Parse(err) => err.span(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            FrontendError::Lex(err) => err.code(),
            FrontendError::Parse(err) => err.code(),
        }
    }

    pub fn help(&self) -> Option<String> {
        match self {
            FrontendError::Lex(err) => err.help(),
            FrontendError::Parse(err) => err.help(),
        }
    }
}
