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

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::{Config, UnmatchedInput};
use crate::diagnostics::{Diagnostics, Level};
use crate::error::LexError;
use crate::lexer::keywords::{alternation, OperatorKeyword, ScopeKeyword, TypeKeyword};
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// What a regex alternative produces once it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Emit(TokenKind),
    LineComment,
    BlockComment,
    Whitespace,
}

/// Named groups of the combined pattern, in match priority order.
const GROUPS: [(&str, Category); 9] = [
    ("scope", Category::Emit(TokenKind::ScopeKeyword)),
    ("type", Category::Emit(TokenKind::TypeKeyword)),
    ("operator", Category::Emit(TokenKind::OperatorKeyword)),
    ("ident", Category::Emit(TokenKind::Identifier)),
    ("literal", Category::Emit(TokenKind::Literal)),
    ("line_comment", Category::LineComment),
    ("block_comment", Category::BlockComment),
    ("symbol", Category::Emit(TokenKind::Symbol)),
    ("ws", Category::Whitespace),
];

/// One alternation over every token category.
///
/// Regex alternation is leftmost-first, so at any position the earliest
/// group that matches wins. Keywords need a trailing word boundary so
/// that `format` or `integer` stay whole identifiers.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(&token_pattern()).unwrap());

fn token_pattern() -> String {
    let scope = alternation(ScopeKeyword::ALL.map(ScopeKeyword::as_str));
    let types = alternation(TypeKeyword::ALL.map(TypeKeyword::as_str));
    let operators = alternation(OperatorKeyword::ALL.map(OperatorKeyword::as_str));

    [
        format!(r"(?P<scope>(?:{scope})\b)"),
        format!(r"(?P<type>(?:{types})\b)"),
        format!(r"(?P<operator>(?:{operators})\b)"),
        r"(?P<ident>[A-Za-z_][A-Za-z0-9_]*)".to_string(),
        r"(?P<literal>[0-9]+)".to_string(),
        r"(?P<line_comment>//[^\n]*)".to_string(),
        r"(?P<block_comment>(?s:/\*.*?\*/))".to_string(),
        r"(?P<symbol>[{}();,:=<>+\-*/])".to_string(),
        r"(?P<ws>\s+)".to_string(),
    ]
    .join("|")
}

fn classify(caps: &Captures<'_>) -> Option<Category> {
    GROUPS
        .iter()
        .find(|(name, _)| caps.name(name).is_some())
        .map(|(_, category)| *category)
}

/// Tokenizes `source` with the default configuration.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(source, &Config::default())
}

pub fn tokenize_with(source: &str, config: &Config) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source, config);
    lexer.scan_tokens()?;
    Ok(lexer.tokens)
}

/// Regex-driven SCOPE tokenizer.
///
/// Scans strictly left to right. Each step finds the next match of
/// `TOKEN_PATTERN`; anything between the cursor and that match is input
/// no category accepts and is handled per `UnmatchedInput`.
pub struct Lexer<'src> {
    source: &'src str,

    /// Byte offset of the next unread character.
    current: usize,

    /// Line / column of `current`.
    position: Span,

    unmatched: UnmatchedInput,
    diagnostics: Diagnostics,

    pub tokens: Vec<Token>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, config: &Config) -> Self {
        Self {
            source,
            current: 0,
            position: Span::new(1, 0),
            unmatched: config.unmatched,
            diagnostics: Diagnostics::new(config.verbosity, "lexer"),
            tokens: Vec::new(),
        }
    }

    /// Runs the scan to completion and appends the `Eof` token.
    ///
    /// Must be called once per lexer instance.
    pub fn scan_tokens(&mut self) -> Result<(), LexError> {
        self.diagnostics.debug(Level::Phase, "starting tokenization");

        while !self.is_at_end() {
            self.scan_token()?;
        }

        self.tokens.push(Token::eof(self.position));

        self.diagnostics.debug(
            Level::Phase,
            format_args!("tokenization completed, {} tokens", self.tokens.len()),
        );
        Ok(())
    }

    fn scan_token(&mut self) -> Result<(), LexError> {
        let source = self.source;

        let Some(caps) = TOKEN_PATTERN.captures_at(source, self.current) else {
            // Nothing left that any category accepts.
            return self.unmatched_input(self.source.len());
        };
        let Some(whole) = caps.get(0) else {
            return self.unmatched_input(self.source.len());
        };

        if whole.start() > self.current {
            self.unmatched_input(whole.start())?;
        }

        let text = whole.as_str();
        let start = self.position;

        match classify(&caps) {
            Some(Category::Emit(kind)) => {
                if kind == TokenKind::Symbol
                    && text == "/"
                    && source[whole.end()..].starts_with('*')
                    && self.unmatched == UnmatchedInput::Reject
                {
                    return Err(self
                        .diagnostics
                        .fatal(LexError::UnterminatedComment { span: start }));
                }

                let token = Token::new(kind, text, start);
                self.diagnostics.debug(
                    Level::Detail,
                    format_args!("token {:?} '{}' at {}", token.kind, token.lexeme, start),
                );
                self.tokens.push(token);
            }
            Some(Category::LineComment) => {
                self.diagnostics.debug(Level::Trivia, "ignored line comment");
            }
            Some(Category::BlockComment) => {
                self.diagnostics.debug(Level::Trivia, "ignored block comment");
            }
            Some(Category::Whitespace) | None => {
                self.diagnostics.debug(Level::Trivia, "ignored whitespace");
            }
        }

        self.advance_to(whole.end());
        Ok(())
    }

    /// Handles `source[current..end]`, a run that matches no category.
    fn unmatched_input(&mut self, end: usize) -> Result<(), LexError> {
        let gap = &self.source[self.current..end];

        match self.unmatched {
            UnmatchedInput::Reject => match gap.chars().next() {
                Some(ch) => Err(self.diagnostics.fatal(LexError::UnexpectedCharacter {
                    ch,
                    span: self.position,
                })),
                None => Ok(()),
            },
            UnmatchedInput::Skip => {
                self.diagnostics.debug(
                    Level::Phase,
                    format_args!("skipping unmatched input {:?} at {}", gap, self.position),
                );
                self.advance_to(end);
                Ok(())
            }
        }
    }

    fn advance_to(&mut self, end: usize) {
        self.position = self.position.advance_over(&self.source[self.current..end]);
        self.current = end;
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| (t.kind, t.lexeme))
            .collect()
    }

    #[test]
    fn pattern_compiles() {
        assert!(TOKEN_PATTERN.is_match("function"));
    }

    #[test]
    fn keywords_need_a_word_boundary() {
        assert_eq!(
            kinds("for format int integer out outer"),
            vec![
                (TokenKind::ScopeKeyword, "for".to_string()),
                (TokenKind::Identifier, "format".to_string()),
                (TokenKind::TypeKeyword, "int".to_string()),
                (TokenKind::Identifier, "integer".to_string()),
                (TokenKind::OperatorKeyword, "out".to_string()),
                (TokenKind::Identifier, "outer".to_string()),
                (TokenKind::Eof, String::new()),
            ]
        );
    }

    #[test]
    fn keyword_followed_by_symbol() {
        let tokens = kinds("for(");
        assert_eq!(tokens[0], (TokenKind::ScopeKeyword, "for".to_string()));
        assert_eq!(tokens[1], (TokenKind::Symbol, "(".to_string()));
    }

    #[test]
    fn spans_follow_lines() {
        let tokens = tokenize("foo {\n  x = 12;\n}").unwrap();
        assert_eq!(tokens[0].span, Span::new(1, 0));
        assert_eq!(tokens[1].span, Span::new(1, 4));
        assert_eq!(tokens[2].span, Span::new(2, 2));
        assert_eq!(tokens[4].span, Span::new(2, 6));
        assert_eq!(tokens[6].span, Span::new(3, 0));
        assert_eq!(tokens[7].span, Span::new(3, 1));
    }

    #[test]
    fn unterminated_comment_is_rejected() {
        let err = tokenize("x /* never closed").unwrap_err();
        assert_eq!(
            err,
            LexError::UnterminatedComment {
                span: Span::new(1, 2)
            }
        );
    }

    #[test]
    fn unterminated_comment_lexes_as_symbols_when_skipping() {
        let config = Config::default().with_unmatched(UnmatchedInput::Skip);
        let tokens = tokenize_with("/* x", &config).unwrap();
        let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["/", "*", "x", ""]);
    }

    #[test]
    fn trailing_garbage_is_reported() {
        let err = tokenize("x ;@").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                ch: '@',
                span: Span::new(1, 3)
            }
        );
    }
}
