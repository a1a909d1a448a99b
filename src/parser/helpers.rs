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

use crate::error::ParseError;
use crate::lexer::keywords::TypeKeyword;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser {
    /// Returns the token under the cursor without consuming it.
    ///
    /// At the end of input this is the `Eof` token, never out of bounds.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    /// Looks one token past the cursor.
    pub fn peek_next(&self) -> &Token {
        &self.tokens[(self.current + 1).min(self.tokens.len() - 1)]
    }

    /// Consumes and returns the current token.
    ///
    /// The cursor stays on `Eof` once it gets there.
    pub fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !token.is_eof() {
            self.current += 1;
        }
        token
    }

    /// Returns true if the parser is at EOF.
    pub fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// Checks if the current token is the symbol `ch`.
    pub fn check_symbol(&self, ch: char) -> bool {
        self.peek().is_symbol(ch)
    }

    /// Matches a symbol and consumes it.
    pub fn match_symbol(&mut self, ch: char) -> bool {
        if self.check_symbol(ch) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a required symbol.
    ///
    /// `context` completes the message: `expected ';' {context}`.
    pub fn expect_symbol(&mut self, ch: char, context: &str) -> Result<Token, ParseError> {
        if self.check_symbol(ch) {
            Ok(self.advance())
        } else {
            Err(self.error_expected(format!("'{}' {}", ch, context)))
        }
    }

    /// Consumes an identifier and returns its name.
    pub fn expect_identifier(&mut self, what: &str) -> Result<String, ParseError> {
        if self.peek().kind == TokenKind::Identifier {
            Ok(self.advance().lexeme)
        } else {
            Err(self.error_expected(what))
        }
    }

    /// Consumes a type keyword (`int`).
    pub fn expect_type(&mut self, what: &str) -> Result<TypeKeyword, ParseError> {
        let token = self.peek();
        match (token.kind, TypeKeyword::from_lexeme(&token.lexeme)) {
            (TokenKind::TypeKeyword, Some(ty)) => {
                self.advance();
                Ok(ty)
            }
            _ => Err(self.error_expected(what)),
        }
    }

    /// Consumes an identifier if one is next.
    pub fn match_identifier(&mut self) -> Option<String> {
        if self.peek().kind == TokenKind::Identifier {
            Some(self.advance().lexeme)
        } else {
            None
        }
    }

    /// Steps one level deeper, failing once `max_depth` is passed.
    ///
    /// Called right after an opening `{` or `(` is consumed; the error
    /// points at the token that would have started the too-deep level.
    pub fn enter_nested(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            let token = &self.tokens[self.current.saturating_sub(1)];
            return Err(self
                .diagnostics
                .fatal(ParseError::too_deep(token, self.max_depth)));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Builds an "expected …, found <current>" error and logs it as fatal.
    pub fn error_expected(&self, expected: impl Into<String>) -> ParseError {
        self.diagnostics
            .fatal(ParseError::expected(expected, self.peek()))
    }

    /// Builds an "unexpected <current> …" error and logs it as fatal.
    pub fn error_unexpected(&self, context: &'static str) -> ParseError {
        self.diagnostics
            .fatal(ParseError::unexpected(self.peek(), context))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::error::{Found, ParseError};
    use crate::lexer::tokenize;
    use crate::parser::parser::Parser;

    fn parser(source: &str) -> Parser {
        Parser::new(tokenize(source).unwrap(), &Config::default())
    }

    #[test]
    fn advance_stops_at_eof() {
        let mut p = parser("x");
        assert_eq!(p.advance().lexeme, "x");
        assert!(p.is_at_end());
        assert!(p.advance().is_eof());
        assert!(p.advance().is_eof());
        assert!(p.peek_next().is_eof());
    }

    #[test]
    fn expect_symbol_reports_found_token() {
        let mut p = parser("x");
        let err = p.expect_symbol(';', "after assignment").unwrap_err();
        match err {
            ParseError::Expected { expected, found } => {
                assert_eq!(expected, "';' after assignment");
                assert!(matches!(found, Found::Token(t) if t.lexeme == "x"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn nesting_is_bounded_by_config() {
        let config = Config::default().with_max_depth(2);
        let mut p = Parser::new(tokenize("{ { {").unwrap(), &config);

        assert!(p.match_symbol('{'));
        p.enter_nested().unwrap();
        assert!(p.match_symbol('{'));
        p.enter_nested().unwrap();
        assert!(p.match_symbol('{'));

        let err = p.enter_nested().unwrap_err();
        assert_eq!(err.code(), "P0003");
        assert_eq!(err.span().column, 4);

        p.leave_nested();
        assert_eq!(p.depth, 1);
    }

    #[test]
    fn expect_type_rejects_identifiers() {
        let mut p = parser("float");
        assert!(p.expect_type("type").is_err());
        let mut p = parser("int");
        assert!(p.expect_type("type").is_ok());
        assert!(p.is_at_end());
    }
}
