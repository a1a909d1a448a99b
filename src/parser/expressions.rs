/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
 *
 * Expression Parsing Logic
 *
 * SCOPE arithmetic has a single precedence level:
 *
 *   expression → primary ( ( "+" | "-" | "*" | "/" ) primary )*
 *   primary    → "(" expression ")" | IDENTIFIER | LITERAL
 *
 * Operators fold strictly left to right, so `1 + 2 * 3` is
 * `(1 + 2) * 3`. Parentheses are the only way to group differently.
 *
 * --------------------------------------------------------------------------
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

use crate::ast::{BinaryOp, Expr};
use crate::diagnostics::Level;
use crate::error::ParseError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

impl Parser {
    /// expression → primary ( operator primary )*
    pub fn expression(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;

        while let Some(operator) = self.match_binary_operator() {
            let right = self.primary()?;
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }

    /// primary → "(" expression ")" | IDENTIFIER | LITERAL
    ///
    /// A parenthesized expression comes back as-is, with no grouping node.
    fn primary(&mut self) -> Result<Expr, ParseError> {
        if self.match_symbol('(') {
            self.enter_nested()?;
            let expr = self.expression()?;
            self.expect_symbol(')', "to close parenthesis")?;
            self.leave_nested();
            return Ok(expr);
        }

        let kind = self.peek().kind;
        let expr = match kind {
            TokenKind::Identifier => Expr::Identifier(self.advance().lexeme),
            TokenKind::Literal => Expr::Literal(self.advance().lexeme),
            _ => return Err(self.error_expected("primary expression")),
        };

        self.diagnostics
            .debug(Level::Detail, format_args!("parsed primary expression: {}", expr));
        Ok(expr)
    }

    /// Consumes `+ - * /` if one is next.
    fn match_binary_operator(&mut self) -> Option<BinaryOp> {
        let token = self.peek();
        if token.kind != TokenKind::Symbol {
            return None;
        }

        let operator = BinaryOp::from_lexeme(&token.lexeme)?;
        self.advance();
        Some(operator)
    }
}
