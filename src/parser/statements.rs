/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
 *
 * Statement-Level Parsing Logic
 *
 * This file contains the grammar rules for everything that can appear
 * inside a scope body:
 * - `return expr? ;`
 * - `name = expr ;`
 * - `name(args) ;`
 * - `int name = expr ;`
 * - `out(args) ;` and the other operator keywords
 * - nested named, unnamed and keyword scopes
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

use crate::ast::{Expr, Node};
use crate::diagnostics::Level;
use crate::error::ParseError;
use crate::lexer::keywords::OperatorKeyword;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

impl Parser {
    /// Parses a single statement.
    ///
    /// This is the **main dispatcher** for statement grammar forms. It
    /// inspects the leading token and routes to the matching rule.
    pub fn statement(&mut self) -> Result<Node, ParseError> {
        let token = self.peek();
        let kind = token.kind;
        let is_return = kind == TokenKind::Identifier && token.lexeme == "return";
        let opens_block = token.is_symbol('{');

        self.diagnostics
            .debug(Level::Detail, format_args!("parsing statement at '{}'", token));

        match kind {
            // `return` is an ordinary identifier to the tokenizer
            TokenKind::Identifier if is_return => self.return_statement(),
            TokenKind::Identifier => self.identifier_statement(),
            TokenKind::Symbol if opens_block => self.unnamed_scope().map(Node::UnnamedScope),
            TokenKind::ScopeKeyword => self.scope(),
            TokenKind::TypeKeyword => self.variable_declaration(),
            TokenKind::OperatorKeyword => self.operator_statement(),
            _ => Err(self.error_unexpected("at start of statement")),
        }
    }

    /// return → "return" expression? ";"
    fn return_statement(&mut self) -> Result<Node, ParseError> {
        self.advance(); // return

        let value = if self.check_symbol(';') {
            None
        } else {
            Some(self.expression()?)
        };

        self.expect_symbol(';', "after return statement")?;

        self.diagnostics.debug(Level::Detail, "parsed return statement");
        Ok(Node::Return(value))
    }

    /// Statements that start with a plain identifier:
    ///
    /// ```text
    /// name = expression ;
    /// name { body }
    /// name ( arguments ) ;
    /// ```
    fn identifier_statement(&mut self) -> Result<Node, ParseError> {
        if self.peek_next().is_symbol('{') {
            return self.named_scope().map(Node::NamedScope);
        }

        let name = self.advance().lexeme;

        if self.match_symbol('=') {
            let value = self.expression()?;
            self.expect_symbol(';', "after variable assignment")?;

            self.diagnostics
                .debug(Level::Detail, format_args!("parsed variable assignment: {}", name));
            return Ok(Node::Assignment {
                target: name,
                value,
            });
        }

        if self.match_symbol('(') {
            let arguments = self.arguments("function call")?;
            self.expect_symbol(';', "after function call")?;

            self.diagnostics
                .debug(Level::Detail, format_args!("parsed function call: {}", name));
            return Ok(Node::FunctionCall {
                callee: name,
                arguments,
            });
        }

        Err(self.error_expected(format!("'=', '{{' or '(' after '{}'", name)))
    }

    /// declaration → type identifier "=" expression ";"
    fn variable_declaration(&mut self) -> Result<Node, ParseError> {
        let ty = self.expect_type("a type keyword")?;
        let name = self.expect_identifier("an identifier after type keyword")?;
        self.expect_symbol('=', "after identifier in variable declaration")?;
        let value = self.expression()?;
        self.expect_symbol(';', "after variable declaration")?;

        self.diagnostics.debug(
            Level::Detail,
            format_args!("parsed variable declaration: {} with type: {}", name, ty),
        );
        Ok(Node::VariableDeclaration { name, ty, value })
    }

    /// operator → ( "out" | "inc" | "dec" | "jump" ) "(" arguments ")" ";"
    fn operator_statement(&mut self) -> Result<Node, ParseError> {
        let Some(keyword) = OperatorKeyword::from_lexeme(&self.peek().lexeme) else {
            return Err(self.error_unexpected("as an operator keyword"));
        };
        self.advance();

        self.expect_symbol('(', "after operator keyword")?;
        let arguments = self.arguments("operator")?;
        self.expect_symbol(';', "after operator statement")?;

        self.diagnostics
            .debug(Level::Detail, format_args!("parsed operator statement: {}", keyword));
        Ok(Node::Operator { keyword, arguments })
    }

    /// Comma-separated expressions up to and including `)`.
    ///
    /// The opening `(` has already been consumed. No leading or trailing
    /// comma is accepted.
    pub fn arguments(&mut self, what: &str) -> Result<Vec<Expr>, ParseError> {
        let mut arguments = Vec::new();

        if self.match_symbol(')') {
            return Ok(arguments);
        }

        loop {
            arguments.push(self.expression()?);

            if self.match_symbol(',') {
                continue;
            }
            if self.match_symbol(')') {
                return Ok(arguments);
            }
            return Err(self.error_expected(format!("',' or ')' in {} arguments", what)));
        }
    }
}
