/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
 *
 * Scope-Level Parsing Logic
 *
 * Grammar rules for every brace-delimited construct:
 * - `function name (params)? (: type)? { body }`
 * - `for (condition) { body }`
 * - `struct name? { (type name ;)* }`
 * - `implement name? { function* }`
 * - `name { body }`     (named scope)
 * - `{ body }`          (unnamed scope)
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

use crate::ast::{
    Condition, ForScope, FunctionScope, ImplementScope, LabeledScope, Member, NamedScope, Node,
    Parameter, StructScope, UnnamedScope,
};
use crate::diagnostics::Level;
use crate::error::ParseError;
use crate::lexer::keywords::ScopeKeyword;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

impl Parser {
    /// Scope rule, entered on a scope keyword or an identifier.
    ///
    /// An identifier opens a named scope when `{` follows directly and a
    /// labeled scope when a second identifier follows. Anything else after
    /// an identifier is an error here; assignments, calls and `return` only
    /// exist inside a scope body.
    pub fn scope(&mut self) -> Result<Node, ParseError> {
        let kind = self.peek().kind;

        match kind {
            TokenKind::ScopeKeyword => {
                let Some(keyword) = ScopeKeyword::from_lexeme(&self.peek().lexeme) else {
                    return Err(self.error_unexpected("as a scope keyword"));
                };
                self.advance();
                self.diagnostics
                    .debug(Level::Detail, format_args!("parsing scope: {}", keyword));

                match keyword {
                    ScopeKeyword::Function => self.function_scope().map(Node::Function),
                    ScopeKeyword::For => self.for_scope().map(Node::For),
                    ScopeKeyword::Struct => self.struct_scope().map(Node::Struct),
                    ScopeKeyword::Implement => self.implement_scope().map(Node::Implement),
                }
            }
            TokenKind::Identifier if self.peek().lexeme == "return" => {
                Err(self.error_unexpected("outside a scope body"))
            }
            TokenKind::Identifier if self.peek_next().is_symbol('{') => {
                self.named_scope().map(Node::NamedScope)
            }
            TokenKind::Identifier if self.opens_labeled_scope() => {
                self.labeled_scope().map(Node::Labeled)
            }
            TokenKind::Identifier => {
                self.advance();
                Err(self.error_expected("'{' to start named scope"))
            }
            _ => self.statement(),
        }
    }

    /// `function` has already been consumed.
    pub fn function_scope(&mut self) -> Result<FunctionScope, ParseError> {
        let LabeledScope {
            name,
            parameters,
            return_type,
            body,
            ..
        } = self.signature(ScopeKeyword::Function.as_str())?;

        self.diagnostics
            .debug(Level::Detail, format_args!("parsed function: {}", name));
        Ok(FunctionScope {
            name,
            parameters,
            return_type,
            body,
        })
    }

    /// Two identifiers in a row, as in `if ready { }`.
    fn opens_labeled_scope(&self) -> bool {
        self.peek_next().kind == TokenKind::Identifier
    }

    /// `label name (params)? (: type)? { body }` with the cursor on `label`.
    fn labeled_scope(&mut self) -> Result<LabeledScope, ParseError> {
        let label = self.advance().lexeme;
        let scope = self.signature(&label)?;

        self.diagnostics.debug(
            Level::Detail,
            format_args!("parsed labeled scope: {} {}", scope.label, scope.name),
        );
        Ok(scope)
    }

    /// `name (params)? (: type)? { body }`, shared by `function` and
    /// labeled scopes. The introducing word has already been consumed.
    fn signature(&mut self, label: &str) -> Result<LabeledScope, ParseError> {
        let name = self.expect_identifier(&format!("a name after '{}'", label))?;

        let parameters = if self.match_symbol('(') {
            Some(self.parameters()?)
        } else {
            None
        };

        let return_type = if self.match_symbol(':') {
            let ty = self.expect_type("return type after ':'")?;
            self.diagnostics
                .debug(Level::Detail, format_args!("parsed return type: {}", ty));
            Some(ty)
        } else {
            None
        };

        let body = self.block(&format!("{} body", label))?;

        Ok(LabeledScope {
            label: label.to_string(),
            name,
            parameters,
            return_type,
            body,
        })
    }

    /// `for` has already been consumed.
    fn for_scope(&mut self) -> Result<ForScope, ParseError> {
        self.expect_symbol('(', "to start 'for' loop condition")?;
        let condition = Condition(self.expression()?);
        self.expect_symbol(')', "to close 'for' loop condition")?;

        let body = self.block("'for' loop body")?;
        Ok(ForScope { condition, body })
    }

    /// `struct` has already been consumed.
    fn struct_scope(&mut self) -> Result<StructScope, ParseError> {
        let name = self.match_identifier();
        self.expect_symbol('{', "to start struct body")?;

        let mut members = Vec::new();
        while !self.check_symbol('}') && !self.is_at_end() {
            let ty = self.expect_type("a type keyword in struct")?;
            let member = self.expect_identifier("a member name in struct")?;
            self.expect_symbol(';', "after struct member declaration")?;

            self.diagnostics.debug(
                Level::Detail,
                format_args!("parsed struct member: {} with type: {}", member, ty),
            );
            members.push(Member::new(member, ty));
        }

        self.expect_symbol('}', "to close struct")?;
        Ok(StructScope { name, members })
    }

    /// `implement` has already been consumed.
    fn implement_scope(&mut self) -> Result<ImplementScope, ParseError> {
        let name = self.match_identifier();
        self.expect_symbol('{', "to start implement body")?;

        let mut functions = Vec::new();
        while !self.check_symbol('}') && !self.is_at_end() {
            let is_function = self.peek().kind == TokenKind::ScopeKeyword
                && ScopeKeyword::from_lexeme(&self.peek().lexeme) == Some(ScopeKeyword::Function);

            if !is_function {
                return Err(self.error_expected("'function' inside implement scope"));
            }

            self.advance();
            functions.push(self.function_scope()?);
        }

        self.expect_symbol('}', "to close implement scope")?;
        Ok(ImplementScope { name, functions })
    }

    /// Parameter list; the opening `(` has already been consumed.
    ///
    /// `(int a, int b)` – no leading or trailing comma, `()` is empty.
    fn parameters(&mut self) -> Result<Vec<Parameter>, ParseError> {
        let mut parameters = Vec::new();

        if self.match_symbol(')') {
            return Ok(parameters);
        }

        loop {
            let ty = self.expect_type("a type keyword in parameter list")?;
            let name = self.expect_identifier("an identifier after type keyword")?;

            self.diagnostics.debug(
                Level::Detail,
                format_args!("parsed parameter: {} with type: {}", name, ty),
            );
            parameters.push(Parameter::new(name, ty));

            if self.match_symbol(',') {
                continue;
            }
            if self.match_symbol(')') {
                return Ok(parameters);
            }
            return Err(self.error_expected("',' or ')' in parameter list"));
        }
    }

    /// `name { body }` with the cursor on `name`.
    pub fn named_scope(&mut self) -> Result<NamedScope, ParseError> {
        let name = self.expect_identifier("scope name")?;
        let body = self.block("named scope")?;

        self.diagnostics
            .debug(Level::Detail, format_args!("parsed named scope: {}", name));
        Ok(NamedScope { name, body })
    }

    /// `{ body }` with the cursor on `{`.
    pub fn unnamed_scope(&mut self) -> Result<UnnamedScope, ParseError> {
        let body = self.block("unnamed scope")?;

        self.diagnostics.debug(Level::Detail, "parsed unnamed scope");
        Ok(UnnamedScope { body })
    }

    /// `{ statement* }`
    ///
    /// `what` names the block in error messages:
    /// `expected '}' to close function body, found end of input`.
    pub fn block(&mut self, what: &str) -> Result<Vec<Node>, ParseError> {
        self.expect_symbol('{', &format!("to start {}", what))?;
        self.enter_nested()?;

        let mut body = Vec::new();
        while !self.check_symbol('}') && !self.is_at_end() {
            body.push(self.statement()?);
        }

        self.expect_symbol('}', &format!("to close {}", what))?;
        self.leave_nested();
        Ok(body)
    }
}
