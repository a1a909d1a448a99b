/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver used to transform a token stream into the top-level AST forest.
 *
 * The grammar itself is split across sibling modules:
 * - `scopes.rs`       → keyword scopes, named / unnamed scopes, parameters
 * - `statements.rs`   → statement dispatch and the individual statements
 * - `expressions.rs`  → flat left-to-right arithmetic and primaries
 * - `helpers.rs`      → token matching, consumption and error helpers
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

use crate::ast::Node;
use crate::config::Config;
use crate::diagnostics::{Diagnostics, Level};
use crate::error::ParseError;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// The SCOPE recursive-descent parser.
///
/// This structure maintains:
/// - The full token stream produced by the lexer
/// - The current cursor position into that stream
/// - The diagnostics channel for this parse
///
/// The grammar rules live in extension modules (`scopes`, `statements`,
/// `expressions`, `helpers`) via additional `impl Parser` blocks.
pub struct Parser {
    /// Complete list of tokens, always terminated by one `Eof` token.
    pub(crate) tokens: Vec<Token>,

    /// Current cursor position. Never moves past the `Eof` token.
    pub(crate) current: usize,

    /// Open braces and parentheses around the cursor.
    pub(crate) depth: usize,
    pub(crate) max_depth: usize,

    pub(crate) diagnostics: Diagnostics,
}

/// Parses `tokens` with the default configuration.
///
/// # SCOPE Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → AST forest
/// ```
///
/// # Example
/// ```rust
/// let tokens = scopelang::tokenize("foo { }")?;
/// let forest = scopelang::parse(tokens)?;
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Node>, ParseError> {
    parse_with(tokens, &Config::default())
}

pub fn parse_with(tokens: Vec<Token>, config: &Config) -> Result<Vec<Node>, ParseError> {
    Parser::new(tokens, config).parse()
}

impl Parser {
    /// Creates a parser over `tokens`.
    ///
    /// A missing trailing `Eof` token is added, so hand-built token lists
    /// (including an empty one) are accepted.
    pub fn new(mut tokens: Vec<Token>, config: &Config) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let span = tokens
                .last()
                .map(|t| Span::new(t.span.line, t.span.column + t.lexeme.chars().count()))
                .unwrap_or_else(|| Span::new(1, 0));
            tokens.push(Token::eof(span));
        }

        Self {
            tokens,
            current: 0,
            depth: 0,
            max_depth: config.max_depth,
            diagnostics: Diagnostics::new(config.verbosity, "parser"),
        }
    }

    /// Parses the entire token stream into the top-level forest.
    ///
    /// # Behavior
    /// - Scope keywords and identifiers go through the scope rule
    /// - Everything else goes through the statement rule
    /// - The first structural error aborts the parse; no partial forest
    ///   is ever returned
    pub fn parse(&mut self) -> Result<Vec<Node>, ParseError> {
        self.diagnostics.debug(Level::Phase, "starting parse");

        let mut nodes = Vec::new();

        while !self.is_at_end() {
            let kind = self.peek().kind;
            let node = match kind {
                TokenKind::ScopeKeyword | TokenKind::Identifier => self.scope()?,
                _ => self.statement()?,
            };

            let category = if node.is_scope() { "scope" } else { "statement" };
            self.diagnostics.debug(
                Level::Detail,
                format_args!("added top-level {} {:?}", category, node_label(&node)),
            );
            nodes.push(node);
        }

        self.diagnostics.debug(
            Level::Phase,
            format_args!("parse completed, {} top-level nodes", nodes.len()),
        );
        Ok(nodes)
    }
}

/// Short description used in trace output.
fn node_label(node: &Node) -> String {
    match node {
        Node::Function(scope) => format!("function {}", scope.name),
        Node::For(_) => "for".to_string(),
        Node::Struct(scope) => format!("struct {}", scope.name.as_deref().unwrap_or("")),
        Node::Implement(scope) => format!("implement {}", scope.name.as_deref().unwrap_or("")),
        Node::Labeled(scope) => format!("{} {}", scope.label, scope.name),
        Node::NamedScope(scope) => format!("named scope {}", scope.name),
        Node::UnnamedScope(_) => "unnamed scope".to_string(),
        Node::VariableDeclaration { name, .. } => format!("declaration {}", name),
        Node::Assignment { target, .. } => format!("assignment {}", target),
        Node::Return(_) => "return".to_string(),
        Node::FunctionCall { callee, .. } => format!("call {}", callee),
        Node::Operator { keyword, .. } => format!("operator {}", keyword),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn empty_token_list_parses_to_empty_forest() {
        assert_eq!(parse(Vec::new()), Ok(Vec::new()));
    }

    #[test]
    fn missing_eof_is_added() {
        let tokens = tokenize("{}").unwrap();
        let without_eof: Vec<Token> = tokens.into_iter().filter(|t| !t.is_eof()).collect();
        let parser = Parser::new(without_eof, &Config::default());
        assert!(parser.tokens.last().is_some_and(Token::is_eof));
        assert_eq!(parser.tokens.last().map(|t| t.span), Some(Span::new(1, 2)));
    }

    #[test]
    fn top_level_declarations_and_operators_are_allowed() {
        let forest = parse(tokenize("int x = 1; out(x); { x = x + 1; }").unwrap()).unwrap();
        assert_eq!(forest.len(), 3);
    }
}
