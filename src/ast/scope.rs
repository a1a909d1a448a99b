/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
 *
 * File:     scope.rs
 * Purpose:  AST structures for every kind of brace-delimited scope.
 *
 * A scope is a function, a loop, a structure, an implementation block or
 * just a nested block, depending on what introduces it:
 *
 *   function add(int a, int b): int { ... }   → FunctionScope
 *   for (n) { ... }                           → ForScope
 *   struct Point { int x; int y; }            → StructScope
 *   implement Point { function ... }          → ImplementScope
 *   setup { ... }                             → NamedScope
 *   { ... }                                   → UnnamedScope
 *
 * --------------------------------------------------------------------------
 * Author:   Sam Wilcox
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

use crate::ast::{Expr, Member, Node, Parameter};
use crate::lexer::keywords::TypeKeyword;
use serde::Serialize;

/// `function name (params)? (: type)? { body }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionScope {
    pub name: String,

    /// `None` when the parameter list is omitted entirely,
    /// `Some(vec![])` for an explicit `()`.
    pub parameters: Option<Vec<Parameter>>,

    pub return_type: Option<TypeKeyword>,
    pub body: Vec<Node>,
}

/// The parenthesized expression of a `for` loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition(pub Expr);

/// `for (condition) { body }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForScope {
    pub condition: Condition,
    pub body: Vec<Node>,
}

/// `struct name? { member* }`
///
/// Holds members only, never statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructScope {
    pub name: Option<String>,
    pub members: Vec<Member>,
}

/// `implement name? { function* }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImplementScope {
    pub name: Option<String>,
    pub functions: Vec<FunctionScope>,
}

/// A scope whose introducer is an ordinary word rather than a reserved
/// keyword: `if ready { ... }`, `task run(int n): int { ... }`.
///
/// Same shape as a function; `label` is the introducing word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledScope {
    pub label: String,
    pub name: String,
    pub parameters: Option<Vec<Parameter>>,
    pub return_type: Option<TypeKeyword>,
    pub body: Vec<Node>,
}

/// A block introduced by a bare identifier: `setup { ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedScope {
    pub name: String,
    pub body: Vec<Node>,
}

/// A block with no introducer at all: `{ ... }`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct UnnamedScope {
    pub body: Vec<Node>,
}
