/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the SCOPE recursive-descent parser.
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the `parse(tokens)` entry points
#[allow(clippy::module_inception)]
pub mod parser;

/// Scope-level parsing:
/// - function / for / struct / implement
/// - named and unnamed scopes
/// - parameter lists
pub mod scopes;

/// Statement-level parsing:
/// - return / assignment / function calls
/// - variable declarations
/// - operator keywords
pub mod statements;

/// Expression-level parsing:
/// - flat left-to-right `+ - * /`
/// - parentheses, identifiers, literals
pub mod expressions;

/// Shared parser helpers:
/// - token matching and lookahead
/// - required-token consumption
/// - error construction
pub mod helpers;

/// Re-export the public entry points so callers can use
/// `crate::parser::parse(...)`.
pub use parser::{parse, parse_with, Parser};
