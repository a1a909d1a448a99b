/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
 *
 * File:     lexer.rs
 * Purpose:  Root module for the SCOPE tokenizer.
 *
 *   - `token`    → `Token` and `TokenKind`
 *   - `keywords` → reserved scope / type / operator words
 *   - `lexer`    → the regex-driven scanner
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

pub mod keywords;
#[allow(clippy::module_inception)]
pub mod lexer;
pub mod token;

pub use keywords::{OperatorKeyword, ScopeKeyword, TypeKeyword};
pub use lexer::{tokenize, tokenize_with, Lexer};
pub use token::{Token, TokenKind};
