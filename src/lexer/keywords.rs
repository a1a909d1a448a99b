/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Defines all reserved keywords for the SCOPE language.
 *
 * Author:    Sam Wilcox
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

use serde::Serialize;
use std::fmt;

/// Keywords that introduce a scope.
///
/// `while`, `if`, `elif`, `else` and `finally` are scope words in the
/// language notes but are **not** reserved by the tokenizer; they lex as
/// identifiers and parse as named scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeKeyword {
    Function,
    For,
    Struct,
    Implement,
}

/// Built-in type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKeyword {
    Int,
}

/// Built-in operations with call syntax: `out(x);`, `inc(i);`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorKeyword {
    Out,
    Inc,
    Dec,
    Jump,
}

impl ScopeKeyword {
    pub const ALL: [ScopeKeyword; 4] = [
        ScopeKeyword::Function,
        ScopeKeyword::For,
        ScopeKeyword::Struct,
        ScopeKeyword::Implement,
    ];

    pub fn from_lexeme(word: &str) -> Option<Self> {
        match word {
            "function" => Some(ScopeKeyword::Function),
            "for" => Some(ScopeKeyword::For),
            "struct" => Some(ScopeKeyword::Struct),
            "implement" => Some(ScopeKeyword::Implement),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScopeKeyword::Function => "function",
            ScopeKeyword::For => "for",
            ScopeKeyword::Struct => "struct",
            ScopeKeyword::Implement => "implement",
        }
    }
}

impl TypeKeyword {
    pub const ALL: [TypeKeyword; 1] = [TypeKeyword::Int];

    pub fn from_lexeme(word: &str) -> Option<Self> {
        match word {
            "int" => Some(TypeKeyword::Int),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeKeyword::Int => "int",
        }
    }
}

impl OperatorKeyword {
    pub const ALL: [OperatorKeyword; 4] = [
        OperatorKeyword::Out,
        OperatorKeyword::Inc,
        OperatorKeyword::Dec,
        OperatorKeyword::Jump,
    ];

    pub fn from_lexeme(word: &str) -> Option<Self> {
        match word {
            "out" => Some(OperatorKeyword::Out),
            "inc" => Some(OperatorKeyword::Inc),
            "dec" => Some(OperatorKeyword::Dec),
            "jump" => Some(OperatorKeyword::Jump),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OperatorKeyword::Out => "out",
            OperatorKeyword::Inc => "inc",
            OperatorKeyword::Dec => "dec",
            OperatorKeyword::Jump => "jump",
        }
    }
}

impl fmt::Display for ScopeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TypeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OperatorKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the regex alternation `word1|word2|...` for a keyword group.
pub(crate) fn alternation<I>(words: I) -> String
where
    I: IntoIterator<Item = &'static str>,
{
    words.into_iter().collect::<Vec<_>>().join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexemes_round_trip() {
        for kw in ScopeKeyword::ALL {
            assert_eq!(ScopeKeyword::from_lexeme(kw.as_str()), Some(kw));
        }
        for kw in OperatorKeyword::ALL {
            assert_eq!(OperatorKeyword::from_lexeme(kw.as_str()), Some(kw));
        }
        assert_eq!(TypeKeyword::from_lexeme("int"), Some(TypeKeyword::Int));
    }

    #[test]
    fn conceptual_scope_words_are_not_reserved() {
        for word in ["while", "if", "elif", "else", "finally", "return"] {
            assert_eq!(ScopeKeyword::from_lexeme(word), None);
        }
    }

    #[test]
    fn alternation_joins_with_pipes() {
        let pattern = alternation(OperatorKeyword::ALL.map(OperatorKeyword::as_str));
        assert_eq!(pattern, "out|inc|dec|jump");
    }
}
