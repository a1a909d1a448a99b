/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   Source locations attached to tokens and errors.
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

/// A position inside a SCOPE source file.
///
/// - `line` is 1-based
/// - `column` is 0-based and counted in characters, not bytes
///
/// The diagnostic printer adds one to the column when rendering so the
/// output matches what editors display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Returns the position reached after reading `text` starting here.
    pub fn advance_over(self, text: &str) -> Self {
        let mut line = self.line;
        let mut column = self.column;

        for ch in text.chars() {
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }

        Self { line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_over_tracks_lines_and_columns() {
        let start = Span::new(1, 0);
        assert_eq!(start.advance_over("abc"), Span::new(1, 3));
        assert_eq!(start.advance_over("ab\ncd"), Span::new(2, 2));
        assert_eq!(start.advance_over("\n\n"), Span::new(3, 0));
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(Span::new(4, 0).to_string(), "4:1");
    }
}
