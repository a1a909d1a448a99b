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

use crate::error::FrontendError;
use crate::span::Span;
use std::fmt::Write;

/// Renders human-friendly, compiler-style reports for front end errors.
///
/// The output is inspired by `rustc` diagnostics but stays readable
/// without color:
///
/// ```text
/// error[P0001]: expected ';' after assignment, found symbol '}'
///   --> main.scope:3:11
///    |
///   3 |     x = 1 }
///    |           ^
/// ```
pub struct DiagnosticPrinter {
    /// Full source text, kept whole so single lines can be pulled out.
    source: String,

    /// Display name of the file (`main.scope`, `<eval>`).
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Builds the full report for `error`.
    pub fn render(&self, error: &FrontendError) -> String {
        let Span { line, column } = error.span();

        // Lines are 1-indexed in spans; `saturating_sub` keeps line 0 safe.
        let src_line = self
            .source
            .lines()
            .nth(line.saturating_sub(1))
            .unwrap_or("");

        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "error[{}]: {}\n  --> {}:{}",
            error.code(),
            error,
            self.file_name,
            error.span()
        );
        let _ = writeln!(out, "   |");
        let _ = writeln!(out, "{:>3} | {}", line, src_line);
        let _ = writeln!(out, "   | {}^", " ".repeat(column));

        if let Some(help) = error.help() {
            let _ = writeln!(out, "\nhelp: {}", help);
        }

        out
    }

    /// Prints the report to stderr.
    pub fn print(&self, error: &FrontendError) {
        eprint!("{}", self.render(error));
    }
}
