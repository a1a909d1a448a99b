/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
 *
 * File:     diagnostics.rs
 * Purpose:  Everything the front end reports back to humans.
 *
 *   - `logger`  → leveled debug / error / fatal tracing
 *   - `printer` → rustc-style error reports
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

pub mod logger;
pub mod printer;

pub use logger::{Diagnostics, Level};
pub use printer::DiagnosticPrinter;
