/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
 *
 * File:     param.rs
 * Purpose:  Typed name declarations: function parameters and struct
 *           members.
 *
 * Both are written `<type> <name>`:
 *  - parameters inside `function name(int a, int b)`
 *  - members inside `struct { int a; int b; }`
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

use crate::lexer::keywords::TypeKeyword;
use serde::Serialize;

/// Represents **one declared parameter** of a function scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Parameter name (identifier)
    pub name: String,

    /// Declared type: `function add(int a)` → `int`
    pub ty: TypeKeyword,
}

/// One field of a `struct` scope: `int a;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub name: String,
    pub ty: TypeKeyword,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeKeyword) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl Member {
    pub fn new(name: impl Into<String>, ty: TypeKeyword) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
