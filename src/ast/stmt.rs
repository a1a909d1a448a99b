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

use crate::ast::{
    Expr, ForScope, FunctionScope, ImplementScope, LabeledScope, NamedScope, StructScope,
    UnnamedScope,
};
use crate::lexer::keywords::{OperatorKeyword, TypeKeyword};
use serde::Serialize;

/// Everything that can appear at the top level or inside a scope body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Node {
    /* ----------------------------- */
    /* SCOPES                        */
    /* ----------------------------- */

    Function(FunctionScope),
    For(ForScope),
    Struct(StructScope),
    Implement(ImplementScope),
    Labeled(LabeledScope),
    NamedScope(NamedScope),
    UnnamedScope(UnnamedScope),

    /* ----------------------------- */
    /* VARIABLES                     */
    /* ----------------------------- */

    // int x = ...;
    VariableDeclaration {
        name: String,
        ty: TypeKeyword,
        value: Expr,
    },

    // x = ...;
    Assignment {
        target: String,
        value: Expr,
    },

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    // return; / return x;
    Return(Option<Expr>),

    /* ----------------------------- */
    /* CALLS                         */
    /* ----------------------------- */

    FunctionCall {
        callee: String,
        arguments: Vec<Expr>,
    },

    // out(x); inc(i); ...
    Operator {
        keyword: OperatorKeyword,
        arguments: Vec<Expr>,
    },
}

impl Node {
    pub fn is_scope(&self) -> bool {
        matches!(
            self,
            Node::Function(_)
                | Node::For(_)
                | Node::Struct(_)
                | Node::Implement(_)
                | Node::Labeled(_)
                | Node::NamedScope(_)
                | Node::UnnamedScope(_)
        )
    }
}
