/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
 *
 * File:     ast.rs
 * Purpose:  Root module for the SCOPE abstract syntax tree.
 *
 * The AST is a closed set of typed nodes; each variant carries exactly the
 * payload its syntax allows. `tree` provides the generic tagged view used
 * for dumps.
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

pub mod expr;
pub mod param;
pub mod scope;
pub mod stmt;
pub mod tree;

pub use expr::{BinaryOp, Expr};
pub use param::{Member, Parameter};
pub use scope::{
    Condition, ForScope, FunctionScope, ImplementScope, LabeledScope, NamedScope, StructScope,
    UnnamedScope,
};
pub use stmt::Node;
pub use tree::{NodeKind, TreeNode};
