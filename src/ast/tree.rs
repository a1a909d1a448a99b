/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
 *
 * File:     tree.rs
 * Purpose:  Generic tagged-tree view of the typed AST.
 *
 * Every typed node lowers to a `TreeNode` with a kind tag, a string value
 * and ordered children. Scope nodes follow one positional layout:
 *
 *   Scope "<keyword>"
 *     Identifier "<name>"        (optional)
 *     Parameters                 (optional, functions only)
 *       Parameter "<name>"
 *         Type "<type>"
 *     ReturnType "<type>"        (optional, functions only)
 *     <body nodes...>
 *
 * This is the shape used by dumps (`scopelang parse --format tree`) and by
 * structural checks in the test suite.
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

use crate::ast::{
    Expr, ForScope, FunctionScope, ImplementScope, LabeledScope, Member, NamedScope, Node,
    Parameter, StructScope, UnnamedScope,
};
use crate::lexer::keywords::{ScopeKeyword, TypeKeyword};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Scope,
    NamedScope,
    UnnamedScope,
    Identifier,
    Parameters,
    Parameter,
    ReturnType,
    Type,
    Member,
    Condition,
    VariableDeclaration,
    Assignment,
    ReturnStatement,
    FunctionCall,
    Operator,
    Expression,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub kind: NodeKind,
    pub value: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(kind: NodeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: NodeKind, value: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            kind,
            value: value.into(),
            children,
        }
    }

    /// Lowers a whole forest.
    pub fn forest(nodes: &[Node]) -> Vec<TreeNode> {
        nodes.iter().map(TreeNode::from).collect()
    }

    /// Pre-order walk over this node and all of its descendants.
    pub fn walk(&self) -> Vec<&TreeNode> {
        let mut out = Vec::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }

        out
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.kind, indent = depth * 2)?;
        if !self.value.is_empty() {
            write!(f, " {:?}", self.value)?;
        }
        writeln!(f)?;

        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeNode {
    /// Indented outline, two spaces per level:
    ///
    /// ```text
    /// Scope "for"
    ///   Condition
    ///     Expression "3"
    ///   Operator "out"
    ///     Expression "1"
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

fn type_node(ty: TypeKeyword) -> TreeNode {
    TreeNode::leaf(NodeKind::Type, ty.as_str())
}

fn body(nodes: &[Node]) -> impl Iterator<Item = TreeNode> + '_ {
    nodes.iter().map(TreeNode::from)
}

impl From<&Expr> for TreeNode {
    fn from(expr: &Expr) -> Self {
        match expr {
            Expr::Identifier(text) | Expr::Literal(text) => {
                TreeNode::leaf(NodeKind::Expression, text.as_str())
            }
            Expr::Binary {
                left,
                operator,
                right,
            } => TreeNode::with_children(
                NodeKind::Operator,
                operator.as_str(),
                vec![TreeNode::from(left.as_ref()), TreeNode::from(right.as_ref())],
            ),
        }
    }
}

impl From<&Parameter> for TreeNode {
    fn from(param: &Parameter) -> Self {
        TreeNode::with_children(NodeKind::Parameter, param.name.as_str(), vec![type_node(param.ty)])
    }
}

impl From<&Member> for TreeNode {
    fn from(member: &Member) -> Self {
        TreeNode::with_children(NodeKind::Member, member.name.as_str(), vec![type_node(member.ty)])
    }
}

/// `Scope(label)[Identifier, Parameters?, ReturnType?, body...]`
fn signature_scope(
    label: &str,
    name: &str,
    parameters: &Option<Vec<Parameter>>,
    return_type: Option<TypeKeyword>,
    nodes: &[Node],
) -> TreeNode {
    let mut children = vec![TreeNode::leaf(NodeKind::Identifier, name)];

    if let Some(parameters) = parameters {
        children.push(TreeNode::with_children(
            NodeKind::Parameters,
            "",
            parameters.iter().map(TreeNode::from).collect(),
        ));
    }

    if let Some(ty) = return_type {
        children.push(TreeNode::leaf(NodeKind::ReturnType, ty.as_str()));
    }

    children.extend(body(nodes));
    TreeNode::with_children(NodeKind::Scope, label, children)
}

impl From<&FunctionScope> for TreeNode {
    fn from(scope: &FunctionScope) -> Self {
        signature_scope(
            ScopeKeyword::Function.as_str(),
            &scope.name,
            &scope.parameters,
            scope.return_type,
            &scope.body,
        )
    }
}

impl From<&LabeledScope> for TreeNode {
    fn from(scope: &LabeledScope) -> Self {
        signature_scope(
            &scope.label,
            &scope.name,
            &scope.parameters,
            scope.return_type,
            &scope.body,
        )
    }
}

impl From<&ForScope> for TreeNode {
    fn from(scope: &ForScope) -> Self {
        let condition = TreeNode::with_children(
            NodeKind::Condition,
            "",
            vec![TreeNode::from(&scope.condition.0)],
        );

        let mut children = vec![condition];
        children.extend(body(&scope.body));
        TreeNode::with_children(NodeKind::Scope, ScopeKeyword::For.as_str(), children)
    }
}

fn optional_name(name: &Option<String>) -> Vec<TreeNode> {
    name.iter()
        .map(|name| TreeNode::leaf(NodeKind::Identifier, name.as_str()))
        .collect()
}

impl From<&StructScope> for TreeNode {
    fn from(scope: &StructScope) -> Self {
        let mut children = optional_name(&scope.name);
        children.extend(scope.members.iter().map(TreeNode::from));
        TreeNode::with_children(NodeKind::Scope, ScopeKeyword::Struct.as_str(), children)
    }
}

impl From<&ImplementScope> for TreeNode {
    fn from(scope: &ImplementScope) -> Self {
        let mut children = optional_name(&scope.name);
        children.extend(scope.functions.iter().map(TreeNode::from));
        TreeNode::with_children(NodeKind::Scope, ScopeKeyword::Implement.as_str(), children)
    }
}

impl From<&NamedScope> for TreeNode {
    fn from(scope: &NamedScope) -> Self {
        TreeNode::with_children(NodeKind::NamedScope, scope.name.as_str(), body(&scope.body).collect())
    }
}

impl From<&UnnamedScope> for TreeNode {
    fn from(scope: &UnnamedScope) -> Self {
        TreeNode::with_children(NodeKind::UnnamedScope, "", body(&scope.body).collect())
    }
}

impl From<&Node> for TreeNode {
    fn from(node: &Node) -> Self {
        match node {
            Node::Function(scope) => scope.into(),
            Node::For(scope) => scope.into(),
            Node::Struct(scope) => scope.into(),
            Node::Implement(scope) => scope.into(),
            Node::Labeled(scope) => scope.into(),
            Node::NamedScope(scope) => scope.into(),
            Node::UnnamedScope(scope) => scope.into(),

            Node::VariableDeclaration { name, ty, value } => TreeNode::with_children(
                NodeKind::VariableDeclaration,
                name.as_str(),
                vec![type_node(*ty), value.into()],
            ),

            Node::Assignment { target, value } => {
                TreeNode::with_children(NodeKind::Assignment, target.as_str(), vec![value.into()])
            }

            Node::Return(value) => TreeNode::with_children(
                NodeKind::ReturnStatement,
                "return",
                value.iter().map(TreeNode::from).collect(),
            ),

            Node::FunctionCall { callee, arguments } => TreeNode::with_children(
                NodeKind::FunctionCall,
                callee.as_str(),
                arguments.iter().map(TreeNode::from).collect(),
            ),

            Node::Operator { keyword, arguments } => TreeNode::with_children(
                NodeKind::Operator,
                keyword.as_str(),
                arguments.iter().map(TreeNode::from).collect(),
            ),
        }
    }
}
