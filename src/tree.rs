/*
 * ==========================================================================
 * Z99 - Parser for the z99 teaching language
 * ==========================================================================
 * 
 * File:     tree.rs
 * Purpose:  Concrete parse tree produced by the grammar engine.
 * 
 * License:
 * This file is part of the Z99 parser project.
 * 
 * Z99 is dual-licensed under the terms of:
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

use crate::token::{Token, TokenType};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Non-terminals of the z99 grammar.
///
/// Every parse tree node is labelled with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Program,
    DeclareList,
    Declaration,
    IdentList,
    StatementList,
    Statement,
    Input,
    Output,
    BranchStatement,
    RepeatStatement,
    Assign,
    Expression,
    ArithmExpression,
    BoolExpr,
    Term,
    Factor,
    AddOp,
    MultOp,
    Constant,
}

impl Rule {
    /// Grammar name of the rule, as written in the z99 grammar.
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::Program => "program",
            Rule::DeclareList => "declareList",
            Rule::Declaration => "declaration",
            Rule::IdentList => "identList",
            Rule::StatementList => "statementList",
            Rule::Statement => "statement",
            Rule::Input => "input",
            Rule::Output => "output",
            Rule::BranchStatement => "branchStatement",
            Rule::RepeatStatement => "repeatStatement",
            Rule::Assign => "assign",
            Rule::Expression => "expression",
            Rule::ArithmExpression => "arithmExpression",
            Rule::BoolExpr => "boolExpr",
            Rule::Term => "term",
            Rule::Factor => "factor",
            Rule::AddOp => "addOp",
            Rule::MultOp => "multOp",
            Rule::Constant => "constant",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A consumed token, tagged by the lexeme it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    token: Token,
}

impl Leaf {
    pub fn new(token: Token) -> Self {
        Self { token }
    }

    pub fn ty(&self) -> TokenType {
        self.token.ty
    }

    pub fn text(&self) -> &str {
        &self.token.string
    }

    pub fn token(&self) -> &Token {
        &self.token
    }
}

/// One ordered child of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Leaf(Leaf),
    Node(Node),
}

impl Child {
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Child::Leaf(leaf) => Some(leaf),
            Child::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Leaf(_) => None,
            Child::Node(node) => Some(node),
        }
    }
}

impl From<Leaf> for Child {
    fn from(leaf: Leaf) -> Self {
        Child::Leaf(leaf)
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

/// A grammar-shaped node: the rule that matched and what it consumed.
///
/// The tree mirrors the grammar exactly. Right-recursive rules (`term`,
/// `arithmExpression`) keep their three-child / one-child shape instead of
/// being folded into binary operator nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    rule: Rule,
    children: Vec<Child>,
}

impl Node {
    pub fn new(rule: Rule, children: Vec<Child>) -> Self {
        Self { rule, children }
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Consumed tokens in source order.
    ///
    /// For a successful `program` parse this reproduces the input sequence,
    /// the trailing EOF included.
    pub fn leaves(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Token>) {
        for child in &self.children {
            match child {
                Child::Leaf(leaf) => out.push(leaf.token()),
                Child::Node(node) => node.collect_leaves(out),
            }
        }
    }

    /// First node labelled `rule`, depth-first, starting with `self`.
    pub fn find(&self, rule: Rule) -> Option<&Node> {
        if self.rule == rule {
            return Some(self);
        }
        self.children
            .iter()
            .filter_map(Child::as_node)
            .find_map(|node| node.find(rule))
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{}", "", self.rule, indent = depth * 2)?;
        for child in &self.children {
            match child {
                Child::Leaf(leaf) => writeln!(
                    f,
                    "{:indent$}{} {:?}",
                    "",
                    leaf.ty(),
                    leaf.text(),
                    indent = (depth + 1) * 2
                )?,
                Child::Node(node) => node.write_outline(f, depth + 1)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    /// Indented outline, one node or leaf per line.
    ///
    /// ```text
    /// factor
    ///   Ident "y"
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}

/* ----------------------------- */
/* JSON SHAPE                    */
/* ----------------------------- */

// Nodes serialize as `{"<rule>": [children]}` and leaves as
// `{"<type>": "<text>"}`. `statement` holds exactly one alternative and maps
// straight to it: `{"statement": {"assign": [...]}}`.

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match (self.rule, self.children.as_slice()) {
            (Rule::Statement, [alternative]) => {
                map.serialize_entry(self.rule.as_str(), alternative)?
            }
            _ => map.serialize_entry(self.rule.as_str(), &self.children)?,
        }
        map.end()
    }
}

impl Serialize for Leaf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.ty().as_str(), self.text())?;
        map.end()
    }
}

impl Serialize for Child {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Child::Leaf(leaf) => leaf.serialize(serializer),
            Child::Node(node) => node.serialize(serializer),
        }
    }
}
