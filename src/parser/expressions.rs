/*
 * ==========================================================================
 * Z99 - Parser for the z99 teaching language
 * ==========================================================================
 * 
 * File:     parser/expressions.rs
 * Purpose:  Expression rules from expression down to constants.
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
 *
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * The z99 expression grammar is right-recursive and has no precedence
 * climbing:
 *
 *   expression       → arithmExpression | boolExpr
 *   arithmExpression → term addOp arithmExpression | term
 *   boolExpr         → arithmExpression RelOp arithmExpression
 *   term             → factor multOp term | factor
 *   factor           → Ident | constant | LBracket arithmExpression RBracket
 *
 * The binary rules are greedy: after the operand, the operator and the
 * recursive continuation are tried together, and when either fails the
 * stream is rewound to just past the operand, leaving the bare operand
 * form. The operand itself is parsed only once. Resulting nodes have either
 * three children or one.
 *
 * ==========================================================================
 */

use crate::error::{Expected, ParseError};
use crate::parser::helpers::RuleFn;
use crate::parser::parser::{ParseResult, Parser};
use crate::stream::TokenStream;
use crate::token::TokenType;
use crate::tree::{Child, Node, Rule};

impl<S: TokenStream> Parser<'_, S> {
    /// expression → arithmExpression | boolExpr
    ///
    /// Ordered choice: an arithmetic prefix wins over a relational
    /// comparison starting with the same operand.
    pub fn expression(&mut self) -> ParseResult<Node> {
        let rules: [(Rule, RuleFn<Self>); 2] = [
            (Rule::ArithmExpression, Self::arithm_expression),
            (Rule::BoolExpr, Self::bool_expr),
        ];
        let inner = self.one_of_rules(&rules)?;
        Ok(Node::new(Rule::Expression, vec![inner.into()]))
    }

    /// arithmExpression → term addOp arithmExpression | term
    pub fn arithm_expression(&mut self) -> ParseResult<Node> {
        let mut children: Vec<Child> = vec![self.term()?.into()];
        let tail: Option<Vec<Child>> = self.attempt(|p| {
            Ok(vec![p.add_op()?.into(), p.arithm_expression()?.into()])
        })?;

        children.extend(tail.into_iter().flatten());
        Ok(Node::new(Rule::ArithmExpression, children))
    }

    /// boolExpr → arithmExpression RelOp arithmExpression
    pub fn bool_expr(&mut self) -> ParseResult<Node> {
        let children = vec![
            self.arithm_expression()?.into(),
            self.expect(TokenType::RelOp)?.into(),
            self.arithm_expression()?.into(),
        ];
        Ok(Node::new(Rule::BoolExpr, children))
    }

    /// term → factor multOp term | factor
    pub fn term(&mut self) -> ParseResult<Node> {
        let mut children: Vec<Child> = vec![self.factor()?.into()];
        let tail: Option<Vec<Child>> = self.attempt(|p| {
            Ok(vec![p.mult_op()?.into(), p.term()?.into()])
        })?;

        children.extend(tail.into_iter().flatten());
        Ok(Node::new(Rule::Term, children))
    }

    /// factor → Ident | constant | LBracket arithmExpression RBracket
    ///
    /// The bracketed form is the last alternative, so a failure inside it is
    /// reported as a factor mismatch at wherever the stream stopped, not
    /// rewound.
    pub fn factor(&mut self) -> ParseResult<Node> {
        if let Some(ident) = self.accept(TokenType::Ident)? {
            return Ok(Node::new(Rule::Factor, vec![ident.into()]));
        }

        if let Some(constant) = self.attempt(Self::constant)? {
            return Ok(Node::new(Rule::Factor, vec![constant.into()]));
        }

        match self.bracketed() {
            Ok(children) => Ok(Node::new(Rule::Factor, children)),
            Err(ParseError::Syntax(_)) => Err(self.mismatch(Expected::Factor)),
            Err(err) => Err(err),
        }
    }

    fn bracketed(&mut self) -> ParseResult<Vec<Child>> {
        Ok(vec![
            self.expect(TokenType::LBracket)?.into(),
            self.arithm_expression()?.into(),
            self.expect(TokenType::RBracket)?.into(),
        ])
    }

    /// addOp → Plus | Minus
    pub fn add_op(&mut self) -> ParseResult<Node> {
        let op = self.expect_one_of(&[TokenType::Plus, TokenType::Minus])?;
        Ok(Node::new(Rule::AddOp, vec![op.into()]))
    }

    /// multOp → Star | Slash
    pub fn mult_op(&mut self) -> ParseResult<Node> {
        let op = self.expect_one_of(&[TokenType::Star, TokenType::Slash])?;
        Ok(Node::new(Rule::MultOp, vec![op.into()]))
    }

    /// constant → IntNum | RealNum | BoolConst
    pub fn constant(&mut self) -> ParseResult<Node> {
        let literal = self.expect_one_of(&[
            TokenType::IntNum,
            TokenType::RealNum,
            TokenType::BoolConst,
        ])?;
        Ok(Node::new(Rule::Constant, vec![literal.into()]))
    }
}
