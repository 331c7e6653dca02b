/*
 * ==========================================================================
 * Z99 - Parser for the z99 teaching language
 * ==========================================================================
 * 
 * File:     parser/statements.rs
 * Purpose:  Program skeleton, declarations, lists and statement rules.
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

use crate::parser::helpers::RuleFn;
use crate::parser::parser::{ParseResult, Parser};
use crate::stream::TokenStream;
use crate::token::TokenType;
use crate::tree::{Node, Rule};

impl<S: TokenStream> Parser<'_, S> {
    /// program → Program Ident Var declareList Semi Begin statementList Semi End EOF
    ///
    /// The root of every parse. Any syntax mismatch that escapes here is the
    /// one reported to the caller.
    pub fn program(&mut self) -> ParseResult<Node> {
        let children = vec![
            self.expect(TokenType::Program)?.into(),
            self.expect(TokenType::Ident)?.into(),
            self.expect(TokenType::Var)?.into(),
            self.declare_list()?.into(),
            self.expect(TokenType::Semi)?.into(),
            self.expect(TokenType::Begin)?.into(),
            self.statement_list()?.into(),
            self.expect(TokenType::Semi)?.into(),
            self.expect(TokenType::End)?.into(),
            self.expect(TokenType::Eof)?.into(),
        ];
        Ok(Node::new(Rule::Program, children))
    }

    /// declareList → declaration ( Semi declaration )*
    pub fn declare_list(&mut self) -> ParseResult<Node> {
        let mut children = vec![self.declaration()?.into()];
        self.repeat_separated(&mut children, TokenType::Semi, |p| {
            Ok(p.declaration()?.into())
        })?;
        Ok(Node::new(Rule::DeclareList, children))
    }

    /// declaration → identList Colon Type
    pub fn declaration(&mut self) -> ParseResult<Node> {
        let children = vec![
            self.ident_list()?.into(),
            self.expect(TokenType::Colon)?.into(),
            self.expect(TokenType::Type)?.into(),
        ];
        Ok(Node::new(Rule::Declaration, children))
    }

    /// identList → Ident ( Comma Ident )*
    pub fn ident_list(&mut self) -> ParseResult<Node> {
        let mut children = vec![self.expect(TokenType::Ident)?.into()];
        self.repeat_separated(&mut children, TokenType::Comma, |p| {
            Ok(p.expect(TokenType::Ident)?.into())
        })?;
        Ok(Node::new(Rule::IdentList, children))
    }

    /// statementList → statement ( Semi statement )*
    ///
    /// The separator is also the terminator the enclosing rule expects, so
    /// the last `Semi` is left for the caller once no statement follows it.
    pub fn statement_list(&mut self) -> ParseResult<Node> {
        let mut children = vec![self.statement()?.into()];
        self.repeat_separated(&mut children, TokenType::Semi, |p| {
            Ok(p.statement()?.into())
        })?;
        Ok(Node::new(Rule::StatementList, children))
    }

    /// statement → assign | input | output | branchStatement | repeatStatement
    pub fn statement(&mut self) -> ParseResult<Node> {
        let rules: [(Rule, RuleFn<Self>); 5] = [
            (Rule::Assign, Self::assign),
            (Rule::Input, Self::input),
            (Rule::Output, Self::output),
            (Rule::BranchStatement, Self::branch_statement),
            (Rule::RepeatStatement, Self::repeat_statement),
        ];
        let inner = self.one_of_rules(&rules)?;
        Ok(Node::new(Rule::Statement, vec![inner.into()]))
    }

    /// input → Read LBracket identList RBracket
    pub fn input(&mut self) -> ParseResult<Node> {
        let children = vec![
            self.expect(TokenType::Read)?.into(),
            self.expect(TokenType::LBracket)?.into(),
            self.ident_list()?.into(),
            self.expect(TokenType::RBracket)?.into(),
        ];
        Ok(Node::new(Rule::Input, children))
    }

    /// output → Write LBracket identList RBracket
    pub fn output(&mut self) -> ParseResult<Node> {
        let children = vec![
            self.expect(TokenType::Write)?.into(),
            self.expect(TokenType::LBracket)?.into(),
            self.ident_list()?.into(),
            self.expect(TokenType::RBracket)?.into(),
        ];
        Ok(Node::new(Rule::Output, children))
    }

    /// branchStatement → If expression Then statementList Semi Fi
    pub fn branch_statement(&mut self) -> ParseResult<Node> {
        let children = vec![
            self.expect(TokenType::If)?.into(),
            self.expression()?.into(),
            self.expect(TokenType::Then)?.into(),
            self.statement_list()?.into(),
            self.expect(TokenType::Semi)?.into(),
            self.expect(TokenType::Fi)?.into(),
        ];
        Ok(Node::new(Rule::BranchStatement, children))
    }

    /// repeatStatement → Repeat statementList Semi Until boolExpr
    pub fn repeat_statement(&mut self) -> ParseResult<Node> {
        let children = vec![
            self.expect(TokenType::Repeat)?.into(),
            self.statement_list()?.into(),
            self.expect(TokenType::Semi)?.into(),
            self.expect(TokenType::Until)?.into(),
            self.bool_expr()?.into(),
        ];
        Ok(Node::new(Rule::RepeatStatement, children))
    }

    /// assign → Ident AssignOp expression
    pub fn assign(&mut self) -> ParseResult<Node> {
        let children = vec![
            self.expect(TokenType::Ident)?.into(),
            self.expect(TokenType::AssignOp)?.into(),
            self.expression()?.into(),
        ];
        Ok(Node::new(Rule::Assign, children))
    }
}
