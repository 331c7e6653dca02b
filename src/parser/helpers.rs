/*
 * ==========================================================================
 * Z99 - Parser for the z99 teaching language
 * ==========================================================================
 * 
 * File:     parser/helpers.rs
 * Purpose:  Matching primitives: exact matches, attempts, alternation, repetition.
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

use crate::error::{Expected, ParseError, SyntaxError};
use crate::parser::parser::{ParseResult, Parser};
use crate::stream::TokenStream;
use crate::token::TokenType;
use crate::tree::{Child, Leaf, Node, Rule};

/// A grammar rule as a plain function, for alternation tables.
pub type RuleFn<P> = fn(&mut P) -> ParseResult<Node>;

impl<S: TokenStream> Parser<'_, S> {
    /// Consumes the lookahead if it has type `ty`.
    ///
    /// A non-match is not an error: `Ok(None)` leaves the stream untouched
    /// so the caller can try something else.
    pub fn accept(&mut self, ty: TokenType) -> ParseResult<Option<Leaf>> {
        if self.stream.look_ahead()?.ty != ty {
            return Ok(None);
        }
        let token = self.stream.next()?.clone();
        Ok(Some(Leaf::new(token)))
    }

    /// Consumes a token of type `ty` or fails with a syntax mismatch.
    pub fn expect(&mut self, ty: TokenType) -> ParseResult<Leaf> {
        match self.accept(ty)? {
            Some(leaf) => Ok(leaf),
            None => Err(self.mismatch(Expected::Lexeme(ty))),
        }
    }

    /// Consumes the first of `types` the lookahead matches, in order.
    pub fn expect_one_of(&mut self, types: &[TokenType]) -> ParseResult<Leaf> {
        for &ty in types {
            if let Some(leaf) = self.accept(ty)? {
                return Ok(leaf);
            }
        }
        Err(self.mismatch(Expected::OneOfLexemes(types.to_vec())))
    }

    /// Runs `rule` from a checkpoint.
    ///
    /// On a syntax mismatch the stream is restored and `Ok(None)` returned.
    /// Stream errors are not recoverable and pass through.
    pub fn attempt<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Option<T>> {
        let checkpoint = self.stream.remember();
        match rule(self) {
            Ok(value) => Ok(Some(value)),
            Err(ParseError::Syntax(_)) => {
                self.stream.go_to(checkpoint);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Ordered alternation over rules: the first one that succeeds wins.
    ///
    /// Order matters. Alternatives sharing a prefix are not disambiguated by
    /// lookahead; the leftmost success is taken.
    pub fn one_of_rules(&mut self, rules: &[(Rule, RuleFn<Self>)]) -> ParseResult<Node> {
        for &(_, rule) in rules {
            if let Some(node) = self.attempt(rule)? {
                return Ok(node);
            }
        }
        let names = rules.iter().map(|&(name, _)| name).collect();
        Err(self.mismatch(Expected::OneOfRules(names)))
    }

    /// Zero or more `separator element` units appended to `children`.
    ///
    /// A unit that fails anywhere is rewound as a whole and ends the
    /// repetition without reporting the failure.
    pub fn repeat_separated<F>(
        &mut self,
        children: &mut Vec<Child>,
        separator: TokenType,
        mut element: F,
    ) -> ParseResult<()>
    where
        F: FnMut(&mut Self) -> ParseResult<Child>,
    {
        loop {
            let unit = self.attempt(|p| {
                let sep = p.expect(separator)?;
                let item = element(p)?;
                Ok((sep, item))
            })?;

            match unit {
                Some((sep, item)) => {
                    children.push(sep.into());
                    children.push(item);
                }
                None => return Ok(()),
            }
        }
    }

    /// Builds a syntax mismatch against the current lookahead.
    pub(crate) fn mismatch(&self, expected: Expected) -> ParseError {
        match self.stream.look_ahead() {
            Ok(token) => SyntaxError::new(expected, token.clone()).into(),
            Err(err) => err.into(),
        }
    }
}
