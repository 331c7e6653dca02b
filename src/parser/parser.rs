/*
 * ==========================================================================
 * Z99 - Parser for the z99 teaching language
 * ==========================================================================
 * 
 * File:     parser/parser.rs
 * Purpose:  Parser state and the public parse entry point.
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

use crate::error::ParseError;
use crate::stream::{TokenStream, VecStream};
use crate::token::Token;
use crate::tree::Node;

pub type ParseResult<T> = Result<T, ParseError>;

/// The z99 grammar engine.
///
/// One method per grammar rule, spread over `statements.rs` and
/// `expressions.rs` through additional `impl Parser` blocks. Each rule
/// either returns its node or fails with a `ParseError`; callers that want
/// to try an alternative wrap the rule in `attempt`, which rewinds the
/// stream on a syntax mismatch.
///
/// The parser borrows its stream for its whole lifetime and only talks to
/// it through the `TokenStream` contract.
pub struct Parser<'s, S: TokenStream> {
    pub(crate) stream: &'s mut S,
}

impl<'s, S: TokenStream> Parser<'s, S> {
    pub fn new(stream: &'s mut S) -> Self {
        Self { stream }
    }

    pub fn stream(&self) -> &S {
        self.stream
    }
}

/// Parses a complete z99 program.
///
/// # Pipeline
/// ```text
/// Token file → Loader → Tokens → Parser → Parse tree
/// ```
///
/// # Example
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tokens = z99::loader::load_tokens("program.json")?;
/// let tree = z99::parser::parse(tokens)?;
/// println!("{tree}");
/// # Ok(())
/// # }
/// ```
pub fn parse(tokens: Vec<Token>) -> ParseResult<Node> {
    let mut stream = VecStream::new(tokens);
    Parser::new(&mut stream).program()
}
