/*
 * ==========================================================================
 * Z99 - Parser for the z99 teaching language
 * ==========================================================================
 * 
 * File:     token.rs
 * Purpose:  Token values and the closed set of z99 token types.
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

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text carried by the synthesized end-of-stream token.
pub const EOF_TEXT: &str = "\u{0}";

/// Grammar-facing category of a z99 token.
///
/// The textual form of every variant (used in JSON input, diagnostics and
/// tree output) is exactly the variant name, except the end marker which is
/// spelled `EOF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /* ----------------------------- */
    /* KEYWORDS                      */
    /* ----------------------------- */
    Program,
    Var,
    Begin,
    End,
    Read,
    Write,
    If,
    Then,
    Fi,
    Repeat,
    Until,

    /* ----------------------------- */
    /* NAMES AND TYPES               */
    /* ----------------------------- */
    Ident,
    Type,

    /* ----------------------------- */
    /* PUNCTUATION                   */
    /* ----------------------------- */
    Colon,
    Semi,
    Comma,
    LBracket,
    RBracket,

    /* ----------------------------- */
    /* OPERATORS                     */
    /* ----------------------------- */
    AssignOp,
    RelOp,
    Plus,
    Minus,
    Star,
    Slash,

    /* ----------------------------- */
    /* LITERALS                      */
    /* ----------------------------- */
    IntNum,
    RealNum,
    BoolConst,

    /// End-of-file marker.
    ///
    /// Lexers may emit it explicitly as the final token; the stream also
    /// synthesizes one past the last element.
    #[serde(rename = "EOF")]
    Eof,
}

impl TokenType {
    /// Returns the tag exactly as it appears in token files and messages.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Program => "Program",
            TokenType::Var => "Var",
            TokenType::Begin => "Begin",
            TokenType::End => "End",
            TokenType::Read => "Read",
            TokenType::Write => "Write",
            TokenType::If => "If",
            TokenType::Then => "Then",
            TokenType::Fi => "Fi",
            TokenType::Repeat => "Repeat",
            TokenType::Until => "Until",
            TokenType::Ident => "Ident",
            TokenType::Type => "Type",
            TokenType::Colon => "Colon",
            TokenType::Semi => "Semi",
            TokenType::Comma => "Comma",
            TokenType::LBracket => "LBracket",
            TokenType::RBracket => "RBracket",
            TokenType::AssignOp => "AssignOp",
            TokenType::RelOp => "RelOp",
            TokenType::Plus => "Plus",
            TokenType::Minus => "Minus",
            TokenType::Star => "Star",
            TokenType::Slash => "Slash",
            TokenType::IntNum => "IntNum",
            TokenType::RealNum => "RealNum",
            TokenType::BoolConst => "BoolConst",
            TokenType::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lexical unit handed to the parser by an external lexer.
///
/// Tokens are created once, during tokenization, and never mutated
/// afterwards. The field names mirror the records of a token file:
///
/// ```text
/// { "line": 3, "string": "x", "type": "Ident", "index": 7 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// 1-based source line the token was read from.
    pub line: usize,

    /// The exact source text of the token.
    pub string: String,

    /// Grammar category of the token.
    #[serde(rename = "type")]
    pub ty: TokenType,

    /// Ordinal position of the token in the lexer output.
    #[serde(default)]
    pub index: usize,
}

impl Token {
    pub fn new(line: usize, string: impl Into<String>, ty: TokenType, index: usize) -> Self {
        Self {
            line,
            string: string.into(),
            ty,
            index,
        }
    }

    /// The token synthesized past the last element of a stream.
    pub fn eof() -> Self {
        Self::new(0, EOF_TEXT, TokenType::Eof, 0)
    }

    pub fn is_eof(&self) -> bool {
        self.ty == TokenType::Eof
    }
}

impl fmt::Display for Token {
    /// Prints only the lexeme, which is what users recognise in messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            f.write_str("end of input")
        } else {
            f.write_str(&self.string)
        }
    }
}
