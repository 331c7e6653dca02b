/*
 * ==========================================================================
 * Z99 - Parser for the z99 teaching language
 * ==========================================================================
 * 
 * File:     error.rs
 * Purpose:  Error kinds raised while loading and parsing token streams.
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
use crate::tree::Rule;
use std::fmt;
use std::path::PathBuf;

/// What a failed match wanted to see at the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// A single lexeme required by a deterministic grammar position.
    Lexeme(TokenType),

    /// Any of several lexemes (`addOp`, `multOp`, `constant`).
    OneOfLexemes(Vec<TokenType>),

    /// Any of several rules (`statement`, `expression`).
    OneOfRules(Vec<Rule>),

    /// A `factor` whose parenthesized form broke after the opening bracket.
    Factor,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Lexeme(ty) => write!(f, "Expected {ty}"),
            Expected::OneOfLexemes(types) => {
                f.write_str("Expected one of lexemes ")?;
                write_joined(f, types)
            }
            Expected::OneOfRules(rules) => {
                f.write_str("Expected one of rules ")?;
                write_joined(f, rules)
            }
            Expected::Factor => f.write_str("Expected Ident, constant or (arithmExpression)"),
        }
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Syntax mismatch: the lookahead token did not fit the grammar.
///
/// Inside alternation and repetition this is ordinary control flow; the
/// parser rewinds and tries the next option. Only the mismatch that escapes
/// `program()` reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{expected}")]
pub struct SyntaxError {
    pub expected: Expected,

    /// Lookahead at the moment the expectation failed.
    pub token: Token,
}

impl SyntaxError {
    pub fn new(expected: Expected, token: Token) -> Self {
        Self { expected, token }
    }
}

/// Misuse of the token stream. Never recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// A read past the synthesized end-of-stream token.
    #[error("token stream already ended (position {position}, length {length})")]
    Exhausted { position: isize, length: usize },

    /// `current()` called before anything was consumed.
    #[error("no token has been consumed yet")]
    NotStarted,
}

/// Failure of a grammar rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Stream(#[from] StreamError),
}

impl ParseError {
    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::Syntax(_) => "E_SYNTAX",
            ParseError::Stream(_) => "E_STREAM",
        }
    }

    /// The offending token, when the failure is a syntax mismatch.
    pub fn token(&self) -> Option<&Token> {
        match self {
            ParseError::Syntax(err) => Some(&err.token),
            ParseError::Stream(_) => None,
        }
    }

    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            ParseError::Syntax(err) => Some(err),
            ParseError::Stream(_) => None,
        }
    }
}

/// Failure to read a token file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read token file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed token data: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoadError {
    pub fn code(&self) -> &'static str {
        "E_LOAD"
    }
}
