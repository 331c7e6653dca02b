/*
 * ==========================================================================
 * Z99 - Parser for the z99 teaching language
 * ==========================================================================
 * 
 * File:     lib.rs
 * Purpose:  Crate root: module wiring and public re-exports.
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

//! Backtracking recursive-descent parser for z99, a small Pascal-like
//! teaching language.
//!
//! The crate takes a token sequence produced by an external lexer and
//! returns a concrete parse tree that mirrors the grammar rule for rule:
//!
//! ```text
//! Token file → loader → VecStream → Parser → Node
//! ```
//!
//! - [`token`] - token values and type tags
//! - [`stream`] - rewindable token cursor with checkpoints
//! - [`parser`] - grammar engine, one method per rule
//! - [`tree`] - parse tree types
//! - [`error`] - syntax, stream and load errors
//! - [`loader`] - JSON token files
//! - [`diagnostics`] - error reports
//! - [`cli`] - driver for the `z99` binary

pub mod cli;
pub mod diagnostics;
pub mod error;
pub mod loader;
pub mod parser;
pub mod stream;
pub mod token;
pub mod tree;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod tree_tests;

pub use error::{Expected, LoadError, ParseError, StreamError, SyntaxError};
pub use parser::{parse, Parser};
pub use stream::{Checkpoint, TokenStream, VecStream};
pub use token::{Token, TokenType};
pub use tree::{Child, Leaf, Node, Rule};
