/*
 * ==========================================================================
 * Z99 - Parser for the z99 teaching language
 * ==========================================================================
 * 
 * File:     parser/mod.rs
 * Purpose:  Root module for the z99 backtracking recursive-descent parser.
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the `parse(tokens)` entry point
pub mod parser;

/// Matching primitives shared by every rule:
/// - exact and one-of lexeme matches
/// - checkpointed attempts and rule alternation
/// - separator-driven repetition
pub mod helpers;

/// Program skeleton, declarations, lists and statements.
pub mod statements;

/// Expressions down to factors, operators and constants.
pub mod expressions;

pub use parser::{parse, ParseResult, Parser};

#[cfg(test)]
mod expressions_tests;
