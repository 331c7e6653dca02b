/*
 * ==========================================================================
 * Z99 - Parser for the z99 teaching language
 * ==========================================================================
 * 
 * File:     test_utils.rs
 * Purpose:  Token builders shared by unit tests.
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

/// Splits whitespace-separated z99 text into tokens.
///
/// Test scaffolding only: every lexeme must be surrounded by whitespace.
/// Lines and indices are filled in so diagnostics can be checked.
pub fn lex(src: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for (line, text) in src.lines().enumerate() {
        for word in text.split_whitespace() {
            let index = tokens.len();
            tokens.push(Token::new(line + 1, word, classify(word), index));
        }
    }
    tokens
}

/// `lex` plus an explicit trailing EOF record, as lexers emit it.
pub fn lex_with_eof(src: &str) -> Vec<Token> {
    let mut tokens = lex(src);
    let line = tokens.last().map_or(1, |t| t.line);
    let index = tokens.len();
    tokens.push(Token::new(line, "", TokenType::Eof, index));
    tokens
}

fn classify(word: &str) -> TokenType {
    match word {
        "program" => TokenType::Program,
        "var" => TokenType::Var,
        "begin" => TokenType::Begin,
        "end" => TokenType::End,
        "read" => TokenType::Read,
        "write" => TokenType::Write,
        "if" => TokenType::If,
        "then" => TokenType::Then,
        "fi" => TokenType::Fi,
        "repeat" => TokenType::Repeat,
        "until" => TokenType::Until,
        "integer" | "real" | "boolean" => TokenType::Type,
        "true" | "false" => TokenType::BoolConst,
        ":" => TokenType::Colon,
        ";" => TokenType::Semi,
        "," => TokenType::Comma,
        "(" => TokenType::LBracket,
        ")" => TokenType::RBracket,
        ":=" => TokenType::AssignOp,
        "<" | ">" | "=" | "<=" | ">=" | "<>" => TokenType::RelOp,
        "+" => TokenType::Plus,
        "-" => TokenType::Minus,
        "*" => TokenType::Star,
        "/" => TokenType::Slash,
        w if w.chars().all(|c| c.is_ascii_digit()) => TokenType::IntNum,
        w if w.chars().all(|c| c.is_ascii_digit() || c == '.') => TokenType::RealNum,
        _ => TokenType::Ident,
    }
}

/// Types of the given tokens, for compact assertions.
pub fn types(tokens: &[&Token]) -> Vec<TokenType> {
    tokens.iter().map(|t| t.ty).collect()
}
