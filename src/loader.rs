/*
 * ==========================================================================
 * Z99 - Parser for the z99 teaching language
 * ==========================================================================
 * 
 * File:     loader.rs
 * Purpose:  Reads lexer output (JSON token records) into memory.
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

use crate::error::LoadError;
use crate::token::Token;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parses a JSON array of token records.
///
/// ```text
/// [{ "line": 1, "string": "program", "type": "Program", "index": 0 }, ...]
/// ```
pub fn tokens_from_str(json: &str) -> Result<Vec<Token>, LoadError> {
    Ok(serde_json::from_str(json)?)
}

pub fn tokens_from_reader(reader: impl Read) -> Result<Vec<Token>, LoadError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads a token file from disk.
pub fn load_tokens(path: impl AsRef<Path>) -> Result<Vec<Token>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tokens_from_reader(BufReader::new(file))
}
