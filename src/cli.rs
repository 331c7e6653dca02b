/*
 * ==========================================================================
 * Z99 - Parser for the z99 teaching language
 * ==========================================================================
 * 
 * File:     cli.rs
 * Purpose:  Command-line arguments and the driver behind the z99 binary.
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

use crate::diagnostics::DiagnosticPrinter;
use crate::loader;
use crate::parser;
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;

pub const EXIT_OK: i32 = 0;
pub const EXIT_SYNTAX: i32 = 1;
pub const EXIT_LOAD: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "z99", version, about = "Parse a z99 token file and print its parse tree")]
pub struct Args {
    /// Token file produced by a z99 lexer (JSON array of token records)
    pub tokens: PathBuf,

    /// How to print the tree of a successful parse
    #[arg(long, short, value_enum, default_value_t = Format::Tree)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Indented outline, one node or token per line
    Tree,
    /// Nested `{"rule": [...]}` objects
    Json,
    /// Validate only
    Check,
}

/// Loads, parses and reports. Returns the process exit code.
///
/// Parse trees go to `out`, diagnostics to `err`. Only failures to write
/// to either surface as `Err`.
pub fn run(args: &Args, out: &mut impl Write, err: &mut impl Write) -> io::Result<i32> {
    let printer = DiagnosticPrinter::new(args.tokens.display().to_string());

    let tokens = match loader::load_tokens(&args.tokens) {
        Ok(tokens) => tokens,
        Err(error) => {
            printer.render_load_error(err, &error)?;
            return Ok(EXIT_LOAD);
        }
    };

    let tree = match parser::parse(tokens) {
        Ok(tree) => tree,
        Err(error) => {
            printer.render_parse_error(err, &error)?;
            return Ok(EXIT_SYNTAX);
        }
    };

    match args.format {
        Format::Tree => write!(out, "{tree}")?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &tree)?;
            writeln!(out)?;
        }
        Format::Check => {}
    }
    Ok(EXIT_OK)
}
