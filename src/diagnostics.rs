/*
 * ==========================================================================
 * Z99 - Parser for the z99 teaching language
 * ==========================================================================
 * 
 * File:     diagnostics.rs
 * Purpose:  Compiler-style rendering of load and parse failures.
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

use crate::error::{LoadError, ParseError};
use crate::token::Token;
use std::io::{self, Write};

/// Renders human-friendly diagnostics for z99 failures.
///
/// Token files carry no source text, so instead of quoting the offending
/// line the report names the line number, the token index and the lexeme:
///
/// ```text
/// error[E_SYNTAX]: Expected End
///   --> prog.json:5
///    |
///    = found: y (Ident), token #12
/// ```
pub struct DiagnosticPrinter {
    /// Name of the token file, used only for display.
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Writes the report for a failed parse.
    pub fn render_parse_error(&self, out: &mut impl Write, error: &ParseError) -> io::Result<()> {
        self.render(out, error.code(), &error.to_string(), error.token())?;

        if let ParseError::Stream(_) = error {
            writeln!(out, "\nhelp: the parser read past the end of the token stream")?;
        } else if error.token().is_some_and(Token::is_eof) {
            writeln!(out, "\nhelp: the token sequence ends before the program is complete")?;
        }
        Ok(())
    }

    /// Writes the report for an unreadable token file.
    pub fn render_load_error(&self, out: &mut impl Write, error: &LoadError) -> io::Result<()> {
        self.render(out, error.code(), &error.to_string(), None)
    }

    fn render(
        &self,
        out: &mut impl Write,
        code: &str,
        message: &str,
        token: Option<&Token>,
    ) -> io::Result<()> {
        writeln!(out, "error[{code}]: {message}")?;

        let Some(token) = token else {
            return writeln!(out, "  --> {}", self.file_name);
        };

        // The synthesized EOF has no line of its own.
        if token.line == 0 {
            writeln!(out, "  --> {}", self.file_name)?;
        } else {
            writeln!(out, "  --> {}:{}", self.file_name, token.line)?;
        }
        writeln!(out, "   |")?;
        writeln!(out, "   = found: {} ({}), token #{}", token, token.ty, token.index)
    }
}
