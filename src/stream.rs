/*
 * ==========================================================================
 * Z99 - Parser for the z99 teaching language
 * ==========================================================================
 * 
 * File:     stream.rs
 * Purpose:  Rewindable cursor over a fully materialized token sequence.
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

use crate::error::{LoadError, StreamError};
use crate::loader;
use crate::token::Token;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of one stream instance, carried by every checkpoint it hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreamId(u64);

impl StreamId {
    /// Allocates an identity no other stream in this process shares.
    pub fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        StreamId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Saved stream position.
///
/// Only `TokenStream::remember` produces one, and it may only be given back
/// to the stream that produced it. Restoring is O(1) and stays valid no
/// matter how many reads happen in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    stream: StreamId,
    offset: isize,
}

impl Checkpoint {
    pub fn new(stream: StreamId, offset: isize) -> Self {
        Self { stream, offset }
    }

    pub fn stream(self) -> StreamId {
        self.stream
    }

    /// The cursor value captured; -1 means nothing was consumed yet.
    pub fn offset(self) -> isize {
        self.offset
    }
}

/// Cursor contract the grammar engine drives.
///
/// The cursor denotes the last consumed position. It starts one before the
/// first token and never exceeds the sequence length; the position equal to
/// the length reads as a synthesized EOF token.
pub trait TokenStream {
    /// Advances the cursor and returns the token now under it.
    fn next(&mut self) -> Result<&Token, StreamError>;

    /// Returns the token after the cursor without advancing.
    fn look_ahead(&self) -> Result<&Token, StreamError>;

    /// Steps the cursor back by one, never below position 0.
    fn back(&mut self);

    /// Returns the last consumed token.
    fn current(&self) -> Result<&Token, StreamError>;

    fn remember(&self) -> Checkpoint;

    /// Moves the cursor to a checkpoint taken earlier from this stream.
    fn go_to(&mut self, checkpoint: Checkpoint);
}

/// `TokenStream` over an owned vector of tokens.
#[derive(Debug, Clone)]
pub struct VecStream {
    id: StreamId,
    tokens: Vec<Token>,
    position: isize,
    eof: Token,
}

impl VecStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            id: StreamId::fresh(),
            tokens,
            position: -1,
            eof: Token::eof(),
        }
    }

    /// Loads a token file (a JSON array of token records) into a stream.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Ok(Self::new(loader::load_tokens(path)?))
    }

    pub fn id(&self) -> StreamId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    fn length(&self) -> isize {
        self.tokens.len() as isize
    }

    fn get(&self, position: isize) -> Result<&Token, StreamError> {
        if position < 0 {
            return Err(StreamError::NotStarted);
        }
        if position == self.length() {
            return Ok(&self.eof);
        }
        if position > self.length() {
            return Err(StreamError::Exhausted {
                position,
                length: self.tokens.len(),
            });
        }
        Ok(&self.tokens[position as usize])
    }
}

impl TokenStream for VecStream {
    fn next(&mut self) -> Result<&Token, StreamError> {
        let position = self.position + 1;
        if position > self.length() {
            return Err(StreamError::Exhausted {
                position,
                length: self.tokens.len(),
            });
        }
        self.position = position;
        self.get(position)
    }

    fn look_ahead(&self) -> Result<&Token, StreamError> {
        self.get(self.position + 1)
    }

    fn back(&mut self) {
        // Floor is 0, not -1. Existing callers rely on it.
        if self.position > 0 {
            self.position -= 1;
        }
    }

    fn current(&self) -> Result<&Token, StreamError> {
        self.get(self.position)
    }

    fn remember(&self) -> Checkpoint {
        Checkpoint::new(self.id, self.position)
    }

    fn go_to(&mut self, checkpoint: Checkpoint) {
        debug_assert_eq!(
            checkpoint.stream(),
            self.id,
            "checkpoint belongs to another stream"
        );
        self.position = checkpoint.offset();
    }
}
