//! Tokens and token streams.
//!
//! A [`Token`] is one word occurrence: its text, its ordinal in the stream
//! and the byte span it covered in the source text. Filters may rewrite the
//! text but never move the span, so a lowercased token still points at the
//! original spelling.
//!
//! ```
//! use wordtally::analysis::token::Token;
//!
//! let token = Token::with_offsets("World", 1, 6, 11);
//! assert_eq!(token.span(), 6..11);
//! assert_eq!(&"Hello World"[token.span()], "World");
//! ```

use std::fmt;
use std::ops::Range;

use regex::Match;
use serde::{Deserialize, Serialize};

/// One word occurrence in analyzed text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Word text, after any filtering.
    pub text: String,

    /// Ordinal of the occurrence, counted from 0.
    pub position: usize,

    /// Byte offset of the first matched byte in the source text.
    pub start_offset: usize,

    /// Byte offset one past the last matched byte.
    pub end_offset: usize,
}

impl Token {
    /// A token without a source span.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::with_offsets(text, position, 0, 0)
    }

    /// A token covering `start_offset..end_offset` of the source text.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// The token for the `position`-th match of a tokenizer pattern.
    pub fn from_match(position: usize, mat: Match<'_>) -> Self {
        Self::with_offsets(mat.as_str(), position, mat.start(), mat.end())
    }

    /// Byte span in the source text.
    pub fn span(&self) -> Range<usize> {
        self.start_offset..self.end_offset
    }

    /// Swap the text for `text`, leaving position and span alone.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// Take the word text out of the token.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A lazily evaluated sequence of tokens borrowed from the analyzed text.
pub type TokenStream<'a> = Box<dyn Iterator<Item = Token> + 'a>;
