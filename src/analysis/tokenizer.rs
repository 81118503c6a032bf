//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the analysis pipeline: they split raw
//! text into a lazy [`TokenStream`]. Calling [`Tokenizer::tokenize`] again on
//! the same text restarts the stream from the beginning.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Custom regex-based tokenization
//! - [`word::WordTokenizer`] - The word rules used for documents and stop-word lists
//!
//! # Examples
//!
//! ```
//! use wordtally::analysis::tokenizer::Tokenizer;
//! use wordtally::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new(r"[A-Za-z]+").unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so tokenizers can be shared behind an
/// `Arc` by analyzers.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use wordtally::analysis::token::{Token, TokenStream};
/// use wordtally::analysis::tokenizer::Tokenizer;
/// use wordtally::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>> {
///         Ok(Box::new(
///             text.split(',')
///                 .enumerate()
///                 .map(|(i, s)| Token::new(s.trim(), i)),
///         ))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
///
/// let tokens: Vec<_> = CommaTokenizer.tokenize("a, b").unwrap().collect();
/// assert_eq!(tokens[1].text, "b");
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// The stream borrows both the tokenizer and the text and is consumed
    /// lazily, left to right.
    fn tokenize<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod regex;
pub mod word;

// Re-export all tokenizers for convenient access
pub use regex::RegexTokenizer;
pub use word::{WordRole, WordTokenizer};
