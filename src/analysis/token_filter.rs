//! Token filters.
//!
//! A filter rewrites a [`TokenStream`] into another one. Word counting only
//! folds case, through [`lowercase::LowercaseFilter`].
//!
//! ```
//! use wordtally::analysis::token::Token;
//! use wordtally::analysis::token_filter::{Filter, LowercaseFilter};
//!
//! let tokens = vec![Token::new("Quick", 0), Token::new("FOX", 1)];
//! let words: Vec<String> = LowercaseFilter::new()
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(Token::into_text)
//!     .collect();
//!
//! assert_eq!(words, vec!["quick", "fox"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Transforms a token stream.
///
/// Implementations stay lazy so a document is walked once.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter<'a>(&self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>>;

    /// Short name used in debug output.
    fn name(&self) -> &'static str;
}

pub mod lowercase;

pub use lowercase::LowercaseFilter;
