//! Core analyzer trait definition.
//!
//! An analyzer is the complete text processing step from raw text to
//! normalized tokens:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Aggregate
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 .. N
//! ```
//!
//! # Examples
//!
//! ```
//! use wordtally::analysis::analyzer::analyzer::Analyzer;
//! use wordtally::analysis::analyzer::word::WordAnalyzer;
//! use wordtally::config::TokenizerRule;
//!
//! let analyzer = WordAnalyzer::document(TokenizerRule::Canonical).unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Hello World").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so an analyzer can be held by a
/// pipeline that is moved across tasks.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
