//! Text analysis module for wordtally.
//!
//! Tokenization and normalization of raw document text: tokenizers split
//! text into a lazy token stream, filters transform it, and analyzers chain
//! the two.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer, WordAnalyzer};
pub use token::{Token, TokenStream};
pub use token_filter::{Filter, LowercaseFilter};
pub use tokenizer::{RegexTokenizer, Tokenizer, WordRole, WordTokenizer};
