//! # wordtally
//!
//! Word frequency analysis for plain-text documents.
//!
//! A run loads an optional stop-word document, which suppresses its words,
//! then counts the words of a document and ranks them by occurrence.
//!
//! ## Features
//!
//! - Lazy, pluggable text analysis (tokenizers, filters, analyzers)
//! - Case-insensitive counting with stop-word suppression
//! - Deterministic ranking (count descending, then word)
//! - Top-N, sortable and paginated result views
//! - Command-line interface with human, JSON and CSV output

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod frequency;
pub mod source;
pub mod view;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
