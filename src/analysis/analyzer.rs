//! Analyzer implementations that combine tokenizers and filters.
//!
//! - [`analyzer::Analyzer`] - The analyzer trait
//! - [`pipeline::PipelineAnalyzer`] - Custom tokenizer + filter chains
//! - [`word::WordAnalyzer`] - Word rules plus case folding, per input role

#[allow(clippy::module_inception)]
pub mod analyzer;
pub mod pipeline;
pub mod word;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use word::WordAnalyzer;
