//! Tokenizer plus filter chain.
//!
//! ```
//! use std::sync::Arc;
//!
//! use wordtally::analysis::analyzer::analyzer::Analyzer;
//! use wordtally::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use wordtally::analysis::token_filter::lowercase::LowercaseFilter;
//! use wordtally::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::new(r"[A-Za-z]+").unwrap()))
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .with_name("letters");
//!
//! let words: Vec<String> = analyzer.analyze("Fox, FOX 99 fox").unwrap().map(|t| t.text).collect();
//! assert_eq!(words, vec!["fox", "fox", "fox"]);
//! assert_eq!(analyzer.stages(), "regex > lowercase");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Runs a tokenizer and then each filter in insertion order.
///
/// Stages are shared behind `Arc`, so cloning a pipeline does not rebuild
/// compiled patterns.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// A pipeline with no filters, named after its tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Append a filter after the existing ones.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Replace the pipeline name shown in debug output.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// The tokenizer that starts the pipeline.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// The filters, in the order they run.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// The name given to this pipeline.
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    /// Stage names joined in run order, e.g. `word > lowercase`.
    pub fn stages(&self) -> String {
        std::iter::once(self.tokenizer.name())
            .chain(self.filters.iter().map(|f| f.name()))
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>> {
        self.filters
            .iter()
            .try_fold(self.tokenizer.tokenize(text)?, |tokens, filter| {
                filter.filter(tokens)
            })
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("stages", &self.stages())
            .finish()
    }
}
