//! Configuration for an analysis run.
//!
//! [`AnalysisConfig`] can be built in code, deserialized from a JSON file or
//! tweaked by CLI flags. Every field has a default, so a partial JSON file
//! only overrides what it names.
//!
//! ```
//! use wordtally::config::{AnalysisConfig, TokenizerRule, TotalCountMode};
//!
//! let config: AnalysisConfig = serde_json::from_str(r#"{"tokenizer": "legacy"}"#).unwrap();
//! assert_eq!(config.tokenizer, TokenizerRule::Legacy);
//! assert_eq!(config.total_count, TotalCountMode::Compatible);
//! assert_eq!(config.page_size, 20);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordTallyError};

/// Default number of ranked rows shown when no explicit top N is requested.
pub const DEFAULT_TOP_N: usize = 100;

/// Default number of rows per results page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Which word pattern the tokenizers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerRule {
    /// One rule for documents and stop words: an ASCII letter, then ASCII
    /// word characters, with internal apostrophes allowed.
    #[default]
    Canonical,
    /// The historical pair of patterns: two characters minimum, a comma may
    /// start a token, and only documents accept a leading apostrophe.
    Legacy,
}

/// How the reported total word count relates to the number of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalCountMode {
    /// Token count plus one, matching previously published totals.
    #[default]
    Compatible,
    /// The plain token count.
    Exact,
}

impl TotalCountMode {
    /// Turn a raw token count into the reported total.
    ///
    /// Zero tokens always yield `None`.
    pub fn total(&self, tokens: u64) -> Option<u64> {
        if tokens == 0 {
            return None;
        }
        match self {
            TotalCountMode::Compatible => Some(tokens + 1),
            TotalCountMode::Exact => Some(tokens),
        }
    }
}

/// Settings shared by the pipeline and the results view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Word pattern used for both documents.
    pub tokenizer: TokenizerRule,

    /// Total word count policy.
    pub total_count: TotalCountMode,

    /// Top N used when the caller does not request one.
    pub default_top_n: usize,

    /// Rows per page in the results view.
    pub page_size: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerRule::default(),
            total_count: TotalCountMode::default(),
            default_top_n: DEFAULT_TOP_N,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AnalysisConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tokenizer rule.
    pub fn with_tokenizer(mut self, rule: TokenizerRule) -> Self {
        self.tokenizer = rule;
        self
    }

    /// Set the total count mode.
    pub fn with_total_count(mut self, mode: TotalCountMode) -> Self {
        self.total_count = mode;
        self
    }

    /// Set the default top N.
    pub fn with_default_top_n(mut self, top_n: usize) -> Self {
        self.default_top_n = top_n;
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WordTallyError::invalid_config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: AnalysisConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid configuration {}: {e}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values for consistency.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(WordTallyError::invalid_config(
                "page_size must be greater than 0",
            ));
        }
        Ok(())
    }
}
