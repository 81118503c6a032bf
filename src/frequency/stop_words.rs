//! Stop-word loading.
//!
//! Every token of a stop-word document is marked suppressed in the
//! aggregate. Applying the same word twice changes nothing, and no word can
//! lift another's suppression, so the order of the list is irrelevant.

use log::debug;

use super::aggregate::WordAggregate;
use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::word::WordAnalyzer;
use crate::config::{AnalysisConfig, TokenizerRule};
use crate::error::Result;
use crate::source::TextSource;

/// Marks stop words as suppressed.
#[derive(Clone, Debug)]
pub struct StopWordLoader {
    analyzer: WordAnalyzer,
}

impl StopWordLoader {
    /// Create a loader using the given tokenizer rule.
    pub fn new(rule: TokenizerRule) -> Result<Self> {
        Ok(StopWordLoader {
            analyzer: WordAnalyzer::stop_words(rule)?,
        })
    }

    /// Create a loader from an analysis configuration.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        Self::new(config.tokenizer)
    }

    /// The analyzer used for stop-word documents.
    pub fn analyzer(&self) -> &WordAnalyzer {
        &self.analyzer
    }

    /// Suppress every token of `text` and return how many tokens were read.
    pub fn apply_text(&self, aggregate: &mut WordAggregate, text: &str) -> Result<usize> {
        let mut tokens = 0;
        for token in self.analyzer.analyze(text)? {
            aggregate.suppress(&token.text);
            tokens += 1;
        }
        Ok(tokens)
    }

    /// Read a stop-word document and suppress its words.
    ///
    /// The aggregate is handed back on success. On a read error it is
    /// dropped together with the error.
    pub async fn load<S: TextSource>(
        &self,
        mut aggregate: WordAggregate,
        source: &S,
    ) -> Result<WordAggregate> {
        let text = source.read_text().await?;
        let tokens = self.apply_text(&mut aggregate, &text)?;
        debug!(
            "loaded {} stop-word tokens from {} ({} suppressed words)",
            tokens,
            source.describe(),
            aggregate.suppressed_len()
        );
        Ok(aggregate)
    }
}

/// Read a stop-word document with the default configuration and suppress
/// its words in `aggregate`.
pub async fn load_stop_words<S: TextSource>(
    aggregate: WordAggregate,
    source: &S,
) -> Result<WordAggregate> {
    StopWordLoader::from_config(&AnalysisConfig::default())?
        .load(aggregate, source)
        .await
}
