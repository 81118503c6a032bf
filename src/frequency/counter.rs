//! Document counting.
//!
//! Tokens are processed left to right. A suppressed word is skipped, an
//! unseen word starts at one, a counted word goes up by one. The total word
//! count includes suppressed tokens and repeats.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::aggregate::WordAggregate;
use super::ranking::{RankedEntry, rank};
use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::word::WordAnalyzer;
use crate::config::{AnalysisConfig, TotalCountMode};
use crate::error::Result;
use crate::source::TextSource;

/// The outcome of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedDocument {
    /// Ranked words, highest count first.
    pub sorted_entries: Vec<RankedEntry>,
    /// Total word count under the configured [`TotalCountMode`], or `None`
    /// when the document had no tokens.
    pub total_word_count: Option<u64>,
}

impl ProcessedDocument {
    /// Number of distinct ranked words.
    pub fn distinct_word_count(&self) -> usize {
        self.sorted_entries.len()
    }

    /// Whether nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.sorted_entries.is_empty()
    }

    /// Look up the count of a ranked word.
    pub fn count_of(&self, word: &str) -> Option<u64> {
        self.sorted_entries
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.count)
    }
}

/// Counts document words into an aggregate.
#[derive(Clone, Debug)]
pub struct DocumentCounter {
    analyzer: WordAnalyzer,
    total_count: TotalCountMode,
}

impl DocumentCounter {
    /// Create a counter from an analyzer and a total count policy.
    pub fn new(analyzer: WordAnalyzer, total_count: TotalCountMode) -> Self {
        DocumentCounter {
            analyzer,
            total_count,
        }
    }

    /// Create a counter from an analysis configuration.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        Ok(Self::new(
            WordAnalyzer::document(config.tokenizer)?,
            config.total_count,
        ))
    }

    /// The analyzer used for documents.
    pub fn analyzer(&self) -> &WordAnalyzer {
        &self.analyzer
    }

    /// The total count policy.
    pub fn total_count_mode(&self) -> TotalCountMode {
        self.total_count
    }

    /// Record every token of `text` and return the number of tokens.
    pub fn tally_text(&self, aggregate: &mut WordAggregate, text: &str) -> Result<u64> {
        let mut tokens = 0u64;
        for token in self.analyzer.analyze(text)? {
            aggregate.record(&token.text);
            tokens += 1;
        }
        Ok(tokens)
    }

    /// Count `text` into the aggregate and rank the result.
    pub fn count_text(
        &self,
        mut aggregate: WordAggregate,
        text: &str,
    ) -> Result<ProcessedDocument> {
        let tokens = self.tally_text(&mut aggregate, text)?;
        let sorted_entries = rank(&aggregate);
        debug!(
            "counted {} tokens into {} aggregate entries",
            tokens,
            aggregate.len()
        );

        Ok(ProcessedDocument {
            sorted_entries,
            total_word_count: self.total_count.total(tokens),
        })
    }

    /// Read a document, count it into the aggregate and rank the result.
    ///
    /// The aggregate is consumed; on a read error nothing is counted.
    pub async fn count<S: TextSource>(
        &self,
        aggregate: WordAggregate,
        source: &S,
    ) -> Result<ProcessedDocument> {
        let text = source.read_text().await?;
        let processed = self.count_text(aggregate, &text)?;
        info!(
            "analyzed {}: {} distinct words, total {:?}",
            source.describe(),
            processed.distinct_word_count(),
            processed.total_word_count
        );
        Ok(processed)
    }
}

/// Count a document with the default configuration.
pub async fn count_words<S: TextSource>(
    aggregate: WordAggregate,
    source: &S,
) -> Result<ProcessedDocument> {
    DocumentCounter::from_config(&AnalysisConfig::default())?
        .count(aggregate, source)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenizerRule;
    use crate::frequency::signal::WordSignal;
    use crate::source::MemorySource;

    fn counter() -> DocumentCounter {
        DocumentCounter::from_config(&AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_counts_without_stop_words() {
        let text = "test test test file file flagged flagged";
        let processed = counter().count_text(WordAggregate::new(), text).unwrap();

        assert_eq!(
            processed.sorted_entries,
            vec![
                RankedEntry::new("test", 3),
                RankedEntry::new("file", 2),
                RankedEntry::new("flagged", 2),
            ]
        );
        assert_eq!(processed.total_word_count, Some(8));
        assert_eq!(processed.distinct_word_count(), 3);
    }

    #[test]
    fn test_suppressed_words_are_skipped() {
        let mut aggregate = WordAggregate::new();
        aggregate.suppress("flagged");

        let processed = counter()
            .count_text(aggregate, "test test test file file flagged flagged")
            .unwrap();

        assert_eq!(
            processed.sorted_entries,
            vec![RankedEntry::new("test", 3), RankedEntry::new("file", 2)]
        );
        assert_eq!(processed.count_of("flagged"), None);
        // Suppressed tokens still contribute to the total.
        assert_eq!(processed.total_word_count, Some(8));
    }

    #[test]
    fn test_each_occurrence_adds_one() {
        let counter = counter();
        let mut aggregate = WordAggregate::new();
        for expected in 1..=5 {
            counter.tally_text(&mut aggregate, "Word").unwrap();
            assert_eq!(aggregate.get("word"), Some(WordSignal::Count(expected)));
        }
    }

    #[test]
    fn test_empty_document_has_no_total() {
        let processed = counter().count_text(WordAggregate::new(), "").unwrap();
        assert!(processed.is_empty());
        assert_eq!(processed.total_word_count, None);

        let processed = counter()
            .count_text(WordAggregate::new(), "123 456 !!!")
            .unwrap();
        assert_eq!(processed.total_word_count, None);
    }

    #[test]
    fn test_exact_total_mode() {
        let config = AnalysisConfig::default().with_total_count(TotalCountMode::Exact);
        let counter = DocumentCounter::from_config(&config).unwrap();

        let processed = counter
            .count_text(WordAggregate::new(), "one two two")
            .unwrap();
        assert_eq!(processed.total_word_count, Some(3));
        assert_eq!(counter.total_count_mode(), TotalCountMode::Exact);
    }

    #[test]
    fn test_legacy_document_rule() {
        let config = AnalysisConfig::default().with_tokenizer(TokenizerRule::Legacy);
        let counter = DocumentCounter::from_config(&config).unwrap();

        let processed = counter
            .count_text(WordAggregate::new(), "I don't know")
            .unwrap();

        assert_eq!(processed.count_of("don"), Some(1));
        assert_eq!(processed.count_of("'t"), Some(1));
        assert_eq!(processed.count_of("i"), None);
        assert_eq!(processed.total_word_count, Some(4));
    }

    #[tokio::test]
    async fn test_count_words_from_source() {
        let source = MemorySource::new("doc.txt", "Hello hello world");
        let processed = count_words(WordAggregate::new(), &source).await.unwrap();

        assert_eq!(processed.sorted_entries[0], RankedEntry::new("hello", 2));
        assert_eq!(processed.total_word_count, Some(4));
    }

    #[tokio::test]
    async fn test_count_words_read_error() {
        let source = MemorySource::new("doc.txt", vec![0xc3, 0x28]);
        let err = count_words(WordAggregate::new(), &source)
            .await
            .unwrap_err();
        assert!(err.is_read_error());
    }
}
