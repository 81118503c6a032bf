//! One analysis run from raw inputs to a ranked result.

use log::debug;

use super::aggregate::WordAggregate;
use super::counter::{DocumentCounter, ProcessedDocument};
use super::stop_words::StopWordLoader;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::source::{MemorySource, TextSource};

/// Runs the stop-word and counting stages over a fresh aggregate.
///
/// The pipeline holds no per-run state; every call to [`run`](Self::run)
/// starts from an empty [`WordAggregate`] and drops it once ranked.
///
/// ```
/// use wordtally::config::AnalysisConfig;
/// use wordtally::frequency::WordPipeline;
///
/// let pipeline = WordPipeline::new(AnalysisConfig::default()).unwrap();
/// let processed = pipeline
///     .run_text("The quick brown fox jumped over the lazy dog", Some("the fox"))
///     .unwrap();
///
/// assert_eq!(processed.distinct_word_count(), 6);
/// assert_eq!(processed.count_of("the"), None);
/// assert_eq!(processed.total_word_count, Some(10));
/// ```
#[derive(Clone, Debug)]
pub struct WordPipeline {
    config: AnalysisConfig,
    stop_words: StopWordLoader,
    counter: DocumentCounter,
}

impl WordPipeline {
    /// Build a pipeline for the given configuration.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(WordPipeline {
            stop_words: StopWordLoader::from_config(&config)?,
            counter: DocumentCounter::from_config(&config)?,
            config,
        })
    }

    /// The configuration this pipeline was built with.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The stop-word stage.
    pub fn stop_word_loader(&self) -> &StopWordLoader {
        &self.stop_words
    }

    /// The counting stage.
    pub fn counter(&self) -> &DocumentCounter {
        &self.counter
    }

    /// Analyze `document`, suppressing the words of `stop_words` if given.
    ///
    /// The stop-word document is fully loaded before counting starts. A read
    /// failure of either input ends the run.
    pub async fn run<D, W>(
        &self,
        document: &D,
        stop_words: Option<&W>,
    ) -> Result<ProcessedDocument>
    where
        D: TextSource,
        W: TextSource,
    {
        let mut aggregate = WordAggregate::new();
        if let Some(stop_words) = stop_words {
            aggregate = self.stop_words.load(aggregate, stop_words).await?;
        } else {
            debug!("no stop-word document, counting every word");
        }

        self.counter.count(aggregate, document).await
    }

    /// Analyze `document` without stop words.
    pub async fn run_document<D: TextSource>(&self, document: &D) -> Result<ProcessedDocument> {
        self.run(document, None::<&MemorySource>).await
    }

    /// Analyze already decoded text.
    pub fn run_text(&self, document: &str, stop_words: Option<&str>) -> Result<ProcessedDocument> {
        let mut aggregate = WordAggregate::new();
        if let Some(stop_words) = stop_words {
            self.stop_words.apply_text(&mut aggregate, stop_words)?;
        }
        self.counter.count_text(aggregate, document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TotalCountMode;
    use crate::frequency::ranking::RankedEntry;

    #[test]
    fn test_run_text_with_stop_words() {
        let pipeline = WordPipeline::new(AnalysisConfig::default()).unwrap();
        let document = "test test test file file flagged flagged";
        let processed = pipeline.run_text(document, Some("test file")).unwrap();

        assert_eq!(processed.sorted_entries, vec![RankedEntry::new("flagged", 2)]);
        assert_eq!(processed.total_word_count, Some(8));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(WordPipeline::new(AnalysisConfig::default().with_page_size(0)).is_err());
    }

    #[tokio::test]
    async fn test_run_with_sources() {
        let pipeline =
            WordPipeline::new(AnalysisConfig::default().with_total_count(TotalCountMode::Exact))
                .unwrap();
        let document = MemorySource::new("doc.txt", "Alpha beta BETA gamma");
        let stop_words = MemorySource::new("stop.txt", "gamma");

        let processed = pipeline.run(&document, Some(&stop_words)).await.unwrap();

        assert_eq!(
            processed.sorted_entries,
            vec![RankedEntry::new("beta", 2), RankedEntry::new("alpha", 1)]
        );
        assert_eq!(processed.total_word_count, Some(4));
    }

    #[tokio::test]
    async fn test_runs_do_not_share_state() {
        let pipeline = WordPipeline::new(AnalysisConfig::default()).unwrap();
        let document = MemorySource::new("doc.txt", "repeat");

        let first = pipeline.run_document(&document).await.unwrap();
        let second = pipeline.run_document(&document).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second.count_of("repeat"), Some(1));
    }

    #[tokio::test]
    async fn test_stop_word_read_error_ends_run() {
        let pipeline = WordPipeline::new(AnalysisConfig::default()).unwrap();
        let document = MemorySource::new("doc.txt", "fine text");
        let stop_words = MemorySource::new("stop.txt", vec![0xff]);

        let err = pipeline
            .run(&document, Some(&stop_words))
            .await
            .unwrap_err();
        assert!(err.is_read_error());
    }
}
