//! Ranking of an aggregate into (word, count) entries.
//!
//! Suppressed words and non-positive counts are dropped. The rest is ordered
//! by count, highest first; equal counts are ordered by word, ascending.

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use super::aggregate::WordAggregate;
use crate::error::{Result, WordTallyError};

/// A word eligible for display together with its count (always ≥ 1).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedEntry {
    /// The normalized word.
    pub word: String,
    /// Number of occurrences in the document.
    pub count: u64,
}

impl RankedEntry {
    /// Create a new entry.
    pub fn new<S: Into<String>>(word: S, count: u64) -> Self {
        RankedEntry {
            word: word.into(),
            count,
        }
    }

    /// The entry as a `(word, count)` pair.
    pub fn as_pair(&self) -> (&str, u64) {
        (&self.word, self.count)
    }
}

impl<S: Into<String>> From<(S, u64)> for RankedEntry {
    fn from((word, count): (S, u64)) -> Self {
        RankedEntry::new(word, count)
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.count)
    }
}

/// Rank an aggregate, reporting unexpected state as an error.
pub fn try_rank(aggregate: &WordAggregate) -> Result<Vec<RankedEntry>> {
    let mut entries = Vec::with_capacity(aggregate.len());

    for (word, signal) in aggregate.iter() {
        if word.is_empty() {
            return Err(WordTallyError::ranking_anomaly(
                "aggregate contains an empty word",
            ));
        }
        if signal.is_rankable()
            && let Some(count) = signal.count()
        {
            entries.push(RankedEntry::new(word, count));
        }
    }

    entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    Ok(entries)
}

/// Rank an aggregate.
///
/// Never fails: an anomaly is logged and yields an empty ranking.
///
/// ```
/// use wordtally::frequency::{RankedEntry, WordAggregate, rank};
///
/// let aggregate = WordAggregate::from_raw(vec![("test", 20), ("flagged", -1), ("file", 1)]);
/// assert_eq!(
///     rank(&aggregate),
///     vec![RankedEntry::new("test", 20), RankedEntry::new("file", 1)]
/// );
/// ```
pub fn rank(aggregate: &WordAggregate) -> Vec<RankedEntry> {
    match try_rank(aggregate) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("{e}; returning an empty ranking");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[RankedEntry]) -> Vec<(&str, u64)> {
        entries.iter().map(RankedEntry::as_pair).collect()
    }

    #[test]
    fn test_keeps_positive_counts() {
        let aggregate = WordAggregate::from_raw(vec![("test", 20), ("file", 1)]);
        assert_eq!(pairs(&rank(&aggregate)), vec![("test", 20), ("file", 1)]);
    }

    #[test]
    fn test_filters_suppressed_words() {
        let aggregate = WordAggregate::from_raw(vec![("test", 20), ("flagged", -1), ("file", 1)]);
        assert_eq!(pairs(&rank(&aggregate)), vec![("test", 20), ("file", 1)]);
    }

    #[test]
    fn test_filters_zero_counts() {
        let aggregate = WordAggregate::from_raw(vec![("zero", 0), ("one", 1)]);
        assert_eq!(pairs(&rank(&aggregate)), vec![("one", 1)]);
    }

    #[test]
    fn test_ranks_exactly_the_rankable_signals() {
        let aggregate = WordAggregate::from_raw(vec![("a", -3), ("b", 0), ("c", 2), ("d", 1)]);
        let rankable = aggregate.iter().filter(|(_, s)| s.is_rankable()).count();

        let ranked = rank(&aggregate);
        assert_eq!(ranked.len(), rankable);
        assert_eq!(pairs(&ranked), vec![("c", 2), ("d", 1)]);
    }

    #[test]
    fn test_sorted_largest_first() {
        let aggregate = WordAggregate::from_raw(vec![("test", 2), ("file", 10)]);
        assert_eq!(pairs(&rank(&aggregate)), vec![("file", 10), ("test", 2)]);
    }

    #[test]
    fn test_ties_broken_alphabetically() {
        let aggregate = WordAggregate::from_raw(vec![
            ("pear", 2),
            ("apple", 2),
            ("zebra", 5),
            ("mango", 2),
            ("kiwi", 1),
        ]);
        assert_eq!(
            pairs(&rank(&aggregate)),
            vec![
                ("zebra", 5),
                ("apple", 2),
                ("mango", 2),
                ("pear", 2),
                ("kiwi", 1),
            ]
        );
    }

    #[test]
    fn test_ranking_is_repeatable() {
        let aggregate =
            WordAggregate::from_raw((0..200).map(|i| (format!("w{}", i % 37), (i % 5) as i64)));
        assert_eq!(rank(&aggregate), rank(&aggregate));
    }

    #[test]
    fn test_empty_word_is_an_anomaly() {
        let aggregate = WordAggregate::from_raw(vec![("", 3), ("fine", 1)]);

        assert!(matches!(
            try_rank(&aggregate),
            Err(WordTallyError::RankingAnomaly(_))
        ));
        assert!(rank(&aggregate).is_empty());
    }

    #[test]
    fn test_entry_conversions() {
        let entry = RankedEntry::from(("fox", 3));
        assert_eq!(entry, RankedEntry::new("fox", 3));
        assert_eq!(entry.to_string(), "fox: 3");
    }
}
