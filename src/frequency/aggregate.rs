//! The word → signal map shared by the two stages of a run.

use std::collections::BTreeMap;

use ahash::AHashMap;

use super::signal::WordSignal;

/// Lowercase a word unless it already is.
fn normalize(word: &str) -> String {
    if word.chars().any(char::is_uppercase) {
        word.to_lowercase()
    } else {
        word.to_string()
    }
}

/// Mapping from normalized word to its [`WordSignal`].
///
/// Keys are lowercase, so `"The"` and `"the"` share one entry. Once a word
/// is suppressed it stays suppressed; counts only grow.
///
/// ```
/// use wordtally::frequency::{WordAggregate, WordSignal};
///
/// let mut aggregate = WordAggregate::new();
/// aggregate.suppress("The");
/// aggregate.record("the");
/// aggregate.record("Fox");
/// aggregate.record("fox");
///
/// assert_eq!(aggregate.get("THE"), Some(WordSignal::Suppressed));
/// assert_eq!(aggregate.get("fox"), Some(WordSignal::Count(2)));
/// assert_eq!(aggregate.get("dog"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordAggregate {
    words: AHashMap<String, WordSignal>,
}

impl WordAggregate {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty aggregate with room for `capacity` words.
    pub fn with_capacity(capacity: usize) -> Self {
        WordAggregate {
            words: AHashMap::with_capacity(capacity),
        }
    }

    /// Build an aggregate from raw `(word, value)` pairs, where negative
    /// values mark suppressed words.
    ///
    /// Pairs whose words collide after lowercasing are merged: suppression
    /// wins, otherwise counts add up.
    pub fn from_raw<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        let mut aggregate = WordAggregate::new();
        for (word, raw) in entries {
            let key = normalize(word.as_ref());
            let incoming = WordSignal::from_raw(raw);
            let merged = match (aggregate.words.get(&key).copied(), incoming) {
                (None, signal) => signal,
                (Some(WordSignal::Suppressed), _) | (_, WordSignal::Suppressed) => {
                    WordSignal::Suppressed
                }
                (Some(WordSignal::Count(a)), WordSignal::Count(b)) => {
                    WordSignal::Count(a.saturating_add(b))
                }
            };
            aggregate.words.insert(key, merged);
        }
        aggregate
    }

    /// Export the aggregate as raw `(word, value)` pairs sorted by word.
    pub fn to_raw(&self) -> BTreeMap<String, i64> {
        self.words
            .iter()
            .map(|(word, signal)| (word.clone(), signal.to_raw()))
            .collect()
    }

    /// Mark a word as suppressed, overwriting any count.
    ///
    /// Returns `true` if the word was not suppressed before.
    pub fn suppress(&mut self, word: &str) -> bool {
        let previous = self.words.insert(normalize(word), WordSignal::Suppressed);
        !matches!(previous, Some(WordSignal::Suppressed))
    }

    /// Record one occurrence of a word and return its new state.
    ///
    /// Suppressed words are left untouched.
    pub fn record(&mut self, word: &str) -> WordSignal {
        let signal = self
            .words
            .entry(normalize(word))
            .and_modify(|signal| *signal = signal.incremented())
            .or_insert(WordSignal::Count(1));
        *signal
    }

    /// The state of a word, if it has been seen.
    pub fn get(&self, word: &str) -> Option<WordSignal> {
        match self.words.get(word) {
            Some(signal) => Some(*signal),
            None => self.words.get(&normalize(word)).copied(),
        }
    }

    /// Whether a word is suppressed.
    pub fn is_suppressed(&self, word: &str) -> bool {
        matches!(self.get(word), Some(WordSignal::Suppressed))
    }

    /// Number of words with an entry (suppressed or counted).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word has been seen.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of suppressed words.
    pub fn suppressed_len(&self) -> usize {
        self.words.values().filter(|s| s.is_suppressed()).count()
    }

    /// Iterate over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, WordSignal)> {
        self.words
            .iter()
            .map(|(word, signal)| (word.as_str(), *signal))
    }
}
