//! Per-word state stored in the aggregate.

use serde::{Deserialize, Serialize};

/// Raw value marking a suppressed word in exported maps.
pub const SUPPRESSED_SENTINEL: i64 = -1;

/// The state of one word in a [`WordAggregate`](super::WordAggregate).
///
/// A word with no entry has not been seen by either stage yet.
///
/// Serialized as a plain integer: `-1` for suppressed words, the count
/// otherwise.
///
/// ```
/// use wordtally::frequency::WordSignal;
///
/// assert_eq!(WordSignal::from_raw(-1), WordSignal::Suppressed);
/// assert_eq!(WordSignal::from_raw(3), WordSignal::Count(3));
/// assert_eq!(WordSignal::Count(3).incremented(), WordSignal::Count(4));
/// assert_eq!(WordSignal::Suppressed.incremented(), WordSignal::Suppressed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum WordSignal {
    /// Never counted, whatever the number of occurrences.
    Suppressed,
    /// Number of occurrences in the counted document.
    Count(u64),
}

impl WordSignal {
    /// Interpret a raw integer. Any negative value means suppressed.
    pub fn from_raw(raw: i64) -> Self {
        if raw < 0 {
            WordSignal::Suppressed
        } else {
            WordSignal::Count(raw as u64)
        }
    }

    /// The raw integer form.
    pub fn to_raw(self) -> i64 {
        match self {
            WordSignal::Suppressed => SUPPRESSED_SENTINEL,
            WordSignal::Count(n) => i64::try_from(n).unwrap_or(i64::MAX),
        }
    }

    /// Whether the word is suppressed.
    pub fn is_suppressed(self) -> bool {
        matches!(self, WordSignal::Suppressed)
    }

    /// The occurrence count, or `None` for a suppressed word.
    pub fn count(self) -> Option<u64> {
        match self {
            WordSignal::Suppressed => None,
            WordSignal::Count(n) => Some(n),
        }
    }

    /// Whether the word may appear in a ranking (strictly positive count).
    pub fn is_rankable(self) -> bool {
        matches!(self, WordSignal::Count(n) if n > 0)
    }

    /// The state after one more occurrence. Suppression is sticky.
    pub fn incremented(self) -> Self {
        match self {
            WordSignal::Suppressed => WordSignal::Suppressed,
            WordSignal::Count(n) => WordSignal::Count(n.saturating_add(1)),
        }
    }
}

impl From<i64> for WordSignal {
    fn from(raw: i64) -> Self {
        WordSignal::from_raw(raw)
    }
}

impl From<WordSignal> for i64 {
    fn from(signal: WordSignal) -> Self {
        signal.to_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_conversion() {
        assert_eq!(WordSignal::from_raw(-1), WordSignal::Suppressed);
        assert_eq!(WordSignal::from_raw(-7), WordSignal::Suppressed);
        assert_eq!(WordSignal::from_raw(0), WordSignal::Count(0));
        assert_eq!(WordSignal::from_raw(20), WordSignal::Count(20));

        assert_eq!(WordSignal::Suppressed.to_raw(), SUPPRESSED_SENTINEL);
        assert_eq!(WordSignal::Count(20).to_raw(), 20);
        assert_eq!(WordSignal::Count(u64::MAX).to_raw(), i64::MAX);
    }

    #[test]
    fn test_rankable() {
        assert!(WordSignal::Count(1).is_rankable());
        assert!(!WordSignal::Count(0).is_rankable());
        assert!(!WordSignal::Suppressed.is_rankable());
    }

    #[test]
    fn test_suppression_is_sticky() {
        let mut signal = WordSignal::Suppressed;
        for _ in 0..5 {
            signal = signal.incremented();
        }
        assert!(signal.is_suppressed());
        assert_eq!(signal.count(), None);
    }

    #[test]
    fn test_serializes_as_integer() {
        let signals = vec![WordSignal::Count(2), WordSignal::Suppressed];
        let json = serde_json::to_string(&signals).unwrap();
        assert_eq!(json, "[2,-1]");

        let back: Vec<WordSignal> = serde_json::from_str("[-1,5]").unwrap();
        assert_eq!(back, vec![WordSignal::Suppressed, WordSignal::Count(5)]);
    }
}
