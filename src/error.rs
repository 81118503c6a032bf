//! Error types for the wordtally library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`WordTallyError`] enum. A document that cannot be read or decoded is a
//! [`WordTallyError::Read`] and ends the analysis run; ranking anomalies
//! never reach callers of [`rank`](crate::frequency::ranking::rank).
//!
//! # Examples
//!
//! ```
//! use wordtally::error::{Result, WordTallyError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordTallyError::read("stream closed"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => assert!(e.is_read_error()),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wordtally operations.
#[derive(Error, Debug)]
pub enum WordTallyError {
    /// I/O errors outside document reads, such as writing output
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document could not be turned into text (missing file, bad encoding)
    #[error("Read error: {0}")]
    Read(String),

    /// Analysis-related errors (tokenizer patterns, filters)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Unexpected aggregate state met while ranking
    #[error("Ranking anomaly: {0}")]
    RankingAnomaly(String),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Errors carrying free-form context, such as a malformed configuration file
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WordTallyError.
pub type Result<T> = std::result::Result<T, WordTallyError>;

impl WordTallyError {
    /// Create a new read error.
    pub fn read<S: Into<String>>(msg: S) -> Self {
        WordTallyError::Read(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WordTallyError::Analysis(msg.into())
    }

    /// Create a new ranking anomaly.
    pub fn ranking_anomaly<S: Into<String>>(msg: S) -> Self {
        WordTallyError::RankingAnomaly(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WordTallyError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordTallyError::Other(msg.into())
    }

    /// Whether this error means the underlying document could not be read.
    pub fn is_read_error(&self) -> bool {
        matches!(self, WordTallyError::Read(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = WordTallyError::read("bad bytes");
        assert_eq!(error.to_string(), "Read error: bad bytes");

        let error = WordTallyError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = WordTallyError::ranking_anomaly("empty key");
        assert_eq!(error.to_string(), "Ranking anomaly: empty key");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = WordTallyError::from(io_error);

        match error {
            WordTallyError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_context_errors() {
        let error: WordTallyError = anyhow::anyhow!("invalid configuration a.json").into();
        assert_eq!(error.to_string(), "Anyhow error: invalid configuration a.json");

        let error = WordTallyError::invalid_argument("page 0");
        assert_eq!(error.to_string(), "Error: Invalid argument: page 0");
    }

    #[test]
    fn test_read_error_classification() {
        assert!(WordTallyError::read("x").is_read_error());
        // Output failures surface as `Io` and are not document reads.
        assert!(!WordTallyError::from(io::Error::other("broken pipe")).is_read_error());
        assert!(!WordTallyError::analysis("x").is_read_error());
        assert!(!WordTallyError::ranking_anomaly("x").is_read_error());
    }
}
