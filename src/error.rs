//! Error types for the lexitrie library.
//!
//! All fallible operations return [`LexitrieError`] through the crate-wide
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use lexitrie::error::{LexitrieError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexitrieError::invalid_argument("word should not be absent"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexitrie operations.
#[derive(Error, Debug)]
pub enum LexitrieError {
    /// A required word or query was absent, or an argument was malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Exact lookup of a word that is not stored.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The alternative table or a configuration value cannot serve the request.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The fuzzy search exceeded its configured budget.
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// The fuzzy search produced no candidate.
    #[error("No match: {0}")]
    NoMatch(String),

    /// I/O errors (word lists, configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tokenizer pattern errors
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for operations that may fail with LexitrieError.
pub type Result<T> = std::result::Result<T, LexitrieError>;

impl LexitrieError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexitrieError::InvalidArgument(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        LexitrieError::NotFound(msg.into())
    }

    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        LexitrieError::Configuration(msg.into())
    }

    /// Create a new resource exhausted error.
    pub fn resource_exhausted<S: Into<String>>(msg: S) -> Self {
        LexitrieError::ResourceExhausted(msg.into())
    }

    /// Create a new no match error.
    pub fn no_match<S: Into<String>>(msg: S) -> Self {
        LexitrieError::NoMatch(msg.into())
    }

    /// Whether this error means "nothing close enough was found".
    pub fn is_no_match(&self) -> bool {
        matches!(self, LexitrieError::NoMatch(_))
    }

    /// Whether this error means "the word is not stored".
    pub fn is_not_found(&self) -> bool {
        matches!(self, LexitrieError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexitrieError::invalid_argument("word should not be absent");
        assert_eq!(
            error.to_string(),
            "Invalid argument: word should not be absent"
        );

        let error = LexitrieError::not_found("gelmek");
        assert_eq!(error.to_string(), "Not found: gelmek");
        assert!(error.is_not_found());

        let error = LexitrieError::no_match("empty query");
        assert!(error.is_no_match());
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LexitrieError::from(io_error);

        match error {
            LexitrieError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
