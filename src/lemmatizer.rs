//! Closest-word lemmatization on top of the fuzzy search.
//!
//! A [`Lemmatizer`] owns a [`Trie`](crate::trie::Trie) and an
//! [`AlternativeTable`](crate::alternatives::AlternativeTable). For a query it
//! collects fuzzy search candidates, scores each one against the query with an
//! edit distance and returns the closest, breaking ties by the
//! lexicographically smallest candidate.

pub mod builder;
pub mod config;
pub mod lemmatizer;
pub mod shared;

// Re-export commonly used types
pub use builder::*;
pub use config::*;
pub use lemmatizer::*;
pub use shared::*;
