//! Alternative-aware fuzzy traversal of the trie.
//!
//! The search walks the trie while consuming the query, trying each query
//! character and its alternatives against the outgoing edges, and also
//! skipping the query character entirely to tolerate one extra letter at a
//! time. Missing letters in the query are not modeled.

pub mod config;
pub mod search;

// Re-export commonly used types
pub use config::*;
pub use search::*;
