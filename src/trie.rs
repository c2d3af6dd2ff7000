//! Prefix tree over the vocabulary.
//!
//! Words are stored as root-to-node character paths in an arena of
//! [`Node`]s addressed by [`NodeId`] handles. A node carries a payload
//! exactly when an inserted word ends there.

pub mod node;
pub mod normalize;
pub mod trie;

// Re-export commonly used types
pub use node::*;
pub use normalize::*;
pub use trie::*;
