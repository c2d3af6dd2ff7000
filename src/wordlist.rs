//! Word lists: reading the dictionary file and producing it from raw sources.

pub mod builder;
pub mod reader;

// Re-export commonly used types
pub use builder::*;
pub use reader::*;
