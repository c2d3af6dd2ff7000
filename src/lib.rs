//! # lexitrie
//!
//! Closest-word lookup over a word list.
//!
//! Words are stored in a prefix tree. A misspelled or inflected query is
//! walked through the tree with per-character substitutions from an
//! [`AlternativeTable`](alternatives::AlternativeTable) and skips over extra
//! letters. The reachable paths are then ranked by edit distance to the
//! query.
//!
//! ```no_run
//! use lexitrie::prelude::*;
//!
//! let lemmatizer = Lemmatizer::from_word_list("words.txt")?;
//! let lemma = lemmatizer.lemmatize("sakiz")?;
//! println!("{} at distance {}", lemma.word, lemma.distance);
//! # Ok::<(), LexitrieError>(())
//! ```

pub mod alternatives;
pub mod cli;
pub mod distance;
pub mod error;
pub mod fuzzy;
pub mod lemmatizer;
pub mod trie;
pub mod wordlist;

pub mod prelude {
    pub use crate::alternatives::AlternativeTable;
    pub use crate::distance::{DistanceMatcher, DistanceMetric, levenshtein_distance};
    pub use crate::error::{LexitrieError, Result};
    pub use crate::fuzzy::{FuzzySearch, SearchConfig};
    pub use crate::lemmatizer::{Lemma, Lemmatizer, LemmatizerBuilder, LemmatizerConfig, SharedLemmatizer};
    pub use crate::trie::{CaseNormalization, Trie};
    pub use crate::wordlist::{ColumnPolicy, WordListBuilder, read_word_list};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
