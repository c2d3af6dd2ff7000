//! Case normalization shared by insertion and every kind of lookup.
//!
//! Stored words and queries must go through the same normalization, or exact
//! lookups miss and fuzzy paths diverge from the stored forms.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LexitrieError, Result};

/// How words are folded before they touch the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseNormalization {
    /// Unicode lowercase, except that `İ` folds to a plain `i` instead of
    /// `i` followed by a combining dot above.
    #[default]
    Lowercase,
    /// Turkish casing: `I` folds to `ı` and `İ` folds to `i`.
    Turkish,
    /// Store and compare verbatim.
    None,
}

impl CaseNormalization {
    /// Normalize a word.
    pub fn normalize(&self, word: &str) -> String {
        match self {
            CaseNormalization::Lowercase => fold(word, 'i'),
            CaseNormalization::Turkish => fold(word, 'ı'),
            CaseNormalization::None => word.to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CaseNormalization::Lowercase => "lowercase",
            CaseNormalization::Turkish => "turkish",
            CaseNormalization::None => "none",
        }
    }
}

/// Lowercase `word`, mapping `I` to `capital_i` and `İ` to `i`.
fn fold(word: &str, capital_i: char) -> String {
    let mut normalized = String::with_capacity(word.len());
    for ch in word.chars() {
        match ch {
            'I' => normalized.push(capital_i),
            'İ' => normalized.push('i'),
            _ => normalized.extend(ch.to_lowercase()),
        }
    }
    normalized
}

impl FromStr for CaseNormalization {
    type Err = LexitrieError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lowercase" => Ok(CaseNormalization::Lowercase),
            "turkish" => Ok(CaseNormalization::Turkish),
            "none" => Ok(CaseNormalization::None),
            other => Err(LexitrieError::invalid_argument(format!(
                "unknown normalization '{other}' (expected lowercase, turkish or none)"
            ))),
        }
    }
}
