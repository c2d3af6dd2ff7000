//! Batch construction of a lemmatizer.

use log::{info, warn};

use crate::alternatives::AlternativeTable;
use crate::error::Result;
use crate::lemmatizer::config::LemmatizerConfig;
use crate::lemmatizer::lemmatizer::Lemmatizer;
use crate::trie::{CaseNormalization, Trie};

/// Collects words and settings, then builds the trie in one pass.
///
/// Words are inserted in the order they were added; a word added twice keeps
/// its last payload.
#[derive(Debug, Clone)]
pub struct LemmatizerBuilder<P> {
    alternatives: Option<AlternativeTable>,
    config: LemmatizerConfig,
    normalization: CaseNormalization,
    words: Vec<(String, P)>,
}

impl<P> LemmatizerBuilder<P> {
    pub fn new() -> Self {
        LemmatizerBuilder {
            alternatives: None,
            config: LemmatizerConfig::default(),
            normalization: CaseNormalization::default(),
            words: Vec::new(),
        }
    }

    /// Use a custom alternative table instead of the Turkish default.
    pub fn alternatives(mut self, alternatives: AlternativeTable) -> Self {
        self.alternatives = Some(alternatives);
        self
    }

    pub fn config(mut self, config: LemmatizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn normalization(mut self, normalization: CaseNormalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Add one word.
    pub fn word<S: Into<String>>(mut self, word: S, payload: P) -> Self {
        self.words.push((word.into(), payload));
        self
    }

    /// Add many words.
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = (S, P)>,
        S: Into<String>,
    {
        self.words
            .extend(words.into_iter().map(|(word, payload)| (word.into(), payload)));
        self
    }

    /// Build the trie and the lemmatizer.
    pub fn build(self) -> Result<Lemmatizer<P>> {
        self.config.validate()?;

        let mut trie = Trie::with_normalization(self.normalization);
        let mut skipped = 0;
        let mut replaced = 0;
        for (word, payload) in self.words {
            if word.trim().is_empty() {
                skipped += 1;
                continue;
            }
            if trie.insert(&word, payload)?.is_some() {
                replaced += 1;
            }
        }

        if skipped > 0 {
            warn!("skipped {skipped} empty words");
        }
        if replaced > 0 {
            warn!("{replaced} duplicate words overwrote an earlier payload");
        }
        info!(
            "built trie with {} words and {} nodes",
            trie.len(),
            trie.node_count()
        );

        Ok(Lemmatizer::new(
            trie,
            self.alternatives.unwrap_or_default(),
            self.config,
        ))
    }
}

impl<P> Default for LemmatizerBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}
