//! The lemmatizer: fuzzy search followed by distance ranking.

use std::collections::BTreeSet;
use std::path::Path;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::alternatives::AlternativeTable;
use crate::distance::DistanceMatcher;
use crate::error::{LexitrieError, Result};
use crate::fuzzy::FuzzySearch;
use crate::lemmatizer::builder::LemmatizerBuilder;
use crate::lemmatizer::config::LemmatizerConfig;
use crate::trie::Trie;
use crate::wordlist::read_word_list;

/// A ranked candidate for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lemma<P> {
    /// The trie path, normalized.
    pub word: String,
    /// Distance from the normalized query.
    pub distance: usize,
    /// Payload when the path is a stored word.
    pub payload: Option<P>,
}

impl<P> Lemma<P> {
    /// Whether the candidate is a stored word rather than a bare prefix.
    pub fn is_word(&self) -> bool {
        self.payload.is_some()
    }
}

/// Finds the closest stored form of a possibly misspelled word.
#[derive(Debug, Clone)]
pub struct Lemmatizer<P> {
    trie: Trie<P>,
    alternatives: AlternativeTable,
    config: LemmatizerConfig,
}

impl<P> Lemmatizer<P> {
    /// Assemble a lemmatizer from an already built trie.
    pub fn new(trie: Trie<P>, alternatives: AlternativeTable, config: LemmatizerConfig) -> Self {
        Lemmatizer {
            trie,
            alternatives,
            config,
        }
    }

    /// Start building a lemmatizer from word/payload pairs.
    pub fn builder() -> LemmatizerBuilder<P> {
        LemmatizerBuilder::new()
    }

    pub fn trie(&self) -> &Trie<P> {
        &self.trie
    }

    pub fn alternatives(&self) -> &AlternativeTable {
        &self.alternatives
    }

    pub fn config(&self) -> &LemmatizerConfig {
        &self.config
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: LemmatizerConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Insert a word after construction, returning the replaced payload.
    ///
    /// Needs exclusive access; see
    /// [`SharedLemmatizer`](crate::lemmatizer::SharedLemmatizer) for the
    /// shared form.
    pub fn insert(&mut self, word: &str, payload: P) -> Result<Option<P>> {
        self.trie.insert(word, payload)
    }

    /// See [`Trie::exists`].
    pub fn exists<'a>(&self, word: impl Into<Option<&'a str>>) -> Result<bool> {
        self.trie.exists(word)
    }

    /// See [`Trie::lookup`].
    pub fn lookup<'a>(&self, word: impl Into<Option<&'a str>>) -> Result<&P> {
        self.trie.lookup(word)
    }

    /// Raw fuzzy search paths for a query, after normalization.
    pub fn search<'a>(&self, query: impl Into<Option<&'a str>>) -> Result<BTreeSet<String>> {
        let query = query
            .into()
            .ok_or_else(|| LexitrieError::invalid_argument("query should not be absent"))?;
        let normalized = self.trie.normalize(query);
        FuzzySearch::new(&self.trie, &self.alternatives, &self.config.search).search(&normalized)
    }

    /// All non-empty candidates for a query, ranked by distance then word.
    ///
    /// At most `max_candidates` entries are returned.
    pub fn candidates<'a>(&self, query: impl Into<Option<&'a str>>) -> Result<Vec<Lemma<P>>>
    where
        P: Clone,
    {
        let mut ranked = self.rank(query)?;
        ranked.truncate(self.config.max_candidates);
        Ok(ranked)
    }

    /// The closest candidate for a query.
    ///
    /// Fails with `NoMatch` for an empty query, an empty trie, or a query
    /// whose search reaches no character of the trie.
    pub fn lemmatize<'a>(&self, query: impl Into<Option<&'a str>>) -> Result<Lemma<P>>
    where
        P: Clone,
    {
        let mut ranked = self.rank(query)?;
        // `rank` never returns an empty list.
        Ok(ranked.swap_remove(0))
    }

    /// Lemmatize many queries in parallel. Results follow the input order.
    pub fn lemmatize_batch<S>(&self, queries: &[S]) -> Vec<Result<Lemma<P>>>
    where
        S: AsRef<str> + Sync,
        P: Clone + Send + Sync,
    {
        queries
            .par_iter()
            .map(|query| self.lemmatize(query.as_ref()))
            .collect()
    }

    fn rank<'a>(&self, query: impl Into<Option<&'a str>>) -> Result<Vec<Lemma<P>>>
    where
        P: Clone,
    {
        let query = query
            .into()
            .ok_or_else(|| LexitrieError::invalid_argument("query should not be absent"))?;
        let normalized = self.trie.normalize(query);

        if normalized.is_empty() {
            return Err(LexitrieError::no_match("empty query"));
        }
        if self.trie.is_empty() {
            return Err(LexitrieError::no_match("the dictionary is empty"));
        }

        let paths =
            FuzzySearch::new(&self.trie, &self.alternatives, &self.config.search).search(&normalized)?;

        let matcher = DistanceMatcher::new(normalized.as_str(), self.config.metric);
        let mut ranked: Vec<Lemma<P>> = paths
            .into_iter()
            .filter(|path| !path.is_empty())
            .map(|path| Lemma {
                distance: matcher.distance(&path),
                payload: self.trie.payload_at(&path).cloned(),
                word: path,
            })
            .collect();

        if ranked.is_empty() {
            return Err(LexitrieError::no_match(format!(
                "no candidate found for '{query}'"
            )));
        }

        ranked.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.word.cmp(&b.word)));

        debug!(
            "lemmatize '{}': {} candidates, best '{}' at distance {}",
            query,
            ranked.len(),
            ranked[0].word,
            ranked[0].distance
        );

        Ok(ranked)
    }
}

impl Lemmatizer<usize> {
    /// Build from a word-per-line file with the default Turkish table. Each
    /// word's payload is its zero-based line number.
    pub fn from_word_list<Q: AsRef<Path>>(path: Q) -> Result<Self> {
        Lemmatizer::builder().words(read_word_list(path)?).build()
    }
}

impl Lemmatizer<String> {
    /// Build from bare words with the default Turkish table. Each word is
    /// its own payload.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Lemmatizer::builder()
            .words(
                words
                    .into_iter()
                    .map(|word| (word.as_ref().to_string(), word.as_ref().to_string())),
            )
            .build()
    }
}
