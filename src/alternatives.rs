//! Per-character substitution tables.
//!
//! An [`AlternativeTable`] maps every character that may appear in a query to
//! the set of characters the fuzzy search may try in its place. The relation
//! need not be symmetric. A character mapped to the empty set only matches
//! itself; a character that is not mapped at all is a configuration error.
//!
//! The built-in [`AlternativeTable::turkish`] table encodes common Turkish
//! orthographic variation: vowel narrowing (`a`/`e` surfacing as `ı`, `i`,
//! `u`, `ü`), consonant softening (`p`/`b`, `t`/`d`, `k`/`ğ`, `ç`/`c`),
//! circumflex vowels and ASCII keyboard substitutes (`s` for `ş`, `o` for `ö`).
//! It is a tunable default, not a contract.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LexitrieError, Result};

/// The Turkish alphabet.
pub const TURKISH_ALPHABET: &str = "abcçdefgğhıijklmnoöprsştuüvyz";

/// Mapping from a character to its substitutable characters.
///
/// Serialized as a JSON object from single-character keys to arrays, e.g.
/// `{"s": ["ş"], "ş": ["s"], "e": []}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlternativeTable {
    table: BTreeMap<char, BTreeSet<char>>,
}

impl AlternativeTable {
    /// Create an empty table. Every query character must be registered
    /// before searching.
    pub fn new() -> Self {
        AlternativeTable {
            table: BTreeMap::new(),
        }
    }

    /// A table where every character of `alphabet` matches only itself.
    pub fn identity<I: IntoIterator<Item = char>>(alphabet: I) -> Self {
        let mut table = AlternativeTable::new();
        for ch in alphabet {
            table.register(ch);
        }
        table
    }

    /// The default Turkish table.
    pub fn turkish() -> Self {
        let entries: [(char, &str); 35] = [
            ('a', "â"),
            ('â', "a"),
            ('b', "p"),
            ('c', "ç"),
            ('ç', "c"),
            ('d', "t"),
            ('e', ""),
            ('f', ""),
            ('g', "ğk"),
            ('ğ', "gk"),
            ('h', ""),
            ('ı', "iaeî"),
            ('i', "ıaeî"),
            ('î', "i"),
            ('j', "c"),
            ('k', "c"),
            ('l', ""),
            ('m', ""),
            ('n', ""),
            ('o', "ö"),
            ('ö', "o"),
            ('p', ""),
            ('q', "k"),
            ('r', ""),
            ('s', "ş"),
            ('ş', "s"),
            ('t', ""),
            ('u', "üaeû"),
            ('ü', "uaeû"),
            ('û', "u"),
            ('v', ""),
            ('w', "v"),
            ('x', ""),
            ('y', ""),
            ('z', ""),
        ];

        let mut table = AlternativeTable::new();
        for (ch, alternatives) in entries {
            table.set(ch, alternatives.chars());
        }
        table
    }

    /// Make sure `ch` is mapped, without adding alternatives.
    pub fn register(&mut self, ch: char) -> &mut Self {
        self.table.entry(ch).or_default();
        self
    }

    /// Allow `to` to be tried in place of `from`.
    pub fn allow(&mut self, from: char, to: char) -> &mut Self {
        if from != to {
            self.table.entry(from).or_default().insert(to);
        } else {
            self.register(from);
        }
        self
    }

    /// Replace the alternatives of `ch`.
    pub fn set<I: IntoIterator<Item = char>>(&mut self, ch: char, alternatives: I) -> &mut Self {
        let set: BTreeSet<char> = alternatives.into_iter().filter(|&alt| alt != ch).collect();
        self.table.insert(ch, set);
        self
    }

    /// Alternatives of `ch` (not including `ch` itself), if mapped.
    pub fn get(&self, ch: char) -> Option<&BTreeSet<char>> {
        self.table.get(&ch)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.table.contains_key(&ch)
    }

    /// Characters to try for `ch`: itself first, then its alternatives in
    /// ascending order.
    pub fn candidates(&self, ch: char) -> Result<Vec<char>> {
        let alternatives = self.get(ch).ok_or_else(|| {
            LexitrieError::configuration(format!("character '{ch}' has no entry in the alternative table"))
        })?;

        let mut candidates = Vec::with_capacity(alternatives.len() + 1);
        candidates.push(ch);
        candidates.extend(alternatives.iter().copied().filter(|&alt| alt != ch));
        Ok(candidates)
    }

    /// Mapped characters in ascending order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.table.keys().copied()
    }

    /// Largest alternative set, which bounds the search branching factor.
    pub fn max_alternatives(&self) -> usize {
        self.table.values().map(BTreeSet::len).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Load a table from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let mut table: AlternativeTable = serde_json::from_reader(BufReader::new(file))?;
        // Self-substitution is implicit.
        for (ch, alternatives) in table.table.iter_mut() {
            alternatives.remove(ch);
        }
        Ok(table)
    }

    /// Save the table to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

impl Default for AlternativeTable {
    fn default() -> Self {
        Self::turkish()
    }
}
