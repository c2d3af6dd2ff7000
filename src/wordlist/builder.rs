//! Building a deduplicated word list from raw dictionary sources.
//!
//! Sources are line-oriented text files. Depending on the source, the word of
//! interest is the first or the second `\w+` token of each line (frequency
//! lists put a rank or count first), or every token on the line. Numeric
//! tokens are dropped, words are normalized, and the result is sorted.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::info;
use regex::Regex;

use crate::error::Result;
use crate::trie::CaseNormalization;

/// Which tokens of a source line are taken as words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPolicy {
    /// The first token of each line.
    First,
    /// The second token of each line.
    Second,
    /// Every token of each line.
    All,
}

/// Accumulates unique words from several sources.
#[derive(Debug, Clone)]
pub struct WordListBuilder {
    token: Regex,
    normalization: CaseNormalization,
    words: BTreeSet<String>,
}

impl WordListBuilder {
    pub fn new() -> Result<Self> {
        Ok(WordListBuilder {
            token: Regex::new(r"\w+")?,
            normalization: CaseNormalization::default(),
            words: BTreeSet::new(),
        })
    }

    pub fn normalization(mut self, normalization: CaseNormalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Add the words of one line, returning how many were new.
    pub fn add_line(&mut self, line: &str, policy: ColumnPolicy) -> usize {
        let mut tokens = self.token.find_iter(line).map(|m| m.as_str());
        let selected: Vec<&str> = match policy {
            ColumnPolicy::First => tokens.next().into_iter().collect(),
            ColumnPolicy::Second => tokens.nth(1).into_iter().collect(),
            ColumnPolicy::All => tokens.collect(),
        };

        let mut added = 0;
        for token in selected {
            if token.chars().all(char::is_numeric) {
                continue;
            }
            if self.words.insert(self.normalization.normalize(token)) {
                added += 1;
            }
        }
        added
    }

    /// Add every line of a reader, returning the number of unique words the
    /// source contributed on its own.
    pub fn add_reader<R: BufRead>(&mut self, reader: R, policy: ColumnPolicy) -> Result<usize> {
        let mut source = WordListBuilder {
            token: self.token.clone(),
            normalization: self.normalization,
            words: BTreeSet::new(),
        };
        for line in reader.lines() {
            source.add_line(&line?, policy);
        }

        let found = source.words.len();
        self.words.extend(source.words);
        Ok(found)
    }

    /// Add a source file.
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P, policy: ColumnPolicy) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let found = self.add_reader(BufReader::new(file), policy)?;
        info!("found {} unique words in {}", found, path.display());
        Ok(found)
    }

    /// Number of unique words so far.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sorted unique words.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Write the words one per line.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = BufWriter::new(writer);
        for word in &self.words {
            writeln!(writer, "{word}")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the words to a file, one per line.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.write_to(File::create(path)?)?;
        info!("wrote {} unique words to {}", self.len(), path.display());
        Ok(())
    }

    /// Consume the builder, returning the sorted words.
    pub fn build(self) -> Vec<String> {
        self.words.into_iter().collect()
    }
}
