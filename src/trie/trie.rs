//! The prefix tree and its exact-match operations.

use crate::error::{LexitrieError, Result};
use crate::trie::node::{Node, NodeId};
use crate::trie::normalize::CaseNormalization;

/// A prefix tree mapping words to payloads.
///
/// Built once by repeated [`insert`](Trie::insert) and read-only afterwards.
/// Reinserting a word replaces its payload (last write wins); the replaced
/// payload is handed back to the caller.
#[derive(Debug, Clone)]
pub struct Trie<P> {
    nodes: Vec<Node<P>>,
    normalization: CaseNormalization,
    len: usize,
}

impl<P> Trie<P> {
    /// Create an empty trie with lowercase normalization.
    pub fn new() -> Self {
        Self::with_normalization(CaseNormalization::default())
    }

    /// Create an empty trie with the given normalization.
    pub fn with_normalization(normalization: CaseNormalization) -> Self {
        Trie {
            nodes: vec![Node::root()],
            normalization,
            len: 0,
        }
    }

    /// Build a trie from `(word, payload)` pairs in iteration order.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, P)>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for (word, payload) in pairs {
            trie.insert(word.as_ref(), payload)?;
        }
        Ok(trie)
    }

    pub fn normalization(&self) -> CaseNormalization {
        self.normalization
    }

    /// Apply this trie's normalization to a word.
    pub fn normalize(&self, word: &str) -> String {
        self.normalization.normalize(word)
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Access a node by handle.
    ///
    /// Handles are only produced by this trie, so they are always in bounds.
    pub fn node(&self, id: NodeId) -> &Node<P> {
        &self.nodes[id.0]
    }

    /// Insert a word, returning the payload it previously carried, if any.
    pub fn insert(&mut self, word: &str, payload: P) -> Result<Option<P>> {
        let normalized = self.normalize(word);
        if normalized.is_empty() {
            return Err(LexitrieError::invalid_argument(
                "cannot insert an empty word",
            ));
        }

        let mut current = NodeId::ROOT;
        for ch in normalized.chars() {
            current = match self.nodes[current.0].child(ch) {
                Some(child) => child,
                None => {
                    let child = NodeId(self.nodes.len());
                    self.nodes.push(Node::new(ch));
                    self.nodes[current.0].add_child(ch, child);
                    child
                }
            };
        }

        let previous = self.nodes[current.0].set_payload(payload);
        if previous.is_none() {
            self.len += 1;
        }
        Ok(previous)
    }

    /// Check whether a word is stored.
    ///
    /// An absent word is an error; the empty word is never stored.
    pub fn exists<'a>(&self, word: impl Into<Option<&'a str>>) -> Result<bool> {
        let word = word
            .into()
            .ok_or_else(|| LexitrieError::invalid_argument("word should not be absent"))?;
        Ok(self.contains(word))
    }

    /// Infallible form of [`exists`](Trie::exists).
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.get(word).is_some()
    }

    /// Return the payload of a stored word.
    pub fn lookup<'a>(&self, word: impl Into<Option<&'a str>>) -> Result<&P> {
        let word = word
            .into()
            .ok_or_else(|| LexitrieError::invalid_argument("word should not be absent"))?;
        if word.is_empty() {
            return Err(LexitrieError::not_found("empty word"));
        }
        self.get(word)
            .ok_or_else(|| LexitrieError::not_found(format!("'{word}' not found in trie")))
    }

    /// Return the payload of a stored word, if any.
    pub fn get(&self, word: &str) -> Option<&P> {
        let normalized = self.normalize(word);
        self.payload_at(&normalized)
    }

    /// Payload at the node reached by following `path` verbatim.
    ///
    /// `path` must already be normalized; fuzzy search results are.
    pub fn payload_at(&self, path: &str) -> Option<&P> {
        self.find_node(path)
            .and_then(|id| self.nodes[id.0].payload())
    }

    /// Node reached by following `path` verbatim from the root.
    pub fn find_node(&self, path: &str) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for ch in path.chars() {
            current = self.nodes[current.0].child(ch)?;
        }
        Some(current)
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All stored words with their payloads, in lexicographic order.
    pub fn words(&self) -> Vec<(String, &P)> {
        let mut words = Vec::with_capacity(self.len);
        self.collect_words(NodeId::ROOT, String::new(), &mut words);
        words
    }

    /// Stored words starting with `prefix`, in lexicographic order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<(String, &P)> {
        let normalized = self.normalize(prefix);
        let mut words = Vec::new();
        if let Some(start) = self.find_node(&normalized) {
            self.collect_words(start, normalized, &mut words);
        }
        words
    }

    fn collect_words<'a>(&'a self, start: NodeId, prefix: String, out: &mut Vec<(String, &'a P)>) {
        // Push in descending label order so words pop out ascending.
        let mut stack = vec![(start, prefix)];
        while let Some((id, path)) = stack.pop() {
            let node = &self.nodes[id.0];
            if let Some(payload) = node.payload() {
                out.push((path.clone(), payload));
            }
            for (ch, child) in node.sorted_children().into_iter().rev() {
                let mut child_path = path.clone();
                child_path.push(ch);
                stack.push((child, child_path));
            }
        }
    }
}

impl<P> Default for Trie<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie<usize> {
        Trie::from_pairs(vec![("kitap", 0), ("kitaplık", 1), ("sakız", 2), ("gel", 3)]).unwrap()
    }

    #[test]
    fn test_insert_and_lookup() {
        let trie = sample();

        assert_eq!(trie.len(), 4);
        assert_eq!(*trie.lookup("kitap").unwrap(), 0);
        assert_eq!(*trie.lookup("kitaplık").unwrap(), 1);
        assert_eq!(*trie.lookup("sakız").unwrap(), 2);
        assert_eq!(*trie.lookup("gel").unwrap(), 3);
    }

    #[test]
    fn test_exists() {
        let trie = sample();

        assert!(trie.exists("gel").unwrap());
        assert!(!trie.exists("gelmek").unwrap());
        assert!(!trie.exists("ge").unwrap());
        assert!(!trie.exists("").unwrap());
        assert!(matches!(
            trie.exists(None),
            Err(LexitrieError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_lookup_missing_word() {
        let trie = sample();

        assert!(matches!(trie.lookup("kita"), Err(LexitrieError::NotFound(_))));
        assert!(matches!(trie.lookup(""), Err(LexitrieError::NotFound(_))));
        assert!(matches!(
            trie.lookup(None),
            Err(LexitrieError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_reinsert_overwrites_payload() {
        let mut trie = sample();

        assert_eq!(trie.insert("gel", 42).unwrap(), Some(3));
        assert_eq!(*trie.lookup("gel").unwrap(), 42);
        assert_eq!(trie.len(), 4);
    }

    #[test]
    fn test_insert_empty_word() {
        let mut trie: Trie<usize> = Trie::new();
        assert!(matches!(
            trie.insert("", 0),
            Err(LexitrieError::InvalidArgument(_))
        ));
        assert!(trie.is_empty());
    }

    #[test]
    fn test_shared_prefixes_share_nodes() {
        let trie = sample();

        // root + "kitap" (5) + "lık" (3) + "sakız" (5) + "gel" (3)
        assert_eq!(trie.node_count(), 17);
    }

    #[test]
    fn test_normalized_on_insert_and_lookup() {
        let mut trie: Trie<usize> = Trie::with_normalization(CaseNormalization::Turkish);
        trie.insert("IRMAK", 1).unwrap();

        assert!(trie.contains("ırmak"));
        assert!(trie.contains("Irmak"));
        assert!(!trie.contains("irmak"));
    }

    #[test]
    fn test_words_in_order() {
        let trie = sample();
        let words: Vec<String> = trie.words().into_iter().map(|(w, _)| w).collect();

        assert_eq!(words, vec!["gel", "kitap", "kitaplık", "sakız"]);
    }

    #[test]
    fn test_words_with_prefix() {
        let trie = sample();

        let kit: Vec<String> = trie
            .words_with_prefix("kit")
            .into_iter()
            .map(|(w, _)| w)
            .collect();
        assert_eq!(kit, vec!["kitap", "kitaplık"]);
        assert!(trie.words_with_prefix("x").is_empty());
    }

    #[test]
    fn test_insertion_order_irrelevant() {
        let pairs = vec![("kitaplık", 1), ("gel", 3), ("kitap", 0), ("sakız", 2)];
        let trie = Trie::from_pairs(pairs.clone()).unwrap();

        for (word, payload) in pairs {
            assert!(trie.exists(word).unwrap());
            assert_eq!(*trie.lookup(word).unwrap(), payload);
        }
    }
}
