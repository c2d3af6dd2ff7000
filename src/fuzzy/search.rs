//! The fuzzy traversal itself.

use std::collections::BTreeSet;
use std::time::Instant;

use ahash::AHashSet;
use log::debug;

use crate::alternatives::AlternativeTable;
use crate::error::{LexitrieError, Result};
use crate::fuzzy::config::SearchConfig;
use crate::trie::{NodeId, Trie};

/// How often (in expanded states) the wall clock is consulted.
const TIME_CHECK_INTERVAL: usize = 1024;

/// Counters collected during one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States taken off the frontier and expanded.
    pub states_expanded: usize,
    /// States skipped because the same (node, index) was already expanded.
    pub states_pruned: usize,
    /// States where neither the query character nor any alternative matched.
    pub dead_ends: usize,
}

/// Paths produced by a search, with its counters.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub paths: BTreeSet<String>,
    pub stats: SearchStats,
}

/// One pending state of the traversal.
struct Frame {
    index: usize,
    node: NodeId,
    path: String,
}

/// Fuzzy traversal over a [`Trie`] driven by an [`AlternativeTable`].
///
/// For a query `q` each state `(i, node, path)` is processed as follows:
///
/// 1. if `i == len(q)`, `path` is a result;
/// 2. for each of `q[i]` and its alternatives that labels a child edge,
///    continue with `(i + 1, child, path + c)`;
/// 3. always continue with `(i + 1, node, path)`, treating `q[i]` as an
///    extra letter;
/// 4. if no candidate matched in step 2, `path` is a result as well.
///
/// Results are trie paths and may be prefixes that carry no payload unless
/// [`SearchConfig::terminal_only`] is set.
pub struct FuzzySearch<'a, P> {
    trie: &'a Trie<P>,
    alternatives: &'a AlternativeTable,
    config: &'a SearchConfig,
}

impl<'a, P> FuzzySearch<'a, P> {
    pub fn new(
        trie: &'a Trie<P>,
        alternatives: &'a AlternativeTable,
        config: &'a SearchConfig,
    ) -> Self {
        FuzzySearch {
            trie,
            alternatives,
            config,
        }
    }

    /// Run the search for an already normalized query.
    pub fn search(&self, query: &str) -> Result<BTreeSet<String>> {
        Ok(self.search_with_stats(query)?.paths)
    }

    /// Run the search and report its counters.
    pub fn search_with_stats(&self, query: &str) -> Result<SearchOutcome> {
        let query_chars: Vec<char> = query.chars().collect();
        if query_chars.len() > self.config.max_query_len {
            return Err(LexitrieError::resource_exhausted(format!(
                "query of {} characters exceeds the limit of {}",
                query_chars.len(),
                self.config.max_query_len
            )));
        }

        // The skip branch reaches every query index, so an unmapped
        // character would fail the search sooner or later anyway.
        let candidates = query_chars
            .iter()
            .map(|&ch| self.alternatives.candidates(ch))
            .collect::<Result<Vec<Vec<char>>>>()?;

        let started = Instant::now();
        let budget = self.config.budget();

        let mut outcome = SearchOutcome::default();
        let mut visited: AHashSet<(NodeId, usize)> = AHashSet::new();
        let mut frontier = vec![Frame {
            index: 0,
            node: self.trie.root(),
            path: String::new(),
        }];

        while let Some(frame) = frontier.pop() {
            // A node determines its path, so (node, index) identifies the state.
            if self.config.memoize && !visited.insert((frame.node, frame.index)) {
                outcome.stats.states_pruned += 1;
                continue;
            }

            outcome.stats.states_expanded += 1;
            if outcome.stats.states_expanded > self.config.max_states {
                return Err(LexitrieError::resource_exhausted(format!(
                    "fuzzy search for '{query}' exceeded {} states",
                    self.config.max_states
                )));
            }
            if let Some(budget) = budget
                && outcome.stats.states_expanded % TIME_CHECK_INTERVAL == 0
                && started.elapsed() > budget
            {
                return Err(LexitrieError::resource_exhausted(format!(
                    "fuzzy search for '{query}' exceeded {} ms",
                    budget.as_millis()
                )));
            }

            let node = self.trie.node(frame.node);

            if frame.index == query_chars.len() {
                self.record(&mut outcome.paths, frame.path, node.is_terminal());
                continue;
            }

            let mut matched = false;
            for &candidate in &candidates[frame.index] {
                if let Some(child) = node.child(candidate) {
                    matched = true;
                    let mut path = String::with_capacity(frame.path.len() + candidate.len_utf8());
                    path.push_str(&frame.path);
                    path.push(candidate);
                    frontier.push(Frame {
                        index: frame.index + 1,
                        node: child,
                        path,
                    });
                }
            }

            if !matched {
                outcome.stats.dead_ends += 1;
                self.record(&mut outcome.paths, frame.path.clone(), node.is_terminal());
            }

            frontier.push(Frame {
                index: frame.index + 1,
                node: frame.node,
                path: frame.path,
            });
        }

        debug!(
            "fuzzy search for '{}': {} paths, {} states expanded, {} pruned, {} dead ends, branching up to {} in {:?}",
            query,
            outcome.paths.len(),
            outcome.stats.states_expanded,
            outcome.stats.states_pruned,
            outcome.stats.dead_ends,
            self.alternatives.max_alternatives() + 2,
            started.elapsed()
        );

        Ok(outcome)
    }

    fn record(&self, paths: &mut BTreeSet<String>, path: String, terminal: bool) {
        if terminal || !self.config.terminal_only {
            paths.insert(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sample_trie() -> Trie<usize> {
        Trie::from_pairs(vec![("kitap", 0), ("kitaplık", 1), ("sakız", 2), ("gel", 3)]).unwrap()
    }

    fn paths(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_query_with_identity_table() {
        let trie = sample_trie();
        let table = AlternativeTable::identity("kitaplı".chars());
        let config = SearchConfig::default();
        let search = FuzzySearch::new(&trie, &table, &config);

        let results = search.search("kitap").unwrap();
        assert!(results.contains("kitap"));
        for path in &results {
            assert!("kitap".starts_with(path.as_str()), "{path} is not a prefix");
        }
        assert_eq!(results, paths(&["", "k", "ki", "kit", "kita", "kitap"]));
    }

    #[test]
    fn test_substitution_reaches_stored_form() {
        let trie = sample_trie();
        let table = AlternativeTable::turkish();
        let config = SearchConfig::default();
        let search = FuzzySearch::new(&trie, &table, &config);

        let results = search.search("sakiz").unwrap();
        assert!(results.contains("sakız"));
        assert!(results.contains("sakı"));
        assert!(!results.contains("sakiz"));
    }

    #[test]
    fn test_extra_letter_is_skipped() {
        let trie = sample_trie();
        let table = AlternativeTable::turkish();
        let config = SearchConfig::default();
        let search = FuzzySearch::new(&trie, &table, &config);

        let results = search.search("gell").unwrap();
        assert!(results.contains("gel"));

        let results = search.search("kiitap").unwrap();
        assert!(results.contains("kitap"));
    }

    #[test]
    fn test_missing_letter_is_not_modeled() {
        let trie = sample_trie();
        let table = AlternativeTable::turkish();
        let config = SearchConfig::default().terminal_only(true);
        let search = FuzzySearch::new(&trie, &table, &config);

        assert!(!search.search("ktap").unwrap().contains("kitap"));
    }

    #[test]
    fn test_terminal_only_filters_prefixes() {
        let trie = sample_trie();
        let table = AlternativeTable::turkish();
        let config = SearchConfig::default().terminal_only(true);
        let search = FuzzySearch::new(&trie, &table, &config);

        let results = search.search("kitaplik").unwrap();
        assert_eq!(results, paths(&["kitap", "kitaplık"]));
        for path in &results {
            assert!(trie.contains(path));
        }
    }

    #[test]
    fn test_memoization_preserves_results() {
        let trie = sample_trie();
        let table = AlternativeTable::turkish();
        let memoized = SearchConfig::default();
        let raw = SearchConfig::default().memoize(false);

        for query in ["sakiz", "kitaplik", "geel", "kitab", "zzz"] {
            let with_memo = FuzzySearch::new(&trie, &table, &memoized)
                .search_with_stats(query)
                .unwrap();
            let without_memo = FuzzySearch::new(&trie, &table, &raw)
                .search_with_stats(query)
                .unwrap();

            assert_eq!(with_memo.paths, without_memo.paths, "query {query}");
            assert!(with_memo.stats.states_expanded <= without_memo.stats.states_expanded);
            assert_eq!(without_memo.stats.states_pruned, 0);
        }
    }

    #[test]
    fn test_unmapped_character_is_configuration_error() {
        let trie = sample_trie();
        let table = AlternativeTable::turkish();
        let config = SearchConfig::default();
        let search = FuzzySearch::new(&trie, &table, &config);

        assert!(matches!(
            search.search("gel!"),
            Err(LexitrieError::Configuration(_))
        ));
    }

    #[test]
    fn test_state_budget() {
        let trie = sample_trie();
        let table = AlternativeTable::turkish();
        let config = SearchConfig::default().max_states(3);
        let search = FuzzySearch::new(&trie, &table, &config);

        assert!(matches!(
            search.search("kitaplik"),
            Err(LexitrieError::ResourceExhausted(_))
        ));
    }

    #[test]
    fn test_time_budget() {
        // Every string of length 7 over a, i and ı.
        let mut words = vec![String::new()];
        for _ in 0..7 {
            words = words
                .iter()
                .flat_map(|prefix| ['a', 'i', 'ı'].map(|ch| format!("{prefix}{ch}")))
                .collect();
        }
        let trie = Trie::from_pairs(words.iter().enumerate().map(|(i, w)| (w.as_str(), i))).unwrap();
        assert_eq!(trie.len(), 2187);

        let table = AlternativeTable::turkish();
        let config = SearchConfig::default()
            .memoize(false)
            .time_budget(Duration::ZERO);
        let search = FuzzySearch::new(&trie, &table, &config);

        assert!(matches!(
            search.search("aiiiiiiiiiiiiiii"),
            Err(LexitrieError::ResourceExhausted(_))
        ));
    }

    #[test]
    fn test_query_length_budget() {
        let trie = sample_trie();
        let table = AlternativeTable::turkish();
        let config = SearchConfig::default().max_query_len(4);
        let search = FuzzySearch::new(&trie, &table, &config);

        assert!(search.search("gel").is_ok());
        assert!(matches!(
            search.search("kitap"),
            Err(LexitrieError::ResourceExhausted(_))
        ));
    }

    #[test]
    fn test_empty_query_yields_root_path() {
        let trie = sample_trie();
        let table = AlternativeTable::turkish();
        let config = SearchConfig::default();
        let search = FuzzySearch::new(&trie, &table, &config);

        assert_eq!(search.search("").unwrap(), paths(&[""]));
    }
}
