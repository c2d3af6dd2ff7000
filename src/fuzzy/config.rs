//! Budgets and switches for the fuzzy search.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LexitrieError, Result};

/// Configuration for [`FuzzySearch`](crate::fuzzy::FuzzySearch).
///
/// Without memoization the number of explored states grows as
/// `(max_alternatives + 2) ^ query_len`. With memoization it is bounded by
/// `node_count * (query_len + 1)`. The budgets turn a runaway search into a
/// `ResourceExhausted` error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Longest query, in characters, the search accepts.
    pub max_query_len: usize,
    /// Maximum number of frontier states to expand.
    pub max_states: usize,
    /// Wall-clock budget in milliseconds.
    pub time_budget_ms: Option<u64>,
    /// Skip (node, query index) states that were already expanded.
    pub memoize: bool,
    /// Keep only paths that end at a stored word.
    pub terminal_only: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_query_len: 64,
            max_states: 1_000_000,
            time_budget_ms: None,
            memoize: true,
            terminal_only: false,
        }
    }
}

impl SearchConfig {
    /// Set the longest accepted query.
    pub fn max_query_len(mut self, max_query_len: usize) -> Self {
        self.max_query_len = max_query_len;
        self
    }

    /// Set the state budget.
    pub fn max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }

    /// Set the wall-clock budget.
    pub fn time_budget(mut self, budget: Duration) -> Self {
        self.time_budget_ms = Some(budget.as_millis() as u64);
        self
    }

    /// Enable or disable memoization of visited states.
    pub fn memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Keep only paths ending at stored words.
    pub fn terminal_only(mut self, terminal_only: bool) -> Self {
        self.terminal_only = terminal_only;
        self
    }

    /// The wall-clock budget, if any.
    pub fn budget(&self) -> Option<Duration> {
        self.time_budget_ms.map(Duration::from_millis)
    }

    /// Reject budgets that can never be satisfied.
    pub fn validate(&self) -> Result<()> {
        if self.max_states == 0 {
            return Err(LexitrieError::configuration(
                "max_states must be greater than 0",
            ));
        }
        if self.max_query_len == 0 {
            return Err(LexitrieError::configuration(
                "max_query_len must be greater than 0",
            ));
        }
        Ok(())
    }
}
