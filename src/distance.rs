//! Edit distance metrics for ranking fuzzy search candidates.
//!
//! All functions work on Unicode scalar values, so `ı` and `i` are one
//! character each regardless of their UTF-8 width.

use std::cmp::min;

use serde::{Deserialize, Serialize};

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character insertions, deletions or
/// substitutions needed to turn `a` into `b`.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    levenshtein_chars(&a_chars, &b_chars)
}

/// Levenshtein distance over pre-split characters.
///
/// The table has one row per prefix of `b` and one column per prefix of `a`.
#[allow(clippy::needless_range_loop)]
pub(crate) fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut table = vec![vec![0; m + 1]; n + 1];

    for i in 0..=m {
        table[0][i] = i;
    }
    for j in 0..=n {
        table[j][0] = j;
    }

    for j in 1..=n {
        for i in 1..=m {
            table[j][i] = if a[i - 1] == b[j - 1] {
                table[j - 1][i - 1]
            } else {
                1 + min(
                    min(
                        table[j][i - 1], // insertion
                        table[j - 1][i], // deletion
                    ),
                    table[j - 1][i - 1], // substitution
                )
            };
        }
    }

    table[n][m]
}

/// Calculate the Damerau-Levenshtein (optimal string alignment) distance,
/// which also counts adjacent transpositions as a single edit.
pub fn damerau_levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    damerau_levenshtein_chars(&a_chars, &b_chars)
}

#[allow(clippy::needless_range_loop)]
pub(crate) fn damerau_levenshtein_chars(a: &[char], b: &[char]) -> usize {
    let len1 = a.len();
    let len2 = b.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                matrix[i][j] = min(
                    matrix[i][j],
                    matrix[i - 2][j - 2] + 1, // transposition
                );
            }
        }
    }

    matrix[len1][len2]
}

/// Distance metric used to rank fuzzy search candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Unit-cost insertions, deletions and substitutions.
    #[default]
    Levenshtein,
    /// Levenshtein plus unit-cost adjacent transpositions.
    DamerauLevenshtein,
}

impl DistanceMetric {
    /// Distance between two strings under this metric.
    pub fn distance(&self, a: &str, b: &str) -> usize {
        match self {
            DistanceMetric::Levenshtein => levenshtein_distance(a, b),
            DistanceMetric::DamerauLevenshtein => damerau_levenshtein_distance(a, b),
        }
    }

    fn distance_chars(&self, a: &[char], b: &[char]) -> usize {
        match self {
            DistanceMetric::Levenshtein => levenshtein_chars(a, b),
            DistanceMetric::DamerauLevenshtein => damerau_levenshtein_chars(a, b),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DistanceMetric::Levenshtein => "levenshtein",
            DistanceMetric::DamerauLevenshtein => "damerau_levenshtein",
        }
    }
}

/// Scores many candidates against one query without re-splitting the query.
#[derive(Debug, Clone)]
pub struct DistanceMatcher {
    query: String,
    query_chars: Vec<char>,
    metric: DistanceMetric,
}

impl DistanceMatcher {
    /// Create a new matcher for the given query string.
    pub fn new(query: impl Into<String>, metric: DistanceMetric) -> Self {
        let query = query.into();
        let query_chars = query.chars().collect();
        DistanceMatcher {
            query,
            query_chars,
            metric,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Distance from the query to a candidate.
    pub fn distance(&self, candidate: &str) -> usize {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        self.metric
            .distance_chars(&self.query_chars, &candidate_chars)
    }
}
