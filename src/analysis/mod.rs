// Analysis: distance metric, impossibility check, pairwise classification.

pub mod classify;
pub mod distance;
pub mod traits;

use serde::{Deserialize, Serialize};

/// An unordered pair of distinct keywords, stored in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordPair {
    pub first: String,
    pub second: String,
}

impl KeywordPair {
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    /// True if this pair names the same two keywords, in either order.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }
}

/// Result of classifying every keyword pair in a store.
///
/// `possible` and `impossible` partition all C(n, 2) pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Classification {
    pub possible: Vec<KeywordPair>,
    pub impossible: Vec<KeywordPair>,
}

impl Classification {
    pub fn total_pairs(&self) -> usize {
        self.possible.len() + self.impossible.len()
    }

    pub fn is_possible(&self, a: &str, b: &str) -> bool {
        self.possible.iter().any(|p| p.matches(a, b))
    }

    pub fn is_impossible(&self, a: &str, b: &str) -> bool {
        self.impossible.iter().any(|p| p.matches(a, b))
    }
}
