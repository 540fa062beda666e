// Pairwise exclusivity classification.
//
// Two keywords are "impossible" together if ANY pair of their occurrences is
// at least `delta` apart under the distance metric. A single far-apart pair
// is enough evidence, so the cross-product scan returns on the first hit.
// Keywords with no occurrences never produce evidence and are therefore
// possible with everything.

use tracing::{debug, info};

use crate::occurrence::store::KeywordOccurrenceStore;
use crate::occurrence::Occurrence;

use super::distance::SpatiotemporalDistance;
use super::traits::DistanceMetric;
use super::{Classification, KeywordPair};

pub const DEFAULT_DELTA: f64 = 5.0;

/// Returns true if any (a, b) in the cross product is at least `delta` apart.
///
/// Short-circuits on the first qualifying pair. Empty inputs yield false.
pub fn any_pair_exceeds<M: DistanceMetric + ?Sized>(
    metric: &M,
    delta: f64,
    first: &[Occurrence],
    second: &[Occurrence],
) -> bool {
    first
        .iter()
        .any(|a| second.iter().any(|b| metric.distance(a, b) >= delta))
}

/// Owns a keyword store and the (immutable) parameters used to classify it.
#[derive(Debug, Clone)]
pub struct ExclusivitySimulator<M = SpatiotemporalDistance> {
    metric: M,
    delta: f64,
    store: KeywordOccurrenceStore,
}

impl Default for ExclusivitySimulator {
    fn default() -> Self {
        Self::new(super::distance::DEFAULT_ALPHA, DEFAULT_DELTA)
    }
}

impl ExclusivitySimulator {
    /// Create a simulator with the default spatiotemporal metric.
    pub fn new(alpha: f64, delta: f64) -> Self {
        Self::with_metric(SpatiotemporalDistance::new(alpha), delta)
    }

    pub fn alpha(&self) -> f64 {
        self.metric.alpha
    }
}

impl<M: DistanceMetric> ExclusivitySimulator<M> {
    pub fn with_metric(metric: M, delta: f64) -> Self {
        Self {
            metric,
            delta,
            store: KeywordOccurrenceStore::new(),
        }
    }

    /// Replace the store wholesale (e.g. one loaded from a dataset file).
    pub fn with_store(mut self, store: KeywordOccurrenceStore) -> Self {
        self.store = store;
        self
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    pub fn store(&self) -> &KeywordOccurrenceStore {
        &self.store
    }

    /// Register a keyword's full occurrence list, replacing any previous one.
    pub fn add_keyword_occurrences<I, O>(&mut self, keyword: &str, occurrences: I)
    where
        I: IntoIterator<Item = O>,
        O: Into<Occurrence>,
    {
        self.store.add_keyword_occurrences(keyword, occurrences);
    }

    pub fn append_occurrence(&mut self, keyword: &str, occurrence: Occurrence) {
        self.store.append_occurrence(keyword, occurrence);
    }

    /// Check whether two keywords are mutually exclusive.
    ///
    /// An unregistered keyword is treated as possible with everything rather
    /// than as an error.
    pub fn is_impossible_combination(&self, keyword1: &str, keyword2: &str) -> bool {
        let (Some(first), Some(second)) = (
            self.store.occurrences(keyword1),
            self.store.occurrences(keyword2),
        ) else {
            debug!(keyword1, keyword2, "Unknown keyword in pair check, treating as possible");
            return false;
        };

        any_pair_exceeds(&self.metric, self.delta, first, second)
    }

    /// Classify every unordered pair of distinct keywords.
    ///
    /// Pairs are generated in registration order (i < j), so each pair
    /// appears exactly once and self-pairs are never produced.
    pub fn infer_all_possibilities(&self) -> Classification {
        let keywords: Vec<&str> = self.store.keywords().collect();
        let mut result = Classification::default();

        for (i, first) in keywords.iter().enumerate() {
            for second in &keywords[i + 1..] {
                let pair = KeywordPair::new(first, second);
                if self.is_impossible_combination(first, second) {
                    result.impossible.push(pair);
                } else {
                    result.possible.push(pair);
                }
            }
        }

        info!(
            keywords = keywords.len(),
            possible = result.possible.len(),
            impossible = result.impossible.len(),
            "Keyword pairs classified"
        );

        result
    }
}
