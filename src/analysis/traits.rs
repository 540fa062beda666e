// Distance metric trait: swap-ready abstraction.
//
// The classifier only needs "how far apart are these two occurrences". The
// default metric is Euclidean space plus weighted absolute time, but a
// different weighting (or a great-circle metric for lat/lon data) can be
// dropped in without touching the classification loop.

use crate::occurrence::Occurrence;

/// Combined spatiotemporal distance between two occurrences.
///
/// Implementations must be symmetric and non-negative for finite inputs.
pub trait DistanceMetric {
    fn distance(&self, a: &Occurrence, b: &Occurrence) -> f64;
}
