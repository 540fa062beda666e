// Spatiotemporal distance: 3D Euclidean distance plus weighted time gap.
//
//   distance = sqrt(dx² + dy² + dz²) + alpha * |dt|
//
// alpha = 0 ignores time entirely; larger alpha makes a time gap count for
// more than the same numeric gap in space.

use crate::occurrence::Occurrence;

use super::traits::DistanceMetric;

pub const DEFAULT_ALPHA: f64 = 1.0;

/// The default metric. `alpha` weights temporal distance against spatial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatiotemporalDistance {
    pub alpha: f64,
}

impl Default for SpatiotemporalDistance {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl SpatiotemporalDistance {
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }
}

/// Euclidean distance between the spatial parts of two occurrences.
pub fn spatial_distance(a: &Occurrence, b: &Occurrence) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Absolute difference between the timestamps of two occurrences.
pub fn temporal_distance(a: &Occurrence, b: &Occurrence) -> f64 {
    (a.t - b.t).abs()
}

impl DistanceMetric for SpatiotemporalDistance {
    fn distance(&self, a: &Occurrence, b: &Occurrence) -> f64 {
        spatial_distance(a, b) + self.alpha * temporal_distance(a, b)
    }
}
