// Occurrences: where and when a keyword was observed.
//
// An occurrence is a point in 3D space plus a timestamp. The store groups
// occurrences by keyword and is the only input the analysis reads.

pub mod store;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A single recorded occurrence: three spatial coordinates and a timestamp.
///
/// Serialized as a flat `[x, y, z, t]` array so datasets stay compact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Occurrence {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Timestamp, in whatever unit the caller uses consistently
    pub t: f64,
}

impl Occurrence {
    pub fn new(x: f64, y: f64, z: f64, t: f64) -> Self {
        Self { x, y, z, t }
    }

    /// Parse a comma-separated `x,y,z,t` line.
    ///
    /// Whitespace around each field is ignored. Anything other than exactly
    /// four numeric fields is rejected.
    pub fn parse(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 4 {
            anyhow::bail!(
                "expected 4 comma-separated values (x,y,z,t), got {} in {line:?}",
                fields.len()
            );
        }

        let mut values = [0.0_f64; 4];
        for (slot, field) in values.iter_mut().zip(&fields) {
            *slot = field
                .parse::<f64>()
                .map_err(|e| anyhow::anyhow!("invalid number {field:?} in {line:?}: {e}"))?;
        }

        Ok(values.into())
    }
}

impl From<[f64; 4]> for Occurrence {
    fn from([x, y, z, t]: [f64; 4]) -> Self {
        Self::new(x, y, z, t)
    }
}

impl From<Occurrence> for [f64; 4] {
    fn from(o: Occurrence) -> Self {
        [o.x, o.y, o.z, o.t]
    }
}

impl From<(f64, f64, f64, f64)> for Occurrence {
    fn from((x, y, z, t): (f64, f64, f64, f64)) -> Self {
        Self::new(x, y, z, t)
    }
}

impl std::fmt::Display for Occurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, t={})", self.x, self.y, self.z, self.t)
    }
}
