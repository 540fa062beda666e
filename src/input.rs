// Dataset files: non-interactive input for `coexist analyze` / `coexist check`.
//
// Format:
//
//   {
//     "alpha": 1.0,          (optional)
//     "delta": 5.0,          (optional)
//     "keywords": {
//       "A": [[0, 0, 0, 0], [1, 2, 3, 4]],
//       "D": []
//     }
//   }
//
// Keyword order in the file becomes registration order.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::occurrence::store::KeywordOccurrenceStore;
use crate::occurrence::Occurrence;

/// A parsed dataset file.
#[derive(Debug)]
pub struct Dataset {
    pub alpha: Option<f64>,
    pub delta: Option<f64>,
    pub store: KeywordOccurrenceStore,
}

#[derive(Deserialize)]
struct RawDataset {
    alpha: Option<f64>,
    delta: Option<f64>,
    #[serde(default)]
    keywords: serde_json::Map<String, serde_json::Value>,
}

/// Parse a dataset from JSON text.
pub fn parse_dataset(json: &str) -> Result<Dataset> {
    let raw: RawDataset = serde_json::from_str(json).context("Invalid dataset JSON")?;

    let mut store = KeywordOccurrenceStore::new();
    for (keyword, value) in raw.keywords {
        let occurrences: Vec<Occurrence> = serde_json::from_value(value)
            .with_context(|| format!("Invalid occurrences for keyword {keyword:?}"))?;
        store.add_keyword_occurrences(&keyword, occurrences);
    }

    Ok(Dataset {
        alpha: raw.alpha,
        delta: raw.delta,
        store,
    })
}

/// Read and parse a dataset file.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset {}", path.display()))?;
    let dataset = parse_dataset(&json)?;
    info!(
        path = %path.display(),
        keywords = dataset.store.len(),
        occurrences = dataset.store.total_occurrences(),
        "Dataset loaded"
    );
    Ok(dataset)
}
