// Output formatting: terminal display, markdown report, JSON export.

pub mod markdown;
pub mod terminal;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::{Classification, KeywordPair};
use crate::occurrence::store::KeywordOccurrenceStore;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Respects UTF-8 character boundaries, so keyword names with emoji or
/// accented letters never cause a panic.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Per-keyword summary line for reports.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordSummary {
    pub keyword: String,
    pub occurrences: usize,
}

/// Everything a report needs, independent of output format.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub alpha: f64,
    pub delta: f64,
    pub keywords: Vec<KeywordSummary>,
    pub possible: Vec<KeywordPair>,
    pub impossible: Vec<KeywordPair>,
}

impl AnalysisReport {
    pub fn new(
        alpha: f64,
        delta: f64,
        store: &KeywordOccurrenceStore,
        classification: Classification,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            alpha,
            delta,
            keywords: store
                .iter()
                .map(|(keyword, occurrences)| KeywordSummary {
                    keyword: keyword.to_string(),
                    occurrences: occurrences.len(),
                })
                .collect(),
            possible: classification.possible,
            impossible: classification.impossible,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
