// Keyword occurrence store: the in-memory registry the analysis reads.
//
// Keywords are enumerated in registration order. Re-registering a keyword
// replaces its occurrence list but keeps its original position, so pair
// output stays stable when a dataset is corrected in place.

use std::collections::HashMap;

use super::Occurrence;

/// Owned mapping of keyword -> occurrence list, in registration order.
#[derive(Debug, Clone, Default)]
pub struct KeywordOccurrenceStore {
    entries: Vec<(String, Vec<Occurrence>)>,
    index: HashMap<String, usize>,
}

impl KeywordOccurrenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a keyword with its full occurrence list. Last write wins.
    pub fn add_keyword_occurrences<I, O>(&mut self, keyword: &str, occurrences: I)
    where
        I: IntoIterator<Item = O>,
        O: Into<Occurrence>,
    {
        let occurrences: Vec<Occurrence> = occurrences.into_iter().map(Into::into).collect();
        match self.index.get(keyword) {
            Some(&slot) => self.entries[slot].1 = occurrences,
            None => {
                self.index.insert(keyword.to_string(), self.entries.len());
                self.entries.push((keyword.to_string(), occurrences));
            }
        }
    }

    /// Append one occurrence, registering the keyword if it is new.
    pub fn append_occurrence(&mut self, keyword: &str, occurrence: Occurrence) {
        match self.index.get(keyword) {
            Some(&slot) => self.entries[slot].1.push(occurrence),
            None => self.add_keyword_occurrences(keyword, [occurrence]),
        }
    }

    /// Occurrences for a keyword, or `None` if it was never registered.
    pub fn occurrences(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.index
            .get(keyword)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.index.contains_key(keyword)
    }

    /// Keywords in registration order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// (keyword, occurrences) entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_occurrences(&self) -> usize {
        self.entries.iter().map(|(_, v)| v.len()).sum()
    }
}
