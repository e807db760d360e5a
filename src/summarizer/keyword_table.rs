//! Keyword weight table
//!
//! Immutable keyword → raw importance mapping consulted by the scorer.

use rustc_hash::FxHashMap;

use crate::errors::{Result, SummarizeError};
use crate::types::KeywordWeight;

/// Keyword weights for a single document.
///
/// Entries keep first-insertion order. A repeated term keeps its lowest
/// (most important) raw importance.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    entries: Vec<KeywordWeight>,
    /// term -> position in `entries`
    positions: FxHashMap<String, usize>,
}

impl KeywordTable {
    /// Build a table from keyword weights.
    ///
    /// Negative or non-finite importances are rejected.
    pub fn new<I, K>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<KeywordWeight>,
    {
        let mut table = Self::default();

        for keyword in keywords {
            let keyword = keyword.into();
            if !keyword.raw_importance.is_finite() || keyword.raw_importance < 0.0 {
                return Err(SummarizeError::invalid_parameter(
                    "raw_importance",
                    format!(
                        "keyword \"{}\" has importance {}, expected a finite value >= 0",
                        keyword.term, keyword.raw_importance
                    ),
                ));
            }

            match table.positions.get(&keyword.term) {
                Some(&pos) => {
                    let existing = &mut table.entries[pos];
                    existing.raw_importance = existing.raw_importance.min(keyword.raw_importance);
                }
                None => {
                    table
                        .positions
                        .insert(keyword.term.clone(), table.entries.len());
                    table.entries.push(keyword);
                }
            }
        }

        Ok(table)
    }

    /// An empty table; every sentence scores zero against it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Raw importance of `term`, if present.
    pub fn importance(&self, term: &str) -> Option<f64> {
        self.positions
            .get(term)
            .map(|&pos| self.entries[pos].raw_importance)
    }

    /// Whether `term` occurs as a substring of `processed`.
    ///
    /// No normalization is applied to either side.
    pub fn occurs_in(term: &str, processed: &str) -> bool {
        processed.contains(term)
    }

    /// Keywords occurring in a processed sentence, in table order.
    pub fn matches<'a>(&'a self, processed: &'a str) -> impl Iterator<Item = &'a KeywordWeight> {
        self.entries
            .iter()
            .filter(move |k| Self::occurs_in(&k.term, processed))
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordWeight> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
