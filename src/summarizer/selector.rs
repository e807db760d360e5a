//! Score-ranked sentence selection for summarization
//!
//! Picks the top `ceil(fraction * n)` sentences by score, restores reading
//! order, and always keeps the document's first sentence.

use crate::errors::{Result, SummarizeError};
use crate::types::{SentenceScores, Selection, SummaryConfig, DEFAULT_SUMMARY_FRACTION};

/// Check that a summary fraction lies in (0, 1].
pub fn validate_fraction(fraction: f64) -> Result<()> {
    if fraction.is_nan() || fraction <= 0.0 || fraction > 1.0 {
        return Err(SummarizeError::invalid_parameter(
            "summary_fraction",
            format!("must be in (0, 1], got {fraction}"),
        ));
    }
    Ok(())
}

/// Configuration for sentence selection
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorConfig {
    /// Share of sentences to select, in (0, 1]
    pub summary_fraction: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            summary_fraction: DEFAULT_SUMMARY_FRACTION,
        }
    }
}

impl From<&SummaryConfig> for SelectorConfig {
    fn from(config: &SummaryConfig) -> Self {
        Self {
            summary_fraction: config.summary_fraction,
        }
    }
}

/// Fraction-based sentence selector
#[derive(Debug, Clone, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set the share of sentences to keep
    pub fn with_summary_fraction(mut self, fraction: f64) -> Self {
        self.config.summary_fraction = fraction;
        self
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Number of top-scored sentences to take from a document of `total`
    /// sentences, before the first sentence is forced in.
    ///
    /// Always at least 1 and never more than `total`.
    pub fn target_count(&self, total: usize) -> usize {
        let raw = (self.config.summary_fraction * total as f64).ceil();
        (raw as usize).clamp(1, total.max(1))
    }

    /// Rank sentence indices by score, highest first.
    ///
    /// Equal scores keep ascending index order.
    pub fn rank(scores: &SentenceScores) -> Vec<usize> {
        let values = scores.as_slice();
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| values[b].total_cmp(&values[a]).then(a.cmp(&b)));
        order
    }

    /// Select sentence indices for the summary.
    ///
    /// `scores` must hold exactly `total` entries.
    pub fn select(&self, scores: &SentenceScores, total: usize) -> Result<Selection> {
        validate_fraction(self.config.summary_fraction)?;
        if total == 0 {
            return Err(SummarizeError::EmptyDocument);
        }
        if scores.len() != total {
            return Err(SummarizeError::MisalignedInput(format!(
                "{} scores for {} sentences",
                scores.len(),
                total
            )));
        }

        let mut chosen: Vec<usize> = Self::rank(scores)
            .into_iter()
            .take(self.target_count(total))
            .collect();
        chosen.sort_unstable();

        // The opening sentence is always part of the summary.
        if chosen.first() != Some(&0) {
            chosen.insert(0, 0);
        }

        Ok(Selection::from_sorted(chosen))
    }
}
