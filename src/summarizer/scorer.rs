//! Keyword-weighted sentence scoring
//!
//! Each matching keyword contributes `ln(1 / raw_importance)`, which turns
//! the lower-is-better keyword scale into higher-is-better and compresses
//! very small importances. The sum is divided by the sentence's token count
//! so long sentences are not favored for containing more keywords.

use super::keyword_table::KeywordTable;
use crate::types::{SentenceRecord, SentenceScores};

/// Scores sentences against a [`KeywordTable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceScorer;

impl SentenceScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score every sentence. The result is aligned with `sentences` by index.
    pub fn score(&self, table: &KeywordTable, sentences: &[SentenceRecord]) -> SentenceScores {
        SentenceScores::new(
            sentences
                .iter()
                .map(|s| self.score_sentence(table, s))
                .collect(),
        )
    }

    /// Score a single sentence.
    ///
    /// Sentences without tokens score 0.0.
    pub fn score_sentence(&self, table: &KeywordTable, sentence: &SentenceRecord) -> f64 {
        let tokens = sentence.token_count();
        if tokens == 0 {
            return 0.0;
        }

        let total: f64 = table
            .matches(&sentence.processed)
            .filter(|k| k.raw_importance > 0.0)
            .map(|k| (1.0 / k.raw_importance).ln())
            .sum();

        total / tokens as f64
    }
}
