//! Core data types shared across the summarization pipeline.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SummarizeError};
use crate::nlp::keywords::KeywordExtractorConfig;
use crate::summarizer::selector::validate_fraction;

/// Default share of sentences kept in a summary.
pub const DEFAULT_SUMMARY_FRACTION: f64 = 0.25;

/// A keyword paired with its raw importance.
///
/// Lower `raw_importance` means a more important keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordWeight {
    /// Keyword text, normalized the same way as processed sentences
    pub term: String,
    /// Non-negative importance (lower is better)
    pub raw_importance: f64,
}

impl KeywordWeight {
    pub fn new(term: impl Into<String>, raw_importance: f64) -> Self {
        Self {
            term: term.into(),
            raw_importance,
        }
    }
}

impl<S: Into<String>> From<(S, f64)> for KeywordWeight {
    fn from((term, raw_importance): (S, f64)) -> Self {
        Self::new(term, raw_importance)
    }
}

/// One sentence of a document in both of its views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Position of the sentence in the document (0-based)
    pub index: usize,
    /// Verbatim sentence text, used in the summary output
    pub original: String,
    /// Normalized sentence text, used only for keyword matching
    pub processed: String,
}

impl SentenceRecord {
    pub fn new(index: usize, original: impl Into<String>, processed: impl Into<String>) -> Self {
        Self {
            index,
            original: original.into(),
            processed: processed.into(),
        }
    }

    /// Number of whitespace-delimited tokens in the processed view.
    pub fn token_count(&self) -> usize {
        self.processed.split_whitespace().count()
    }
}

/// An ordered, index-aligned sequence of sentences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    sentences: Vec<SentenceRecord>,
}

impl Document {
    /// Pair up the original and processed views of a document.
    ///
    /// Fails with [`SummarizeError::MisalignedInput`] when the two views
    /// have different lengths.
    pub fn from_views<O, P>(original: Vec<O>, processed: Vec<P>) -> Result<Self>
    where
        O: Into<String>,
        P: Into<String>,
    {
        if original.len() != processed.len() {
            return Err(SummarizeError::MisalignedInput(format!(
                "{} original sentences but {} processed sentences",
                original.len(),
                processed.len()
            )));
        }

        let sentences = original
            .into_iter()
            .zip(processed)
            .enumerate()
            .map(|(index, (o, p))| SentenceRecord::new(index, o, p))
            .collect();

        Ok(Self { sentences })
    }

    /// Build a document from pre-assembled records.
    ///
    /// Each record's `index` must equal its position in `records`.
    pub fn from_records(records: Vec<SentenceRecord>) -> Result<Self> {
        if let Some((pos, record)) = records
            .iter()
            .enumerate()
            .find(|(pos, record)| record.index != *pos)
        {
            return Err(SummarizeError::MisalignedInput(format!(
                "sentence at position {pos} carries index {}",
                record.index
            )));
        }
        Ok(Self { sentences: records })
    }

    pub fn sentences(&self) -> &[SentenceRecord] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SentenceRecord> {
        self.sentences.get(index)
    }

    /// Processed sentences joined by single spaces; the keyword extractor's input.
    pub fn processed_text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.processed.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Per-sentence scores keyed by sentence index.
///
/// Backed by a dense vector, so iteration is always in ascending index
/// order and every sentence has exactly one score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SentenceScores {
    values: Vec<f64>,
}

impl SentenceScores {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(index, score)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values.iter().copied().enumerate()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Sentence indices chosen for a summary, ascending and duplicate-free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    /// Callers must hand over indices that are already sorted and unique.
    pub(crate) fn from_sorted(indices: Vec<usize>) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self { indices }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

/// Final summary handed back to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Selected original sentences, trimmed, in reading order
    pub sentences: Vec<String>,
    /// Indices of the selected sentences
    pub selection: Selection,
    /// Per-sentence scores, when requested for diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<SentenceScores>,
}

impl Summary {
    /// Join the summary sentences with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.sentences.join(separator)
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Configuration for a summarization run.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryConfig {
    /// Target share of sentences to keep, in (0, 1]
    pub summary_fraction: f64,
    /// Attach the per-sentence score map to the [`Summary`]
    pub include_scores: bool,
    /// Settings for the built-in keyword extractor
    pub keywords: KeywordExtractorConfig,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            summary_fraction: DEFAULT_SUMMARY_FRACTION,
            include_scores: false,
            keywords: KeywordExtractorConfig::default(),
        }
    }
}

impl SummaryConfig {
    pub fn with_summary_fraction(mut self, fraction: f64) -> Self {
        self.summary_fraction = fraction;
        self
    }

    pub fn with_scores(mut self, include: bool) -> Self {
        self.include_scores = include;
        self
    }

    pub fn with_keywords(mut self, keywords: KeywordExtractorConfig) -> Self {
        self.keywords = keywords;
        self
    }

    /// Check every value against its valid range.
    pub fn validate(&self) -> Result<()> {
        validate_fraction(self.summary_fraction)?;
        self.keywords.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_views_pairs_by_position() {
        let doc = Document::from_views(
            vec!["Hello World.", "Second  one."],
            vec!["hello world.", "second one."],
        )
        .unwrap();

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.sentences()[1].index, 1);
        assert_eq!(doc.sentences()[1].original, "Second  one.");
        assert_eq!(doc.sentences()[1].processed, "second one.");
    }

    #[test]
    fn test_from_views_rejects_length_mismatch() {
        let err = Document::from_views(vec!["a.", "b."], vec!["a."]).unwrap_err();
        assert!(matches!(err, SummarizeError::MisalignedInput(_)));
    }

    #[test]
    fn test_from_records_rejects_index_gap() {
        let records = vec![
            SentenceRecord::new(0, "A.", "a."),
            SentenceRecord::new(2, "B.", "b."),
        ];
        let err = Document::from_records(records).unwrap_err();
        assert!(matches!(err, SummarizeError::MisalignedInput(_)));
    }

    #[test]
    fn test_empty_views_make_empty_document() {
        let doc = Document::from_views(Vec::<String>::new(), Vec::<String>::new()).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_token_count_uses_whitespace() {
        let record = SentenceRecord::new(0, "x", "  three   short words ");
        assert_eq!(record.token_count(), 3);
        assert_eq!(SentenceRecord::new(0, "x", "   ").token_count(), 0);
    }

    #[test]
    fn test_processed_text_joins_with_spaces() {
        let doc = Document::from_views(vec!["A.", "B."], vec!["a.", "b."]).unwrap();
        assert_eq!(doc.processed_text(), "a. b.");
    }

    #[test]
    fn test_scores_iterate_in_index_order() {
        let scores = SentenceScores::new(vec![0.5, 0.0, 1.5]);
        let pairs: Vec<_> = scores.iter().collect();
        assert_eq!(pairs, vec![(0, 0.5), (1, 0.0), (2, 1.5)]);
        assert_eq!(scores.get(3), None);
    }

    #[test]
    fn test_summary_serializes_without_scores() {
        let summary = Summary {
            sentences: vec!["First.".to_string()],
            selection: Selection::from_sorted(vec![0]),
            scores: None,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["selection"], serde_json::json!([0]));
        assert!(json.get("scores").is_none());
    }

    #[test]
    fn test_config_default_is_valid() {
        let cfg = SummaryConfig::default();
        assert_eq!(cfg.summary_fraction, DEFAULT_SUMMARY_FRACTION);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_fraction() {
        let cfg = SummaryConfig::default().with_summary_fraction(0.0);
        assert!(matches!(
            cfg.validate(),
            Err(SummarizeError::InvalidParameter { .. })
        ));
    }
}
