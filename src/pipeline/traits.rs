//! Stage trait definitions for the pipeline.
//!
//! The summarization core only consumes a [`Document`] and keyword weights.
//! Producing them is delegated to the stages below, so callers can swap in
//! their own sentence splitter, normalizer, or keyword service.

use crate::errors::Result;
use crate::types::{Document, KeywordWeight};

// ============================================================================
// TextNormalizer: processed-view normalization
// ============================================================================

/// Produces the processed view of a sentence used for keyword matching.
///
/// Injected into the segmenter; the scorer never re-normalizes.
///
/// # Contract
///
/// - Output must be stable for equal input.
/// - Calling `normalize` on its own output should not change it.
pub trait TextNormalizer {
    fn normalize(&self, text: &str) -> String;
}

/// Passes text through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNormalizer;

impl TextNormalizer for IdentityNormalizer {
    #[inline]
    fn normalize(&self, text: &str) -> String {
        text.to_string()
    }
}

// ============================================================================
// Segmenter: raw text to aligned sentence views
// ============================================================================

/// Splits raw text into a [`Document`] of aligned original and processed
/// sentences.
pub trait Segmenter {
    fn segment(&self, text: &str) -> Result<Document>;
}

// ============================================================================
// KeywordExtractor: weighted keywords for a document
// ============================================================================

/// Produces `(keyword, raw importance)` pairs, lower importance first in
/// significance.
///
/// Receives the processed sentences joined by single spaces.
pub trait KeywordExtractor {
    fn extract(&self, text: &str) -> Vec<KeywordWeight>;
}

/// Returns a fixed keyword list regardless of input.
///
/// Useful when keywords come from an external extraction service.
#[derive(Debug, Clone, Default)]
pub struct StaticKeywords {
    keywords: Vec<KeywordWeight>,
}

impl StaticKeywords {
    pub fn new<I, K>(keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<KeywordWeight>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

impl KeywordExtractor for StaticKeywords {
    fn extract(&self, _text: &str) -> Vec<KeywordWeight> {
        self.keywords.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_normalizer_preserves_text() {
        assert_eq!(IdentityNormalizer.normalize("Keep  AS is\n"), "Keep  AS is\n");
    }

    #[test]
    fn test_static_keywords_ignore_input() {
        let extractor = StaticKeywords::new([("alpha", 0.1), ("beta", 0.2)]);
        let first = extractor.extract("anything");
        let second = extractor.extract("");

        assert_eq!(first, second);
        assert_eq!(first[0], KeywordWeight::new("alpha", 0.1));
    }

    #[test]
    fn test_custom_segmenter_as_trait_object() {
        struct OnePerLine;

        impl Segmenter for OnePerLine {
            fn segment(&self, text: &str) -> Result<Document> {
                let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
                let processed: Vec<String> = lines.iter().map(|l| l.to_lowercase()).collect();
                Document::from_views(lines, processed)
            }
        }

        let segmenter: Box<dyn Segmenter> = Box::new(OnePerLine);
        let doc = segmenter.segment("First Line\n\nSecond Line").unwrap();

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.sentences()[1].processed, "second line");
    }

    #[test]
    fn test_keyword_extractor_as_trait_object() {
        let extractor: Box<dyn KeywordExtractor> = Box::new(StaticKeywords::default());
        assert!(extractor.extract("text").is_empty());
    }
}
