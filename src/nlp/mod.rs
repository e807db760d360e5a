//! Natural Language Processing components
//!
//! Built-in text normalization, sentence segmentation, stopword lists, and
//! statistical keyword extraction.

pub mod keywords;
pub mod normalizer;
pub mod segmenter;
pub mod stopwords;
