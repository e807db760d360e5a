//! # rapid-summarizer
//!
//! Keyword-weighted extractive summarization.
//!
//! Sentences are scored by the keywords they contain (each keyword adds
//! `ln(1 / importance)`, normalized by sentence length), the top
//! `ceil(fraction * n)` sentences are kept in reading order, and the first
//! sentence is always included.
//!
//! ```
//! let text = "Rust is a systems language. It has no garbage collector. \
//!             Ownership rules give Rust memory safety. Cargo builds projects.";
//! let summary = rapid_summarizer::summarize(text, 0.25).unwrap();
//! assert_eq!(summary.sentences[0], "Rust is a systems language.");
//! ```
//!
//! Sentences and keywords produced elsewhere go straight to the core with
//! [`summarize_sentences`].

pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod summarizer;
pub mod types;

pub use errors::{Result, SummarizeError};
pub use pipeline::observer::{NoopObserver, PipelineObserver, StageTimingObserver};
pub use pipeline::runner::{DefaultSummaryPipeline, PipelineBuilder, SummaryPipeline};
pub use pipeline::spec::SummarySpec;
pub use summarizer::keyword_table::KeywordTable;
pub use types::{
    Document, KeywordWeight, SentenceRecord, SentenceScores, Selection, Summary, SummaryConfig,
};

/// Summarize raw text with the built-in segmenter and keyword extractor.
pub fn summarize(text: &str, summary_fraction: f64) -> Result<Summary> {
    let config = SummaryConfig::default().with_summary_fraction(summary_fraction);
    DefaultSummaryPipeline::from_config(config).run(text, &mut NoopObserver)
}

/// Summarize pre-segmented sentences with externally supplied keywords.
///
/// `original` and `processed` must be index-aligned views of the same
/// sentences; `keywords` pairs each term with its raw importance (lower is
/// more important).
pub fn summarize_sentences<O, P, I, K>(
    original: Vec<O>,
    processed: Vec<P>,
    keywords: I,
    summary_fraction: f64,
) -> Result<Summary>
where
    O: Into<String>,
    P: Into<String>,
    I: IntoIterator<Item = K>,
    K: Into<KeywordWeight>,
{
    let config = SummaryConfig::default().with_summary_fraction(summary_fraction);
    summarizer::selector::validate_fraction(config.summary_fraction)?;

    let document = Document::from_views(original, processed)?;
    let table = KeywordTable::new(keywords)?;
    DefaultSummaryPipeline::from_config(config).summarize_document(
        &document,
        &table,
        &mut NoopObserver,
    )
}
