//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! The [`SummaryPipeline`] struct holds a statically-composed segmenter and
//! keyword extractor. Calling [`SummaryPipeline::run`] executes the stages in
//! order, threading artifacts between them and notifying a
//! [`PipelineObserver`] at each boundary.
//!
//! Stages:
//! 1. Segment raw text into a [`Document`]
//! 2. Extract keywords into a [`KeywordTable`]
//! 3. Score sentences
//! 4. Select sentence indices
//! 5. Assemble the summary text
//!
//! Stages 3 to 5 form the core and can be driven directly with
//! [`SummaryPipeline::summarize_document`] when sentences and keywords come
//! from elsewhere.

use rayon::prelude::*;

use crate::errors::{Result, SummarizeError};
use crate::nlp::keywords::StatisticalKeywordExtractor;
use crate::nlp::segmenter::PunctuationSegmenter;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReportBuilder, STAGE_ASSEMBLE,
    STAGE_KEYWORDS, STAGE_SCORE, STAGE_SEGMENT, STAGE_SELECT,
};
use crate::pipeline::traits::{KeywordExtractor, Segmenter};
use crate::summarizer::assembler::SummaryAssembler;
use crate::summarizer::keyword_table::KeywordTable;
use crate::summarizer::scorer::SentenceScorer;
use crate::summarizer::selector::{validate_fraction, SelectorConfig, SentenceSelector};
use crate::types::{Document, Summary, SummaryConfig};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// SummaryPipeline: statically-composed stage container
// ============================================================================

/// A summarization pipeline composed of concrete stage implementations.
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `Seg` | [`Segmenter`] | [`PunctuationSegmenter`] |
/// | `Kx`  | [`KeywordExtractor`] | [`StatisticalKeywordExtractor`] |
#[derive(Debug, Clone)]
///
/// Stages and configuration are fixed once built; use [`PipelineBuilder`]
/// to assemble a different combination.
pub struct SummaryPipeline<Seg, Kx> {
    segmenter: Seg,
    extractor: Kx,
    config: SummaryConfig,
}

/// Type alias for the pipeline built from the crate's own stages.
pub type DefaultSummaryPipeline = SummaryPipeline<PunctuationSegmenter, StatisticalKeywordExtractor>;

impl DefaultSummaryPipeline {
    /// Build the default pipeline with [`SummaryConfig::default`].
    pub fn default_pipeline() -> Self {
        Self::from_config(SummaryConfig::default())
    }

    /// Build the default pipeline; the keyword extractor follows
    /// `config.keywords`.
    pub fn from_config(config: SummaryConfig) -> Self {
        SummaryPipeline {
            segmenter: PunctuationSegmenter::new(),
            extractor: StatisticalKeywordExtractor::new(config.keywords.clone()),
            config,
        }
    }
}

impl<Seg, Kx> SummaryPipeline<Seg, Kx> {
    pub fn segmenter(&self) -> &Seg {
        &self.segmenter
    }

    pub fn extractor(&self) -> &Kx {
        &self.extractor
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }
}

// ============================================================================
// SummaryPipeline::run: execute stages in order
// ============================================================================

impl<Seg, Kx> SummaryPipeline<Seg, Kx>
where
    Seg: Segmenter,
    Kx: KeywordExtractor,
{
    /// Summarize raw text.
    ///
    /// The configuration is validated before segmentation, and an empty
    /// document is rejected before keyword extraction.
    pub fn run(&self, text: &str, observer: &mut impl PipelineObserver) -> Result<Summary> {
        self.config.validate()?;

        // Stage 1: Segment
        let document = {
            trace_stage!(STAGE_SEGMENT);
            observer.on_stage_start(STAGE_SEGMENT);
            let clock = StageClock::start();
            let document = self.segmenter.segment(text)?;
            let report = StageReportBuilder::new(clock.elapsed())
                .items(document.len())
                .build();
            observer.on_stage_end(STAGE_SEGMENT, &report);
            observer.on_document(&document);
            document
        };

        if document.is_empty() {
            return Err(SummarizeError::EmptyDocument);
        }

        // Stage 2: Extract keywords
        let table = {
            trace_stage!(STAGE_KEYWORDS);
            observer.on_stage_start(STAGE_KEYWORDS);
            let clock = StageClock::start();
            let table = KeywordTable::new(self.extractor.extract(&document.processed_text()))?;
            let report = StageReportBuilder::new(clock.elapsed())
                .items(table.len())
                .build();
            observer.on_stage_end(STAGE_KEYWORDS, &report);
            observer.on_keywords(&table);
            table
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = document.len(),
            keywords = table.len(),
            "document prepared"
        );

        self.summarize_document(&document, &table, observer)
    }

    /// Score, select, and assemble a summary from an already segmented
    /// document and its keyword table.
    pub fn summarize_document(
        &self,
        document: &Document,
        keywords: &KeywordTable,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        validate_fraction(self.config.summary_fraction)?;
        if document.is_empty() {
            return Err(SummarizeError::EmptyDocument);
        }

        // Stage 3: Score
        let scores = {
            trace_stage!(STAGE_SCORE);
            observer.on_stage_start(STAGE_SCORE);
            let clock = StageClock::start();
            let scores = SentenceScorer::new().score(keywords, document.sentences());
            let report = StageReportBuilder::new(clock.elapsed())
                .items(scores.len())
                .build();
            observer.on_stage_end(STAGE_SCORE, &report);
            observer.on_scores(&scores);
            scores
        };

        // Stage 4: Select
        let selection = {
            trace_stage!(STAGE_SELECT);
            observer.on_stage_start(STAGE_SELECT);
            let clock = StageClock::start();
            let selection = SentenceSelector::with_config(SelectorConfig::from(&self.config))
                .select(&scores, document.len())?;
            let report = StageReportBuilder::new(clock.elapsed())
                .items(selection.len())
                .build();
            observer.on_stage_end(STAGE_SELECT, &report);
            observer.on_selection(&selection);
            selection
        };

        // Stage 5: Assemble
        let sentences = {
            trace_stage!(STAGE_ASSEMBLE);
            observer.on_stage_start(STAGE_ASSEMBLE);
            let clock = StageClock::start();
            let sentences = SummaryAssembler::new().assemble(document, &selection)?;
            let report = StageReportBuilder::new(clock.elapsed())
                .items(sentences.len())
                .build();
            observer.on_stage_end(STAGE_ASSEMBLE, &report);
            sentences
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            total = document.len(),
            selected = selection.len(),
            "summary assembled"
        );

        Ok(Summary {
            sentences,
            selection,
            scores: self.config.include_scores.then_some(scores),
        })
    }
}

impl<Seg, Kx> SummaryPipeline<Seg, Kx>
where
    Seg: Segmenter + Sync,
    Kx: KeywordExtractor + Sync,
{
    /// Summarize many documents in parallel.
    ///
    /// Each document is processed independently; results keep input order.
    pub fn run_batch<S>(&self, texts: &[S]) -> Vec<Result<Summary>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.run(text.as_ref(), &mut NoopObserver))
            .collect()
    }
}

// ============================================================================
// PipelineBuilder: fluent construction with custom stages
// ============================================================================

/// Fluent builder for a [`SummaryPipeline`] with custom stages.
///
/// Starts from the default stages and allows overriding each one.
///
/// ```
/// # use rapid_summarizer::pipeline::runner::PipelineBuilder;
/// # use rapid_summarizer::pipeline::traits::StaticKeywords;
/// let pipeline = PipelineBuilder::new()
///     .extractor(StaticKeywords::new([("rust", 0.05)]))
///     .summary_fraction(0.5)
///     .build();
/// ```
pub struct PipelineBuilder<Seg = PunctuationSegmenter, Kx = StatisticalKeywordExtractor> {
    segmenter: Seg,
    extractor: Kx,
    config: SummaryConfig,
}

impl PipelineBuilder {
    /// Start building from the default stages.
    pub fn new() -> Self {
        Self::from_config(SummaryConfig::default())
    }

    /// Start from default stages configured by `config`.
    pub fn from_config(config: SummaryConfig) -> Self {
        PipelineBuilder {
            segmenter: PunctuationSegmenter::new(),
            extractor: StatisticalKeywordExtractor::new(config.keywords.clone()),
            config,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Seg, Kx> PipelineBuilder<Seg, Kx> {
    /// Override the segmenter stage.
    pub fn segmenter<S: Segmenter>(self, s: S) -> PipelineBuilder<S, Kx> {
        PipelineBuilder {
            segmenter: s,
            extractor: self.extractor,
            config: self.config,
        }
    }

    /// Override the keyword extraction stage.
    pub fn extractor<K: KeywordExtractor>(self, k: K) -> PipelineBuilder<Seg, K> {
        PipelineBuilder {
            segmenter: self.segmenter,
            extractor: k,
            config: self.config,
        }
    }

    pub fn summary_fraction(mut self, fraction: f64) -> Self {
        self.config.summary_fraction = fraction;
        self
    }

    pub fn include_scores(mut self, include: bool) -> Self {
        self.config.include_scores = include;
        self
    }

    pub fn build(self) -> SummaryPipeline<Seg, Kx> {
        SummaryPipeline {
            segmenter: self.segmenter,
            extractor: self.extractor,
            config: self.config,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
