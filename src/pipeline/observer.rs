//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Every hook has an empty default, so an observer only
//! implements what it needs.

use std::time::{Duration, Instant};

use crate::summarizer::keyword_table::KeywordTable;
use crate::types::{Document, SentenceScores, Selection};

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_KEYWORDS: &str = "keywords";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";
pub const STAGE_ASSEMBLE: &str = "assemble";

/// Stage names in execution order.
pub const STAGES: [&str; 5] = [
    STAGE_SEGMENT,
    STAGE_KEYWORDS,
    STAGE_SCORE,
    STAGE_SELECT,
    STAGE_ASSEMBLE,
];

/// Wall-clock timer for a single stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What a stage reports when it finishes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    pub elapsed: Duration,
    /// Number of items the stage produced (sentences, keywords, ...)
    pub items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }
}

/// Fluent construction of a [`StageReport`].
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn items(mut self, items: usize) -> Self {
        self.report.items = Some(items);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Callbacks fired by [`super::runner::SummaryPipeline`].
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_document(&mut self, _document: &Document) {}

    fn on_keywords(&mut self, _keywords: &KeywordTable) {}

    fn on_scores(&mut self, _scores: &SentenceScores) {}

    fn on_selection(&mut self, _selection: &Selection) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Records how long each stage took, in execution order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    timings: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timings(&self) -> &[(&'static str, StageReport)] {
        &self.timings
    }

    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.timings
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    pub fn total(&self) -> Duration {
        self.timings.iter().map(|(_, r)| r.elapsed).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.timings.push((stage, report.clone()));
    }
}
