//! Summary specification types.
//!
//! A [`SummarySpec`] is the JSON form of a [`SummaryConfig`]: every field is
//! optional and falls back to the library default. Specs are checked by the
//! [`super::validation::ValidationEngine`] before they are turned into a
//! config.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "summary_fraction": 0.25,
//!   "include_scores": false,
//!   "keywords": {
//!     "language": "en",
//!     "max_ngram_size": 3,
//!     "dedup_threshold": 0.9,
//!     "dedup_algorithm": "levenshtein",
//!     "window_size": 1,
//!     "num_keywords": 20
//!   },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::validation::ValidationEngine;
use crate::errors::{Result, SummarizeError};
use crate::nlp::keywords::DedupAlgorithm;
use crate::types::SummaryConfig;

/// Spec version understood by this crate.
pub const SPEC_VERSION: u32 = 1;

/// Top-level summary specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Share of sentences to keep, in (0, 1].
    #[serde(default)]
    pub summary_fraction: Option<f64>,

    /// Attach per-sentence scores to the output.
    #[serde(default)]
    pub include_scores: bool,

    /// Keyword extractor settings.
    #[serde(default)]
    pub keywords: KeywordSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Keyword extractor overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordSpec {
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub max_ngram_size: Option<usize>,

    #[serde(default)]
    pub dedup_threshold: Option<f64>,

    #[serde(default)]
    pub dedup_algorithm: Option<DedupAlgorithm>,

    #[serde(default)]
    pub window_size: Option<usize>,

    #[serde(default)]
    pub num_keywords: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl SummarySpec {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Overlay the spec on [`SummaryConfig::default`] without validating.
    pub fn to_config(&self) -> SummaryConfig {
        let mut cfg = SummaryConfig::default();
        if let Some(fraction) = self.summary_fraction {
            cfg.summary_fraction = fraction;
        }
        cfg.include_scores = self.include_scores;

        let kw = &self.keywords;
        if let Some(language) = &kw.language {
            cfg.keywords.language = language.clone();
        }
        if let Some(n) = kw.max_ngram_size {
            cfg.keywords.max_ngram_size = n;
        }
        if let Some(t) = kw.dedup_threshold {
            cfg.keywords.dedup_threshold = t;
        }
        if let Some(algo) = kw.dedup_algorithm {
            cfg.keywords.dedup_algorithm = algo;
        }
        if let Some(w) = kw.window_size {
            cfg.keywords.window_size = w;
        }
        if let Some(n) = kw.num_keywords {
            cfg.keywords.num_keywords = n;
        }
        cfg
    }

    /// Validate with the default rule set and build the config.
    ///
    /// Warnings are not fatal; any error yields
    /// [`SummarizeError::InvalidSpec`] carrying the full report.
    pub fn resolve(&self) -> Result<SummaryConfig> {
        let report = ValidationEngine::with_defaults().validate(self);

        #[cfg(feature = "tracing")]
        for warning in report.warnings() {
            tracing::warn!(%warning, "summary spec warning");
        }

        if report.has_errors() {
            return Err(SummarizeError::InvalidSpec(report));
        }
        Ok(self.to_config())
    }
}
