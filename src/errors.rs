//! Error types for summarization runs.
//!
//! Every error is raised before scoring begins: a failed precondition never
//! produces a partial or empty summary.

use thiserror::Error;

use crate::pipeline::validation::ValidationReport;

/// Errors surfaced to callers of the summarization pipeline.
#[derive(Error, Debug)]
pub enum SummarizeError {
    /// A configuration value is out of its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The document contains no sentences.
    #[error("document contains no sentences")]
    EmptyDocument,

    /// The original and processed sentence views disagree.
    #[error("misaligned input: {0}")]
    MisalignedInput(String),

    /// A JSON summary spec failed validation.
    #[error("invalid summary spec ({} error(s))", .0.errors().count())]
    InvalidSpec(ValidationReport),

    /// A JSON summary spec could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SummarizeError {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SummarizeError>;
