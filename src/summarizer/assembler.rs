//! Maps a selection back to original sentence text.

use crate::errors::{Result, SummarizeError};
use crate::types::{Document, Selection};

/// Turns selected indices into trimmed original sentences, in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryAssembler;

impl SummaryAssembler {
    pub fn new() -> Self {
        Self
    }

    pub fn assemble(&self, document: &Document, selection: &Selection) -> Result<Vec<String>> {
        selection
            .iter()
            .map(|index| {
                document
                    .get(index)
                    .map(|s| s.original.trim().to_string())
                    .ok_or_else(|| {
                        SummarizeError::MisalignedInput(format!(
                            "selected index {index} is outside a {}-sentence document",
                            document.len()
                        ))
                    })
            })
            .collect()
    }
}
