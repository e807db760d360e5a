//! Summarization components
//!
//! Keyword-weighted extractive summarization: a [`keyword_table::KeywordTable`]
//! feeds the [`scorer::SentenceScorer`], whose scores drive the
//! [`selector::SentenceSelector`]; the [`assembler::SummaryAssembler`] turns
//! the selection back into text.

pub mod assembler;
pub mod keyword_table;
pub mod scorer;
pub mod selector;
