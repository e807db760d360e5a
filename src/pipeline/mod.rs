//! Summarization pipeline
//!
//! Stage traits, the statically-composed runner, observers, and the JSON
//! spec layer with its validation engine.

pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod traits;
pub mod validation;
