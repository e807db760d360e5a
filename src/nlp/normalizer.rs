//! Text normalization for the processed sentence view.

use crate::pipeline::traits::TextNormalizer;

/// Lowercases, drops line breaks, and collapses runs of whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNormalizer;

impl TextNormalizer for DefaultNormalizer {
    fn normalize(&self, text: &str) -> String {
        // split_whitespace also swallows \n and \r
        text.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_collapses() {
        let out = DefaultNormalizer.normalize("  The QUICK\n brown\t\tFox. ");
        assert_eq!(out, "the quick brown fox.");
    }

    #[test]
    fn test_crlf_line_breaks() {
        assert_eq!(DefaultNormalizer.normalize("one\r\ntwo"), "one two");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(DefaultNormalizer.normalize(" \n "), "");
    }

    #[test]
    fn test_idempotent() {
        let once = DefaultNormalizer.normalize("Mixed  CASE\ntext");
        assert_eq!(DefaultNormalizer.normalize(&once), once);
    }
}
