//! Sentence segmentation
//!
//! Splits raw text on terminal punctuation and blank lines, producing a
//! [`Document`] whose processed view comes from an injected
//! [`TextNormalizer`].

use crate::errors::Result;
use crate::pipeline::traits::{Segmenter, TextNormalizer};
use crate::types::Document;

use super::normalizer::DefaultNormalizer;

/// Rule-based sentence splitter.
///
/// A sentence ends after a run of `.`, `!` or `?` (plus closing quotes or
/// brackets) that is followed by whitespace or the end of the text, or at a
/// blank line.
#[derive(Debug, Clone, Default)]
pub struct PunctuationSegmenter<N = DefaultNormalizer> {
    normalizer: N,
}

impl PunctuationSegmenter<DefaultNormalizer> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: TextNormalizer> PunctuationSegmenter<N> {
    pub fn with_normalizer(normalizer: N) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &N {
        &self.normalizer
    }

    /// Split `text` into trimmed, non-empty sentence slices.
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            let end = if is_terminal(c) {
                let mut end = i + c.len_utf8();
                while let Some(&(j, next)) = chars.peek() {
                    if !is_terminal(next) && !is_closing(next) {
                        break;
                    }
                    end = j + next.len_utf8();
                    chars.next();
                }
                match chars.peek() {
                    None => Some(end),
                    Some(&(_, next)) if next.is_whitespace() => Some(end),
                    _ => None,
                }
            } else if c == '\n' && starts_blank_line(&text[i + 1..]) {
                Some(i)
            } else {
                None
            };

            if let Some(end) = end {
                push_trimmed(&mut sentences, &text[start..end]);
                start = end;
            }
        }
        push_trimmed(&mut sentences, &text[start..]);

        sentences
    }
}

impl<N: TextNormalizer> Segmenter for PunctuationSegmenter<N> {
    fn segment(&self, text: &str) -> Result<Document> {
        let original = self.split(text);
        let processed: Vec<String> = original
            .iter()
            .map(|s| self.normalizer.normalize(s))
            .collect();
        Document::from_views(original, processed)
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '”' | '’')
}

/// `rest` begins with optional inline whitespace followed by another newline.
fn starts_blank_line(rest: &str) -> bool {
    rest.chars()
        .find(|&ch| ch == '\n' || !ch.is_whitespace())
        .is_some_and(|ch| ch == '\n')
}

fn push_trimmed<'t>(out: &mut Vec<&'t str>, fragment: &'t str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        out.push(trimmed);
    }
}
