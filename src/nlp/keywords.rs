//! Statistical keyword extraction
//!
//! Unsupervised, single-document keyword scoring where a lower score marks
//! a more important keyword.
//!
//! Word score: `S(w) = (1 + distinct_neighbors(w) / neighbors(w)) / tf(w)`,
//! with neighbors counted within `window_size` tokens. Words that appear
//! often and in consistent company score low.
//!
//! Candidate score: `S(kw) = Π S(w) / (tf(kw) * (1 + Σ S(w)))` over the
//! words of an n-gram.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::stopwords::StopwordFilter;
use crate::errors::{Result, SummarizeError};
use crate::pipeline::traits::KeywordExtractor;
use crate::types::KeywordWeight;

/// String similarity used to drop near-duplicate keywords.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupAlgorithm {
    /// Normalized Levenshtein similarity
    #[default]
    #[serde(alias = "leve")]
    Levenshtein,
    /// Jaro similarity
    Jaro,
}

impl DedupAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Levenshtein => "levenshtein",
            Self::Jaro => "jaro",
        }
    }

    /// Similarity in [0, 1]; 1 means identical.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        match self {
            Self::Levenshtein => levenshtein_ratio(a, b),
            Self::Jaro => jaro(a, b),
        }
    }
}

/// Settings for [`StatisticalKeywordExtractor`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordExtractorConfig {
    /// Stopword language
    pub language: String,
    /// Longest n-gram considered as a keyword
    pub max_ngram_size: usize,
    /// Candidates more similar than this to a kept keyword are dropped
    pub dedup_threshold: f64,
    pub dedup_algorithm: DedupAlgorithm,
    /// Neighbor window on each side of a word
    pub window_size: usize,
    /// Number of keywords returned
    pub num_keywords: usize,
}

impl Default for KeywordExtractorConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            max_ngram_size: 3,
            dedup_threshold: 0.9,
            dedup_algorithm: DedupAlgorithm::Levenshtein,
            window_size: 1,
            num_keywords: 20,
        }
    }
}

impl KeywordExtractorConfig {
    pub fn validate(&self) -> Result<()> {
        let positive: [(&'static str, usize); 3] = [
            ("max_ngram_size", self.max_ngram_size),
            ("window_size", self.window_size),
            ("num_keywords", self.num_keywords),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(SummarizeError::invalid_parameter(
                    name,
                    "must be greater than 0",
                ));
            }
        }

        if !(0.0..=1.0).contains(&self.dedup_threshold) {
            return Err(SummarizeError::invalid_parameter(
                "dedup_threshold",
                format!("must be in [0, 1], got {}", self.dedup_threshold),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
struct WordStats<'t> {
    tf: usize,
    neighbors: usize,
    distinct: FxHashSet<&'t str>,
}

impl WordStats<'_> {
    fn score(&self) -> f64 {
        let spread = if self.neighbors == 0 {
            0.0
        } else {
            self.distinct.len() as f64 / self.neighbors as f64
        };
        (1.0 + spread) / self.tf as f64
    }
}

struct Candidate<'t> {
    words: Vec<&'t str>,
    count: usize,
}

/// Keyword extractor over normalized (lowercased) text.
#[derive(Debug, Clone)]
pub struct StatisticalKeywordExtractor {
    config: KeywordExtractorConfig,
    stopwords: StopwordFilter,
}

impl Default for StatisticalKeywordExtractor {
    fn default() -> Self {
        Self::new(KeywordExtractorConfig::default())
    }
}

impl StatisticalKeywordExtractor {
    pub fn new(config: KeywordExtractorConfig) -> Self {
        let stopwords = StopwordFilter::new(&config.language);
        Self { config, stopwords }
    }

    /// Replace the language's stopword list.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn config(&self) -> &KeywordExtractorConfig {
        &self.config
    }

    /// Split text into runs of words that keywords may not cross.
    ///
    /// A run breaks wherever a whitespace token carries leading or trailing
    /// punctuation, so every n-gram joined by single spaces also occurs in
    /// the source text.
    fn segments<'t>(text: &'t str) -> Vec<Vec<&'t str>> {
        let mut segments = Vec::new();
        let mut current: Vec<&'t str> = Vec::new();

        for raw in text.split_whitespace() {
            let word = raw.trim_matches(|c: char| !c.is_alphanumeric());
            let leading = raw.starts_with(|c: char| !c.is_alphanumeric());
            let trailing = raw.ends_with(|c: char| !c.is_alphanumeric());

            if leading && !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            if !word.is_empty() {
                current.push(word);
            }
            if trailing && !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        segments
    }

    fn word_stats<'t>(&self, segments: &[Vec<&'t str>]) -> FxHashMap<&'t str, WordStats<'t>> {
        let window = self.config.window_size;
        let mut stats: FxHashMap<&'t str, WordStats<'t>> = FxHashMap::default();

        for segment in segments {
            for (i, &word) in segment.iter().enumerate() {
                let entry = stats.entry(word).or_default();
                entry.tf += 1;

                let lo = i.saturating_sub(window);
                let hi = (i + window + 1).min(segment.len());
                for (j, &neighbor) in segment.iter().enumerate().take(hi).skip(lo) {
                    if j != i {
                        entry.neighbors += 1;
                        entry.distinct.insert(neighbor);
                    }
                }
            }
        }

        stats
    }

    fn is_boundary_word(&self, word: &str) -> bool {
        !self.stopwords.is_stopword(word)
    }

    fn candidates<'t>(&self, segments: &[Vec<&'t str>]) -> FxHashMap<String, Candidate<'t>> {
        let mut candidates: FxHashMap<String, Candidate<'t>> = FxHashMap::default();

        for segment in segments {
            for n in 1..=self.config.max_ngram_size.min(segment.len()) {
                for gram in segment.windows(n) {
                    let (first, last) = (gram[0], gram[n - 1]);
                    if !self.is_boundary_word(first) || !self.is_boundary_word(last) {
                        continue;
                    }
                    if !gram.iter().all(|w| w.chars().any(char::is_alphabetic)) {
                        continue;
                    }

                    candidates
                        .entry(gram.join(" "))
                        .or_insert_with(|| Candidate {
                            words: gram.to_vec(),
                            count: 0,
                        })
                        .count += 1;
                }
            }
        }

        candidates
    }
}

impl KeywordExtractor for StatisticalKeywordExtractor {
    fn extract(&self, text: &str) -> Vec<KeywordWeight> {
        let segments = Self::segments(text);
        let stats = self.word_stats(&segments);

        let mut scored: Vec<KeywordWeight> = self
            .candidates(&segments)
            .into_iter()
            .map(|(term, candidate)| {
                let word_scores: Vec<f64> = candidate
                    .words
                    .iter()
                    .map(|w| stats.get(w).map_or(1.0, WordStats::score))
                    .collect();
                let product: f64 = word_scores.iter().product();
                let sum: f64 = word_scores.iter().sum();
                let score = product / (candidate.count as f64 * (1.0 + sum));
                KeywordWeight::new(term, score)
            })
            .collect();

        scored.sort_by(|a, b| {
            a.raw_importance
                .total_cmp(&b.raw_importance)
                .then_with(|| a.term.cmp(&b.term))
        });

        let algorithm = self.config.dedup_algorithm;
        let threshold = self.config.dedup_threshold;
        let mut kept: Vec<KeywordWeight> = Vec::with_capacity(self.config.num_keywords);

        for keyword in scored {
            if kept.len() >= self.config.num_keywords {
                break;
            }
            let duplicate = kept
                .iter()
                .any(|k| algorithm.similarity(&k.term, &keyword.term) > threshold);
            if !duplicate {
                kept.push(keyword);
            }
        }

        kept
    }
}

fn levenshtein_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    1.0 - prev[b.len()] as f64 / longest as f64
}

fn jaro(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let reach = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_hit = vec![false; a.len()];
    let mut b_hit = vec![false; b.len()];
    let mut matches = 0usize;

    for i in 0..a.len() {
        let lo = i.saturating_sub(reach);
        let hi = (i + reach + 1).min(b.len());
        for j in lo..hi {
            if !b_hit[j] && a[i] == b[j] {
                a_hit[i] = true;
                b_hit[j] = true;
                matches += 1;
                break;
            }
        }
    }
    if matches == 0 {
        return 0.0;
    }

    let a_matched = a.iter().zip(&a_hit).filter(|(_, hit)| **hit).map(|(c, _)| c);
    let b_matched = b.iter().zip(&b_hit).filter(|(_, hit)| **hit).map(|(c, _)| c);
    let transpositions = a_matched.zip(b_matched).filter(|(x, y)| x != y).count() / 2;

    let m = matches as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - transpositions as f64) / m) / 3.0
}
