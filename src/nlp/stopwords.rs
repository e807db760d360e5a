//! Stopword lists
//!
//! Keyword candidates may not start or end with a stopword. Lists come from
//! the `stop-words` crate, with a short built-in list for Chinese.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Language codes (and names) that have a stopword list.
const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "english", "de", "german", "fr", "french", "es", "spanish", "it", "italian", "pt",
    "portuguese", "nl", "dutch", "ru", "russian", "sv", "swedish", "no", "norwegian", "da",
    "danish", "fi", "finnish", "hu", "hungarian", "tr", "turkish", "pl", "polish", "ar",
    "arabic", "zh", "chinese",
];

/// Whether `language` resolves to its own stopword list.
///
/// Unsupported languages fall back to English.
pub fn is_supported_language(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language.to_lowercase().as_str())
}

/// Lowercase stopword set for one language.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load(language),
        }
    }

    /// A filter that treats no word as a stopword.
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// `word` is expected to be lowercase already, as in processed text.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            "zh" | "chinese" => {
                return [
                    "的", "是", "在", "有", "和", "与", "或", "不", "了", "也", "就", "都", "这",
                    "那", "个", "为", "以", "但", "被", "把", "从", "到", "对", "于",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect();
            }
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }
}
