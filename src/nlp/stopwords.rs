//! Stopword filtering
//!
//! Stopword lists are the NLTK lists of the `stop-words` crate, with
//! built-in lists for Chinese and Japanese. The same [`StopwordFilter`]
//! decides content words both when counting frequencies and when scoring
//! sentences.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Language codes with a stopword list.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "de", "fr", "es", "it", "pt", "nl", "ru", "sv", "no", "da", "fi", "hu", "tr", "ar",
    "zh", "ja",
];

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a stopword filter for the given language, falling back to
    /// English for unknown languages.
    pub fn new(language: &str) -> Self {
        Self::for_language(language).unwrap_or_else(|| Self {
            stopwords: Self::load_stopwords(LANGUAGE::English),
        })
    }

    /// Create a stopword filter for the given language, or `None` if the
    /// language has no stopword list.
    pub fn for_language(language: &str) -> Option<Self> {
        let stopwords = match canonical_language(language)? {
            "zh" => Self::chinese_stopwords(),
            "ja" => Self::japanese_stopwords(),
            code => Self::load_stopwords(stop_words_language(code)?),
        };
        Some(Self { stopwords })
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Check if a token is a content word: non-empty, purely alphanumeric,
    /// and not a stopword.
    pub fn is_content_word(&self, token: &str) -> bool {
        !token.is_empty() && token.chars().all(char::is_alphanumeric) && !self.is_stopword(token)
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(lang: LANGUAGE) -> FxHashSet<String> {
        get(lang).iter().map(|s| s.to_string()).collect()
    }

    /// Common Chinese stopwords
    fn chinese_stopwords() -> FxHashSet<String> {
        [
            "的", "是", "在", "有", "和", "与", "或", "不", "了", "也", "就", "都", "而", "及",
            "这", "那", "个", "为", "以", "等", "但", "被", "给", "让", "把", "从", "到", "对",
            "将", "于", "能", "会", "可", "要", "很", "还", "更", "最", "只", "已", "又", "再",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    /// Common Japanese stopwords
    fn japanese_stopwords() -> FxHashSet<String> {
        [
            "の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "れ", "さ", "ある", "いる",
            "も", "する", "から", "な", "こと", "として", "い", "や", "など", "なっ", "ない",
            "この", "ため", "その", "あっ", "よう", "また", "もの", "という", "あり", "まで",
            "られ", "なる", "へ", "か", "だ", "これ", "によって", "により", "おり",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

/// Map a language name or code to its two-letter code.
pub fn canonical_language(language: &str) -> Option<&'static str> {
    let code = match language.trim().to_lowercase().as_str() {
        "en" | "english" => "en",
        "de" | "german" => "de",
        "fr" | "french" => "fr",
        "es" | "spanish" => "es",
        "it" | "italian" => "it",
        "pt" | "portuguese" => "pt",
        "nl" | "dutch" => "nl",
        "ru" | "russian" => "ru",
        "sv" | "swedish" => "sv",
        "no" | "norwegian" => "no",
        "da" | "danish" => "da",
        "fi" | "finnish" => "fi",
        "hu" | "hungarian" => "hu",
        "tr" | "turkish" => "tr",
        "ar" | "arabic" => "ar",
        "zh" | "chinese" => "zh",
        "ja" | "japanese" => "ja",
        _ => return None,
    };
    Some(code)
}

fn stop_words_language(code: &str) -> Option<LANGUAGE> {
    let lang = match code {
        "en" => LANGUAGE::English,
        "de" => LANGUAGE::German,
        "fr" => LANGUAGE::French,
        "es" => LANGUAGE::Spanish,
        "it" => LANGUAGE::Italian,
        "pt" => LANGUAGE::Portuguese,
        "nl" => LANGUAGE::Dutch,
        "ru" => LANGUAGE::Russian,
        "sv" => LANGUAGE::Swedish,
        "no" => LANGUAGE::Norwegian,
        "da" => LANGUAGE::Danish,
        "fi" => LANGUAGE::Finnish,
        "hu" => LANGUAGE::Hungarian,
        "tr" => LANGUAGE::Turkish,
        "ar" => LANGUAGE::Arabic,
        _ => return None,
    };
    Some(lang)
}
