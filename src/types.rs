//! Core data types shared across the summarization pipeline.

use serde::Serialize;

/// Default number of sentences in a summary.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 2;

/// Minimum number of sentences a passage needs before it can be summarized.
pub const MIN_PASSAGE_SENTENCES: usize = 2;

/// A word token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form as it appears in the passage
    pub text: String,
    /// Lowercased form used for frequency lookups
    pub normalized: String,
    /// Byte offset of the token start in the passage
    pub start: usize,
    /// Byte offset of the token end in the passage
    pub end: usize,
    /// Index of the sentence this token belongs to
    pub sentence_idx: usize,
    /// Position of the token in the passage-wide token stream
    pub token_idx: usize,
    /// Whether the token counts toward word frequencies
    pub is_content: bool,
}

impl Token {
    /// Create a new token. `is_content` starts out `false` and is set by the
    /// stopword stage.
    pub fn new(
        text: impl Into<String>,
        start: usize,
        end: usize,
        sentence_idx: usize,
        token_idx: usize,
    ) -> Self {
        let text = text.into();
        let normalized = text.to_lowercase();
        Self {
            text,
            normalized,
            start,
            end,
            sentence_idx,
            token_idx,
            is_content: false,
        }
    }
}

/// A sentence of the passage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Sentence text, trimmed
    pub text: String,
    /// Byte offset of the sentence start in the passage
    pub start: usize,
    /// Byte offset of the sentence end in the passage
    pub end: usize,
    /// Original position of the sentence in the passage
    pub index: usize,
    /// First token of the sentence in the token stream
    pub start_token: usize,
    /// One past the last token of the sentence in the token stream
    pub end_token: usize,
}

impl Sentence {
    /// Number of word tokens in the sentence, punctuation included.
    pub fn token_count(&self) -> usize {
        self.end_token - self.start_token
    }
}

/// Score assigned to a sentence by the ranker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceScore {
    /// Original position of the sentence
    pub index: usize,
    /// Aggregate content-word frequency normalized by sentence length
    pub score: f64,
}

impl SentenceScore {
    pub fn new(index: usize, score: f64) -> Self {
        Self { index, score }
    }
}

/// Resolved summarizer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryConfig {
    /// Language whose stopwords and abbreviations are loaded
    pub language: String,
    /// Number of sentences to select when the caller does not say
    pub num_sentences: usize,
    /// Reject passages longer than this many bytes
    pub max_chars: Option<usize>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            num_sentences: DEFAULT_SUMMARY_SENTENCES,
            max_chars: None,
        }
    }
}

/// Size statistics for a passage, shown next to the input before summarizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PassageStats {
    /// Sentence count according to the tokenizer
    pub sentences: usize,
    /// Whitespace-separated word count
    pub words: usize,
}
