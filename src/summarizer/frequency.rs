//! Word frequency counting over a whole passage.

use rustc_hash::FxHashMap;

use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::artifacts::TokenStream;
use crate::types::Token;

/// Lowercase content word -> number of occurrences in the passage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyMap {
    counts: FxHashMap<String, u32>,
}

impl WordFrequencyMap {
    /// Count every content token (as marked by [`mark_content_words`]).
    pub fn build(tokens: &[Token]) -> Self {
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();
        for token in tokens.iter().filter(|t| t.is_content) {
            *counts.entry(token.normalized.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrence count of `word` (case-insensitive), 0 if absent.
    pub fn get(&self, word: &str) -> u32 {
        match self.counts.get(word) {
            Some(&count) => count,
            None => self.counts.get(&word.to_lowercase()).copied().unwrap_or(0),
        }
    }

    /// Number of distinct content words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of content-word occurrences.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// The `n` most frequent words, count descending, ties broken
    /// alphabetically.
    pub fn top_n(&self, n: usize) -> Vec<(&str, u32)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }
}

/// Set `is_content` on every token of the stream using `filter`.
///
/// Frequencies and sentence scores both read this flag, so the two always
/// agree on what a content word is.
pub fn mark_content_words(stream: &mut TokenStream, filter: &StopwordFilter) {
    for token in stream.tokens_mut() {
        token.is_content = filter.is_content_word(&token.text);
    }
}
