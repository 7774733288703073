//! Sentence scoring by aggregate content-word frequency.

use super::frequency::WordFrequencyMap;
use crate::pipeline::artifacts::TokenStream;
use crate::types::{Sentence, SentenceScore};

/// Score every sentence of `stream`, in index order.
///
/// `score = Σ freq(content tokens) / (token count + 1)`, where the token
/// count includes stopwords and punctuation.
pub fn score_sentences(stream: &TokenStream, freqs: &WordFrequencyMap) -> Vec<SentenceScore> {
    stream
        .sentences()
        .iter()
        .map(|s| SentenceScore::new(s.index, score_sentence(stream, s, freqs)))
        .collect()
}

/// Score a single sentence.
pub fn score_sentence(stream: &TokenStream, sentence: &Sentence, freqs: &WordFrequencyMap) -> f64 {
    let tokens = stream.sentence_tokens(sentence);
    let total: u64 = tokens
        .iter()
        .filter(|t| t.is_content)
        .map(|t| u64::from(freqs.get(&t.normalized)))
        .sum();
    total as f64 / (tokens.len() + 1) as f64
}
