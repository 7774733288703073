//! First-class pipeline artifacts.
//!
//! Each type is a typed intermediate result flowing between pipeline stages.
//! [`TokenStream`] is produced by the tokenizer and read by every later
//! stage; [`Summary`] is the public-facing output, the stability boundary
//! handed to renderers.

use serde::Serialize;

use crate::types::{Sentence, SentenceScore, Token};

/// Sentences of a passage and the flat stream of their word tokens.
///
/// Sentence indices run `0..n` in passage order and each sentence owns the
/// contiguous token range `start_token..end_token`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    sentences: Vec<Sentence>,
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn from_parts(sentences: Vec<Sentence>, tokens: Vec<Token>) -> Self {
        Self { sentences, tokens }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Mutable token access for stages that annotate tokens in place.
    pub fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    /// Tokens belonging to `sentence`.
    pub fn sentence_tokens(&self, sentence: &Sentence) -> &[Token] {
        &self.tokens[sentence.start_token..sentence.end_token]
    }

    pub fn num_sentences(&self) -> usize {
        self.sentences.len()
    }

    /// Number of tokens in the stream.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn into_sentences(self) -> Vec<Sentence> {
        self.sentences
    }
}

/// How a summary was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// The passage had no more sentences than requested; nothing was scored.
    Verbatim,
    /// Sentences were scored and the top ones kept.
    Ranked,
}

/// One sentence of a summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarySentence {
    /// Original position in the passage
    pub index: usize,
    pub text: String,
    /// Sentence score; `None` for verbatim summaries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Ordered extractive summary.
///
/// Sentences are always in ascending original-index order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub sentences: Vec<SummarySentence>,
    pub mode: SelectionMode,
    /// Number of sentences the caller asked for
    pub requested: usize,
    /// Number of sentences in the passage
    pub total_sentences: usize,
}

impl Summary {
    /// Summary holding every sentence of the passage, unscored.
    pub fn verbatim(sentences: Vec<Sentence>, requested: usize) -> Self {
        let total_sentences = sentences.len();
        Self {
            sentences: sentences
                .into_iter()
                .map(|s| SummarySentence {
                    index: s.index,
                    text: s.text,
                    score: None,
                })
                .collect(),
            mode: SelectionMode::Verbatim,
            requested,
            total_sentences,
        }
    }

    /// Summary built from selected scores, which must already be in passage
    /// order.
    pub fn ranked(sentences: &[Sentence], selected: &[SentenceScore], requested: usize) -> Self {
        Self {
            sentences: selected
                .iter()
                .filter_map(|s| {
                    sentences.get(s.index).map(|sentence| SummarySentence {
                        index: s.index,
                        text: sentence.text.clone(),
                        score: Some(s.score),
                    })
                })
                .collect(),
            mode: SelectionMode::Ranked,
            requested,
            total_sentences: sentences.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Sentence texts in order.
    pub fn texts(&self) -> Vec<&str> {
        self.sentences.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn into_texts(self) -> Vec<String> {
        self.sentences.into_iter().map(|s| s.text).collect()
    }

    /// Render as a numbered list, one sentence per line (`"1. ..."`).
    pub fn to_numbered_list(&self) -> String {
        self.sentences
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {}", i + 1, s.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(index: usize, text: &str) -> Sentence {
        Sentence {
            text: text.to_string(),
            start: 0,
            end: text.len(),
            index,
            start_token: 0,
            end_token: 0,
        }
    }

    #[test]
    fn test_verbatim_keeps_all_sentences() {
        let summary = Summary::verbatim(vec![sentence(0, "One."), sentence(1, "Two.")], 5);
        assert_eq!(summary.mode, SelectionMode::Verbatim);
        assert_eq!(summary.texts(), vec!["One.", "Two."]);
        assert_eq!(summary.total_sentences, 2);
        assert!(summary.sentences.iter().all(|s| s.score.is_none()));
    }

    #[test]
    fn test_ranked_uses_selected_indices() {
        let sentences = vec![sentence(0, "A."), sentence(1, "B."), sentence(2, "C.")];
        let selected = [SentenceScore::new(0, 0.5), SentenceScore::new(2, 0.25)];
        let summary = Summary::ranked(&sentences, &selected, 2);
        assert_eq!(summary.mode, SelectionMode::Ranked);
        assert_eq!(summary.texts(), vec!["A.", "C."]);
        assert_eq!(summary.sentences[1].score, Some(0.25));
        assert_eq!(summary.total_sentences, 3);
    }

    #[test]
    fn test_numbered_list() {
        let summary = Summary::verbatim(vec![sentence(0, "One."), sentence(1, "Two.")], 2);
        assert_eq!(summary.to_numbered_list(), "1. One.\n2. Two.");
    }

    #[test]
    fn test_serialized_shape() {
        let summary = Summary::verbatim(vec![sentence(0, "One."), sentence(1, "Two.")], 3);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["mode"], "verbatim");
        assert_eq!(json["requested"], 3);
        assert_eq!(json["sentences"][1]["text"], "Two.");
        assert!(json["sentences"][0].get("score").is_none());
    }

    #[test]
    fn test_empty_token_stream() {
        let stream = TokenStream::default();
        assert!(stream.is_empty());
        assert_eq!(stream.num_sentences(), 0);
    }
}
