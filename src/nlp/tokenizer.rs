//! Sentence and word tokenization
//!
//! The [`Tokenizer`] trait is the seam between the summarizer and its
//! language data: implementations report readiness and produce sentence and
//! word spans, and the provided [`Tokenizer::tokenize`] turns those spans
//! into a [`TokenStream`]. [`RuleTokenizer`] is the built-in implementation.

use std::ops::Range;
use std::sync::Arc;

use super::resources::LanguageResources;
use crate::errors::{Result, SummarizeError};
use crate::pipeline::artifacts::TokenStream;
use crate::types::{Sentence, Token};

/// Splits a passage into sentences and sentences into word tokens.
pub trait Tokenizer {
    /// Whether the language data this tokenizer relies on is loaded.
    fn is_ready(&self) -> bool {
        true
    }

    /// Language code, used in error reports.
    fn language(&self) -> &str;

    /// Byte ranges of the sentences of `text`, in order. Ranges may include
    /// surrounding whitespace.
    fn sentence_spans(&self, text: &str) -> Vec<Range<usize>>;

    /// Byte ranges of the word tokens of `sentence`, in order.
    fn word_spans(&self, sentence: &str) -> Vec<Range<usize>>;

    /// Tokenize `text` into sentences and word tokens.
    ///
    /// Fails with RESOURCE_UNAVAILABLE when the tokenizer is not ready;
    /// no partial tokenization is attempted.
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        if !self.is_ready() {
            return Err(SummarizeError::resource("tokenizer", self.language()));
        }

        let mut sentences = Vec::new();
        let mut tokens = Vec::new();

        for span in self.sentence_spans(text) {
            let raw = text.get(span.clone()).ok_or_else(|| bad_span("sentence", &span))?;
            let body = raw.trim();
            if body.is_empty() {
                continue;
            }
            let start = span.start + (raw.len() - raw.trim_start().len());
            let index = sentences.len();
            let start_token = tokens.len();

            for word in self.word_spans(body) {
                let surface = body.get(word.clone()).ok_or_else(|| bad_span("word", &word))?;
                let token_idx = tokens.len();
                tokens.push(Token::new(
                    surface,
                    start + word.start,
                    start + word.end,
                    index,
                    token_idx,
                ));
            }

            sentences.push(Sentence {
                text: body.to_string(),
                start,
                end: start + body.len(),
                index,
                start_token,
                end_token: tokens.len(),
            });
        }

        Ok(TokenStream::from_parts(sentences, tokens))
    }

    /// Number of sentences in `text`.
    fn count_sentences(&self, text: &str) -> Result<usize> {
        if !self.is_ready() {
            return Err(SummarizeError::resource("tokenizer", self.language()));
        }
        Ok(self
            .sentence_spans(text)
            .into_iter()
            .filter(|span| text.get(span.clone()).is_some_and(|s| !s.trim().is_empty()))
            .count())
    }
}

fn bad_span(kind: &str, span: &Range<usize>) -> SummarizeError {
    SummarizeError::Unexpected(format!(
        "tokenizer produced an invalid {kind} span {}..{}",
        span.start, span.end
    ))
}

/// Punctuation-driven tokenizer backed by [`LanguageResources`].
///
/// A sentence ends at `.`, `!` or `?` (plus any run of further terminals and
/// closing quotes or brackets) followed by whitespace or the end of the
/// text. A lone period does not end a sentence after a title (`Dr.`), after
/// a name initial followed by a capitalized word (`J. Smith`, `John F.
/// Kennedy`), or after a general abbreviation followed by a lowercase word
/// (`etc. and`). A capital letter after a lowercase word (`plan B.`) is not
/// an initial.
#[derive(Debug, Clone)]
pub struct RuleTokenizer {
    resources: Arc<LanguageResources>,
}

impl RuleTokenizer {
    pub fn new(resources: Arc<LanguageResources>) -> Self {
        Self { resources }
    }

    pub fn resources(&self) -> &Arc<LanguageResources> {
        &self.resources
    }

    /// Whether a lone period after `before` continues the sentence.
    fn continues_after_period(&self, before: &str, next: Option<char>) -> bool {
        let word = before
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if word.is_empty() {
            return false;
        }
        let next_upper = next.is_some_and(char::is_uppercase);

        if self.resources.is_title(&word) {
            return true;
        }
        if next_upper && is_name_initial(before) {
            return true;
        }
        self.resources.is_abbreviation(&word) && !next_upper
    }
}

/// Whether `before` ends in a capital letter that belongs to a name: it
/// opens the sentence, or the word before it is capitalized (`John F`,
/// `J. R`).
fn is_name_initial(before: &str) -> bool {
    let mut words = before.split_whitespace().rev();
    let Some(last) = words.next() else {
        return false;
    };
    let mut chars = last.trim_start_matches(|c: char| !c.is_alphanumeric()).chars();
    let single_capital = matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_alphabetic() && c.is_uppercase()
    );
    if !single_capital {
        return false;
    }
    match words.next() {
        None => true,
        Some(prev) => prev
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .chars()
            .next()
            .is_some_and(char::is_uppercase),
    }
}

impl Tokenizer for RuleTokenizer {
    fn language(&self) -> &str {
        self.resources.language()
    }

    fn sentence_spans(&self, text: &str) -> Vec<Range<usize>> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut spans = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, c) = chars[i];
            if !is_terminal(c) {
                i += 1;
                continue;
            }

            let mut j = i + 1;
            while j < chars.len() && (is_terminal(chars[j].1) || is_closer(chars[j].1)) {
                j += 1;
            }
            let end = chars.get(j).map_or(text.len(), |&(p, _)| p);
            let at_end = j >= chars.len();

            if at_end || chars[j].1.is_whitespace() {
                let lone_period = c == '.' && j == i + 1;
                let next = text[end..].trim_start().chars().next();
                let continues =
                    !at_end && lone_period && self.continues_after_period(&text[start..pos], next);
                if !continues {
                    spans.push(start..end);
                    start = end;
                }
            }
            i = j;
        }

        if start < text.len() {
            spans.push(start..text.len());
        }
        spans
    }

    fn word_spans(&self, sentence: &str) -> Vec<Range<usize>> {
        self.resources
            .word_pattern()
            .find_iter(sentence)
            .map(|m| m.range())
            .collect()
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '”' | '’' | '»')
}
