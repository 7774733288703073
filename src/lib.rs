//! # freqsum
//!
//! Extractive summarization by word-frequency sentence scoring.
//!
//! A passage is split into sentences and word tokens; content words (not
//! stopwords, not punctuation) are counted over the whole passage; each
//! sentence scores the sum of its content words' counts divided by its
//! token count plus one. The top `k` sentences are returned in the order
//! they appear in the passage.
//!
//! ```rust,ignore
//! freqsum::init("en")?;
//! let summary = freqsum::summarize(passage, 2)?;
//! for line in summary {
//!     println!("{line}");
//! }
//! ```
//!
//! [`Summarizer`] is the injectable form: it takes any [`Tokenizer`] and a
//! [`StopwordFilter`] and returns a structured [`Summary`].

pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod summarizer;
pub mod types;

pub use errors::{Result, SummarizeError};
pub use nlp::resources::{init, is_initialized, LanguageResources};
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::{RuleTokenizer, Tokenizer};
pub use pipeline::artifacts::{SelectionMode, Summary, SummarySentence};
pub use pipeline::error_code::ErrorCode;
pub use pipeline::runner::Summarizer;
pub use pipeline::spec::SummarySpec;
pub use types::{PassageStats, Sentence, SentenceScore, SummaryConfig, Token};

use summarizer::selector::SentenceSelector;

/// Summarize `passage` into at most `k` sentences, in passage order, using
/// the resources loaded by [`init`].
///
/// Fails with RESOURCE_UNAVAILABLE if [`init`] has not succeeded. A panic
/// inside the pipeline is reported as UNEXPECTED.
pub fn summarize(passage: &str, k: usize) -> Result<Vec<String>> {
    pipeline::runner::catch_unexpected(|| {
        SentenceSelector::new(k)?;
        if passage.trim().is_empty() {
            return Err(SummarizeError::EmptyPassage);
        }
        let summarizer = Summarizer::from_global()?;
        summarizer.summarize(passage, k).map(Summary::into_texts)
    })
}
