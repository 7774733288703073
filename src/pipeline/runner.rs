//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! [`Summarizer`] owns an injected [`Tokenizer`] and the [`StopwordFilter`]
//! and runs the stages in order:
//!
//! 1. Tokenize (sentences and word tokens)
//! 2. Frequencies (mark content words, count them over the passage)
//! 3. Rank (score each sentence)
//! 4. Select (top k, back in passage order)
//!
//! A passage with no more sentences than requested stops after stage 1 and
//! is returned verbatim. An optional [`PipelineObserver`] is notified at each
//! stage boundary.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use rayon::prelude::*;

use crate::errors::{Result, SummarizeError};
use crate::nlp::resources::{self, LanguageResources};
use crate::nlp::stopwords::{canonical_language, StopwordFilter};
use crate::nlp::tokenizer::{RuleTokenizer, Tokenizer};
use crate::pipeline::artifacts::Summary;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, STAGE_FREQUENCIES, STAGE_RANK,
    STAGE_SELECT, STAGE_TOKENIZE,
};
use crate::summarizer::frequency::{mark_content_words, WordFrequencyMap};
use crate::summarizer::ranker::score_sentences;
use crate::summarizer::selector::{SelectionPlan, SentenceSelector};
use crate::types::{PassageStats, SummaryConfig};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Summarizer
// ============================================================================

/// Extractive summarizer over an injected tokenizer.
///
/// Holds only immutable data, so one instance can serve any number of calls,
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct Summarizer<T = RuleTokenizer> {
    tokenizer: T,
    stopwords: StopwordFilter,
    max_chars: Option<usize>,
}

impl Summarizer<RuleTokenizer> {
    /// Summarizer using the built-in tokenizer and the stopwords of
    /// `resources`.
    pub fn from_resources(resources: Arc<LanguageResources>) -> Self {
        let stopwords = resources.stopwords().clone();
        Self::new(RuleTokenizer::new(resources), stopwords)
    }

    /// Summarizer over the process-wide resources; RESOURCE_UNAVAILABLE if
    /// [`resources::init`] has not run.
    pub fn from_global() -> Result<Self> {
        resources::require().map(Self::from_resources)
    }

    /// Summarizer for a resolved configuration. Loads the configured
    /// language's resources unless the process-wide ones already match.
    pub fn from_config(cfg: &SummaryConfig) -> Result<Self> {
        let resources = match resources::global() {
            Some(res) if Some(res.language()) == canonical_language(&cfg.language) => res,
            _ => Arc::new(LanguageResources::load(&cfg.language)?),
        };
        Ok(Self::from_resources(resources).with_max_chars(cfg.max_chars))
    }
}

impl<T: Tokenizer> Summarizer<T> {
    pub fn new(tokenizer: T, stopwords: StopwordFilter) -> Self {
        Self {
            tokenizer,
            stopwords,
            max_chars: None,
        }
    }

    /// Reject passages longer than `max_chars` bytes.
    pub fn with_max_chars(mut self, max_chars: Option<usize>) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Sentence and word counts of `passage`.
    pub fn stats(&self, passage: &str) -> Result<PassageStats> {
        Ok(PassageStats {
            sentences: self.tokenizer.count_sentences(passage)?,
            words: passage.split_whitespace().count(),
        })
    }

    /// Summarize `passage` into at most `k` sentences.
    pub fn summarize(&self, passage: &str, k: usize) -> Result<Summary> {
        self.summarize_with_observer(passage, k, &mut NoopObserver)
    }

    /// Like [`summarize`](Self::summarize), but a panic anywhere in the
    /// pipeline is reported as UNEXPECTED instead of unwinding.
    pub fn summarize_guarded(&self, passage: &str, k: usize) -> Result<Summary> {
        catch_unexpected(|| self.summarize(passage, k))
    }

    /// Summarize `passage`, notifying `observer` at each stage boundary.
    pub fn summarize_with_observer(
        &self,
        passage: &str,
        k: usize,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        let selector = SentenceSelector::new(k)?;
        if passage.trim().is_empty() {
            return Err(SummarizeError::EmptyPassage);
        }
        if let Some(max) = self.max_chars {
            if passage.len() > max {
                return Err(SummarizeError::PassageTooLong {
                    len: passage.len(),
                    max,
                });
            }
        }

        // Stage 1: Tokenize
        trace_stage!(STAGE_TOKENIZE);
        observer.on_stage_start(STAGE_TOKENIZE);
        let clock = StageClock::start();
        let mut stream = self.tokenizer.tokenize(passage)?;
        let report = StageReport::new(clock.elapsed()).with_items(stream.num_sentences());
        observer.on_stage_end(STAGE_TOKENIZE, &report);
        observer.on_tokens(&stream);

        if selector.plan(stream.num_sentences())? == SelectionPlan::Verbatim {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                sentences = stream.num_sentences(),
                requested = k,
                "passage fits the requested length, returning it verbatim"
            );
            return Ok(Summary::verbatim(stream.into_sentences(), k));
        }

        // Stage 2: Frequencies
        trace_stage!(STAGE_FREQUENCIES);
        observer.on_stage_start(STAGE_FREQUENCIES);
        let clock = StageClock::start();
        mark_content_words(&mut stream, &self.stopwords);
        let freqs = WordFrequencyMap::build(stream.tokens());
        let report = StageReport::new(clock.elapsed()).with_items(freqs.len());
        observer.on_stage_end(STAGE_FREQUENCIES, &report);
        observer.on_frequencies(&freqs);

        // Stage 3: Rank
        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let scores = score_sentences(&stream, &freqs);
        let report = StageReport::new(clock.elapsed()).with_items(scores.len());
        observer.on_stage_end(STAGE_RANK, &report);
        observer.on_scores(&scores);

        // Stage 4: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let selected = selector.select(&scores);
        let summary = Summary::ranked(stream.sentences(), &selected, k);
        let report = StageReport::new(clock.elapsed()).with_items(summary.len());
        observer.on_stage_end(STAGE_SELECT, &report);

        Ok(summary)
    }
}

impl<T: Tokenizer + Sync> Summarizer<T> {
    /// Summarize independent passages in parallel. Results come back in
    /// input order, one per passage.
    pub fn summarize_batch<S>(&self, passages: &[S], k: usize) -> Vec<Result<Summary>>
    where
        S: AsRef<str> + Sync,
    {
        passages
            .par_iter()
            .map(|p| self.summarize_guarded(p.as_ref(), k))
            .collect()
    }
}

/// Run `f`, turning a panic into [`SummarizeError::Unexpected`].
pub(crate) fn catch_unexpected<R>(f: impl FnOnce() -> Result<R>) -> Result<R> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "summarization failed".to_string());
            #[cfg(feature = "tracing")]
            tracing::error!(error = %message, "summarization panicked");
            Err(SummarizeError::Unexpected(message))
        }
    }
}
