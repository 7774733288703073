//! Pipeline observer: hooks for logging, profiling and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic: timing stages, capturing intermediate artifacts, emitting
//! telemetry. All hooks have empty default bodies.

use std::time::{Duration, Instant};

use crate::pipeline::artifacts::TokenStream;
use crate::summarizer::frequency::WordFrequencyMap;
use crate::types::SentenceScore;

pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_FREQUENCIES: &str = "frequencies";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SELECT: &str = "select";

/// Measurements for one completed stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    duration: Duration,
    items: Option<usize>,
}

impl StageReport {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            items: None,
        }
    }

    /// Attach the number of items the stage produced (sentences, words...).
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Wall-clock timer for a stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Callbacks invoked by [`Summarizer`](super::runner::Summarizer) while it
/// runs.
///
/// Stages skipped by the verbatim shortcut produce no callbacks.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Called after tokenization, before content words are marked.
    fn on_tokens(&mut self, _tokens: &TokenStream) {}

    fn on_frequencies(&mut self, _freqs: &WordFrequencyMap) {}

    /// Called with every sentence's score, in index order.
    fn on_scores(&mut self, _scores: &[SentenceScore]) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records a [`StageReport`] per completed stage, in order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Names of the stages that ran, in order.
    pub fn stages(&self) -> Vec<&'static str> {
        self.reports.iter().map(|(name, _)| *name).collect()
    }

    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, r)| r)
    }

    pub fn total_duration(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.duration()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_observer_records_in_order() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_start(STAGE_TOKENIZE);
        let tokenize = StageReport::new(Duration::from_millis(2)).with_items(4);
        obs.on_stage_end(STAGE_TOKENIZE, &tokenize);
        obs.on_stage_end(STAGE_SELECT, &StageReport::new(Duration::from_millis(1)));

        assert_eq!(obs.stages(), vec![STAGE_TOKENIZE, STAGE_SELECT]);
        assert_eq!(obs.report(STAGE_TOKENIZE).unwrap().items(), Some(4));
        assert!(obs.report(STAGE_RANK).is_none());
        assert_eq!(obs.total_duration(), Duration::from_millis(3));
    }

    #[test]
    fn test_stage_clock_is_monotonic() {
        let clock = StageClock::start();
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(b >= a);
    }

    #[test]
    fn test_noop_observer_as_trait_object() {
        let mut obs: Box<dyn PipelineObserver> = Box::new(NoopObserver);
        obs.on_stage_start(STAGE_RANK);
        obs.on_scores(&[]);
    }
}
