//! Top-k sentence selection
//!
//! Selection runs as two named passes so each rule can be checked on its
//! own: [`rank_by_score`] orders candidates (score descending, lower index
//! first on ties), and [`restore_passage_order`] puts the kept ones back in
//! passage order.

use crate::errors::{Result, SummarizeError};
use crate::types::{SentenceScore, MIN_PASSAGE_SENTENCES};

/// What the selector decided for a passage of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPlan {
    /// Return every sentence unchanged; no scoring needed.
    Verbatim,
    /// Score all sentences and keep the top `k`.
    TopK(usize),
}

/// Picks the `k` highest-scoring sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceSelector {
    num_sentences: usize,
}

impl SentenceSelector {
    /// Create a selector keeping `num_sentences` sentences; `0` is rejected.
    pub fn new(num_sentences: usize) -> Result<Self> {
        if num_sentences == 0 {
            return Err(SummarizeError::InvalidSentenceCount);
        }
        Ok(Self { num_sentences })
    }

    pub fn num_sentences(&self) -> usize {
        self.num_sentences
    }

    /// Decide how a passage of `total` sentences is summarized.
    ///
    /// Fewer than two sentences is INSUFFICIENT_INPUT; at most `k` sentences
    /// is the verbatim case.
    pub fn plan(&self, total: usize) -> Result<SelectionPlan> {
        if total < MIN_PASSAGE_SENTENCES {
            return Err(SummarizeError::InsufficientSentences { found: total });
        }
        if total <= self.num_sentences {
            Ok(SelectionPlan::Verbatim)
        } else {
            Ok(SelectionPlan::TopK(self.num_sentences))
        }
    }

    /// Select the top `k` of `scores` and return them in passage order.
    ///
    /// `scores` may be in any order. When there are no more scores than `k`,
    /// all of them are returned in passage order.
    pub fn select(&self, scores: &[SentenceScore]) -> Vec<SentenceScore> {
        let mut ranked = scores.to_vec();
        rank_by_score(&mut ranked);
        ranked.truncate(self.num_sentences);
        restore_passage_order(&mut ranked);
        ranked
    }
}

/// Sort by score descending; equal scores keep the lower original index
/// first.
pub fn rank_by_score(scores: &mut [SentenceScore]) {
    scores.sort_by_key(|s| s.index);
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Sort by original index ascending.
pub fn restore_passage_order(scores: &mut [SentenceScore]) {
    scores.sort_by_key(|s| s.index);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: &[f64]) -> Vec<SentenceScore> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| SentenceScore::new(i, v))
            .collect()
    }

    fn indices(scores: &[SentenceScore]) -> Vec<usize> {
        scores.iter().map(|s| s.index).collect()
    }

    #[test]
    fn test_zero_sentences_rejected() {
        assert_eq!(
            SentenceSelector::new(0).unwrap_err(),
            SummarizeError::InvalidSentenceCount
        );
    }

    #[test]
    fn test_plan_insufficient_input() {
        let selector = SentenceSelector::new(2).unwrap();
        assert_eq!(
            selector.plan(0).unwrap_err(),
            SummarizeError::InsufficientSentences { found: 0 }
        );
        assert_eq!(
            selector.plan(1).unwrap_err(),
            SummarizeError::InsufficientSentences { found: 1 }
        );
    }

    #[test]
    fn test_plan_verbatim_at_or_below_k() {
        let selector = SentenceSelector::new(5).unwrap();
        assert_eq!(selector.plan(2).unwrap(), SelectionPlan::Verbatim);
        assert_eq!(selector.plan(5).unwrap(), SelectionPlan::Verbatim);
        assert_eq!(selector.plan(6).unwrap(), SelectionPlan::TopK(5));
    }

    #[test]
    fn test_plan_k_one_still_needs_two_sentences() {
        let selector = SentenceSelector::new(1).unwrap();
        assert!(selector.plan(1).is_err());
        assert_eq!(selector.plan(2).unwrap(), SelectionPlan::TopK(1));
    }

    #[test]
    fn test_rank_by_score_breaks_ties_by_index() {
        let mut s = vec![
            SentenceScore::new(3, 0.5),
            SentenceScore::new(1, 0.5),
            SentenceScore::new(0, 0.2),
            SentenceScore::new(2, 0.9),
        ];
        rank_by_score(&mut s);
        assert_eq!(indices(&s), vec![2, 1, 3, 0]);
    }

    #[test]
    fn test_restore_passage_order() {
        let mut s = vec![
            SentenceScore::new(4, 0.1),
            SentenceScore::new(0, 0.9),
            SentenceScore::new(2, 0.5),
        ];
        restore_passage_order(&mut s);
        assert_eq!(indices(&s), vec![0, 2, 4]);
    }

    #[test]
    fn test_select_top_k_in_passage_order() {
        let selector = SentenceSelector::new(2).unwrap();
        let picked = selector.select(&scores(&[0.1, 0.9, 0.3, 0.8]));
        assert_eq!(indices(&picked), vec![1, 3]);
    }

    #[test]
    fn test_select_tie_prefers_earlier_sentence() {
        let selector = SentenceSelector::new(2).unwrap();
        let picked = selector.select(&scores(&[0.625, 0.5, 0.4, 0.5]));
        assert_eq!(indices(&picked), vec![0, 1]);
    }

    #[test]
    fn test_select_exactly_k() {
        let selector = SentenceSelector::new(3).unwrap();
        let picked = selector.select(&scores(&[0.3, 0.1, 0.2, 0.5, 0.4, 0.0]));
        assert_eq!(picked.len(), 3);
        assert_eq!(indices(&picked), vec![0, 3, 4]);
    }

    #[test]
    fn test_select_all_zero_scores_keeps_first_k() {
        let selector = SentenceSelector::new(2).unwrap();
        let picked = selector.select(&scores(&[0.0, 0.0, 0.0]));
        assert_eq!(indices(&picked), vec![0, 1]);
    }

    #[test]
    fn test_select_fewer_scores_than_k() {
        let selector = SentenceSelector::new(4).unwrap();
        let picked = selector.select(&scores(&[0.2, 0.7]));
        assert_eq!(indices(&picked), vec![0, 1]);
    }
}
