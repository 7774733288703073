//! Summarization components
//!
//! Frequency-based extractive summarization: count content words over the
//! passage, score each sentence by its words' counts, keep the top ones.

pub mod frequency;
pub mod ranker;
pub mod selector;
