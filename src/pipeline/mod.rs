//! Summarization pipeline
//!
//! Stage orchestration ([`runner`]), the artifacts passed between stages,
//! observer hooks, and the JSON configuration model with its validation
//! engine.

pub mod artifacts;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod validation;
