//! Error types returned by summarization calls.

use thiserror::Error;

use crate::pipeline::error_code::ErrorCode;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Everything that can go wrong in a summarization call.
///
/// Validation errors ([`is_validation`](Self::is_validation)) are the
/// caller's to fix and can be shown as warnings; the rest are failures of the
/// call itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizeError {
    #[error("Please enter some text to summarize.")]
    EmptyPassage,

    #[error("Please enter at least two sentences to summarize.")]
    InsufficientSentences { found: usize },

    #[error("Summary length must be at least 1 sentence.")]
    InvalidSentenceCount,

    #[error("Passage is {len} bytes long, the configured limit is {max}.")]
    PassageTooLong { len: usize, max: usize },

    #[error("Language resource missing: {resource} ({language}).")]
    ResourceUnavailable { resource: String, language: String },

    #[error("Error: {0}")]
    Unexpected(String),
}

impl SummarizeError {
    pub(crate) fn resource(resource: impl Into<String>, language: impl Into<String>) -> Self {
        Self::ResourceUnavailable {
            resource: resource.into(),
            language: language.into(),
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyPassage | Self::InsufficientSentences { .. } => ErrorCode::InsufficientInput,
            Self::InvalidSentenceCount => ErrorCode::InvalidArgument,
            Self::PassageTooLong { .. } => ErrorCode::LimitExceeded,
            Self::ResourceUnavailable { .. } => ErrorCode::ResourceUnavailable,
            Self::Unexpected(_) => ErrorCode::Unexpected,
        }
    }

    /// Remediation hint suitable for showing next to the message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::EmptyPassage | Self::InsufficientSentences { .. } => None,
            Self::InvalidSentenceCount => Some("Request one or more sentences"),
            Self::PassageTooLong { .. } => {
                Some("Shorten the passage or raise runtime.max_chars")
            }
            Self::ResourceUnavailable { .. } => {
                Some("Please restart the application or call `init` again")
            }
            Self::Unexpected(_) => None,
        }
    }

    /// `true` for errors caused by the input rather than by the summarizer.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyPassage
                | Self::InsufficientSentences { .. }
                | Self::InvalidSentenceCount
                | Self::PassageTooLong { .. }
        )
    }
}
