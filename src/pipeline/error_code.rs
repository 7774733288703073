//! Stable error codes shared by summarization errors and spec diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable error code.
///
/// Serialized in `SCREAMING_SNAKE_CASE` (`"INSUFFICIENT_INPUT"`), which is
/// also what [`Display`](fmt::Display) prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Passage is empty or has fewer than two sentences.
    InsufficientInput,
    /// Language resources were never loaded or failed to load.
    ResourceUnavailable,
    /// A call argument is out of range.
    InvalidArgument,
    /// A configured runtime limit was exceeded or set to an invalid value.
    LimitExceeded,
    /// A spec field holds a value outside its allowed range.
    InvalidValue,
    /// The spec version is not supported.
    UnsupportedVersion,
    /// The spec names a language without stopword resources.
    UnsupportedLanguage,
    /// The spec contains a field the schema does not know.
    UnknownField,
    /// Catch-all for validation failures raised by custom rules.
    ValidationFailed,
    /// Any other failure.
    Unexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InsufficientInput => "INSUFFICIENT_INPUT",
            Self::ResourceUnavailable => "RESOURCE_UNAVAILABLE",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::LimitExceeded => "LIMIT_EXCEEDED",
            Self::InvalidValue => "INVALID_VALUE",
            Self::UnsupportedVersion => "UNSUPPORTED_VERSION",
            Self::UnsupportedLanguage => "UNSUPPORTED_LANGUAGE",
            Self::UnknownField => "UNKNOWN_FIELD",
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::Unexpected => "UNEXPECTED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde() {
        for code in [
            ErrorCode::InsufficientInput,
            ErrorCode::ResourceUnavailable,
            ErrorCode::UnknownField,
            ErrorCode::Unexpected,
        ] {
            let json = serde_json::to_value(code).unwrap();
            assert_eq!(json, code.to_string());
        }
    }

    #[test]
    fn test_deserialize_code() {
        let code: ErrorCode = serde_json::from_str(r#""RESOURCE_UNAVAILABLE""#).unwrap();
        assert_eq!(code, ErrorCode::ResourceUnavailable);
    }
}
