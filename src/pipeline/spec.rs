//! Summary specification types.
//!
//! A [`SummarySpec`] is the JSON configuration of a summarizer: language,
//! default summary length, runtime limits and strictness. It is checked by
//! the [`super::validation::ValidationEngine`] before use.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "language": "en",
//!   "sentences": 2,
//!   "runtime": { "max_chars": 200000 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::validation::{ValidationEngine, ValidationReport};
use crate::types::{SummaryConfig, DEFAULT_SUMMARY_SENTENCES};

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// Top-level summary specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Language code or name (`"en"`, `"german"`). Defaults to English.
    #[serde(default = "default_language")]
    pub language: String,

    /// Default number of summary sentences.
    #[serde(default = "default_sentences")]
    pub sentences: usize,

    /// Runtime execution limits.
    #[serde(default)]
    pub runtime: RuntimeSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_sentences() -> usize {
    DEFAULT_SUMMARY_SENTENCES
}

impl Default for SummarySpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            language: default_language(),
            sentences: default_sentences(),
            runtime: RuntimeSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl SummarySpec {
    /// Parse a spec from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Validate with the default rules and resolve into a [`SummaryConfig`].
    ///
    /// Returns the full report when any rule reports an error; warnings do
    /// not block.
    pub fn into_config(self) -> Result<SummaryConfig, ValidationReport> {
        self.resolve().map(|(cfg, _)| cfg)
    }

    /// Like [`into_config`](Self::into_config), but also hands back the
    /// report so warnings can be shown. Validation runs once.
    pub fn resolve(self) -> Result<(SummaryConfig, ValidationReport), ValidationReport> {
        let report = ValidationEngine::with_defaults().validate(&self);
        if report.has_errors() {
            return Err(report);
        }
        let cfg = SummaryConfig {
            language: self.language,
            num_sentences: self.sentences,
            max_chars: self.runtime.max_chars,
        };
        Ok((cfg, report))
    }
}

/// Runtime execution limits (fail-fast guards).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Maximum passage length in bytes before rejecting.
    #[serde(default)]
    pub max_chars: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_spec() {
        let spec = SummarySpec::from_json(r#"{ "v": 1 }"#).unwrap();
        assert_eq!(spec.v, 1);
        assert_eq!(spec.language, "en");
        assert_eq!(spec.sentences, 2);
        assert!(spec.runtime.max_chars.is_none());
        assert!(!spec.strict);
    }

    #[test]
    fn test_deserialize_full_spec() {
        let json = r#"{
            "v": 1,
            "language": "de",
            "sentences": 4,
            "runtime": { "max_chars": 100000 },
            "strict": true
        }"#;
        let spec = SummarySpec::from_json(json).unwrap();
        assert_eq!(spec.language, "de");
        assert_eq!(spec.sentences, 4);
        assert_eq!(spec.runtime.max_chars, Some(100000));
        assert!(spec.strict);
    }

    #[test]
    fn test_unknown_fields_captured() {
        let json = r#"{
            "v": 1,
            "bogus_top_level": 42,
            "runtime": { "max_chars": 10, "bogus_limit": "xyz" }
        }"#;
        let spec = SummarySpec::from_json(json).unwrap();
        assert!(spec.unknown_fields.contains_key("bogus_top_level"));
        assert!(spec.runtime.unknown_fields.contains_key("bogus_limit"));
    }

    #[test]
    fn test_into_config() {
        let json = r#"{ "v": 1, "sentences": 3, "runtime": { "max_chars": 500 } }"#;
        let spec = SummarySpec::from_json(json).unwrap();
        let cfg = spec.into_config().unwrap();
        assert_eq!(
            cfg,
            SummaryConfig {
                language: "en".into(),
                num_sentences: 3,
                max_chars: Some(500),
            }
        );
    }

    #[test]
    fn test_into_config_rejects_invalid() {
        let spec = SummarySpec::from_json(r#"{ "v": 1, "sentences": 0 }"#).unwrap();
        let report = spec.into_config().unwrap_err();
        assert!(report.has_errors());
    }

    #[test]
    fn test_resolve_keeps_warnings() {
        let spec = SummarySpec::from_json(r#"{ "v": 1, "sentenses": 3 }"#).unwrap();
        let (cfg, report) = spec.resolve().unwrap();
        assert_eq!(cfg.num_sentences, 2);
        assert_eq!(report.warnings().count(), 1);
        assert!(report.is_valid());
    }

    #[test]
    fn test_default_spec_is_valid() {
        assert!(SummarySpec::default().into_config().is_ok());
    }

    #[test]
    fn test_wrong_field_type_is_parse_error() {
        assert!(SummarySpec::from_json(r#"{ "v": 1, "sentences": "two" }"#).is_err());
    }
}
