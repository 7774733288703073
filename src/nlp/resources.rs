//! Language resources and the process-wide resource slot.
//!
//! [`LanguageResources`] bundles everything the tokenizer and the stopword
//! stage need for one language. Loading it is the only expensive step of a
//! summarization, so the crate keeps one loaded copy per process: call
//! [`init`] at startup, then [`global`] hands out the shared copy.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use regex::Regex;
use rustc_hash::FxHashSet;

use super::stopwords::{canonical_language, StopwordFilter};
use crate::errors::{Result, SummarizeError};

/// Word tokens: runs of word characters (apostrophes allowed inside), or any
/// single non-space character.
const WORD_PATTERN: &str = r"\w+(?:['’]\w+)*|[^\w\s]";

static GLOBAL: OnceCell<Arc<LanguageResources>> = OnceCell::new();

/// Stopwords, abbreviation tables and the compiled word pattern for one
/// language.
#[derive(Debug, Clone)]
pub struct LanguageResources {
    language: &'static str,
    stopwords: StopwordFilter,
    /// Abbreviations that precede a name and never end a sentence (`dr`)
    titles: FxHashSet<&'static str>,
    /// Abbreviations that end a sentence only before an uppercase word (`etc`)
    abbreviations: FxHashSet<&'static str>,
    word_pattern: Regex,
}

impl LanguageResources {
    /// Load resources for `language` (a code such as `"en"` or a name such
    /// as `"english"`).
    pub fn load(language: &str) -> Result<Self> {
        let code = canonical_language(language)
            .ok_or_else(|| SummarizeError::resource("stopwords", language))?;
        let stopwords = StopwordFilter::for_language(code)
            .filter(|f| !f.is_empty())
            .ok_or_else(|| SummarizeError::resource("stopwords", code))?;
        let word_pattern = Regex::new(WORD_PATTERN)
            .map_err(|_| SummarizeError::resource("word tokenizer", code))?;
        let (titles, abbreviations) = abbreviation_tables(code);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            language = code,
            stopwords = stopwords.len(),
            abbreviations = titles.len() + abbreviations.len(),
            "loaded language resources"
        );

        Ok(Self {
            language: code,
            stopwords,
            titles: titles.iter().copied().collect(),
            abbreviations: abbreviations.iter().copied().collect(),
            word_pattern,
        })
    }

    /// Replace the stopword list, keeping the tokenizer tables.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn language(&self) -> &'static str {
        self.language
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    pub fn word_pattern(&self) -> &Regex {
        &self.word_pattern
    }

    /// `word` is lowercase, without its trailing period.
    pub fn is_title(&self, word: &str) -> bool {
        self.titles.contains(word)
    }

    /// `word` is lowercase, without its trailing period.
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(word)
    }
}

/// Load the process-wide resources for `language`.
///
/// The first successful call wins; later calls return the already loaded
/// resources whatever language they ask for. A failed load leaves the slot
/// empty, so a later call may retry.
pub fn init(language: &str) -> Result<Arc<LanguageResources>> {
    GLOBAL
        .get_or_try_init(|| LanguageResources::load(language).map(Arc::new))
        .cloned()
}

/// The process-wide resources, if [`init`] has succeeded.
pub fn global() -> Option<Arc<LanguageResources>> {
    GLOBAL.get().cloned()
}

/// Readiness check consulted before every call that relies on [`global`].
pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}

/// The process-wide resources, or RESOURCE_UNAVAILABLE if [`init`] has not
/// run.
pub fn require() -> Result<Arc<LanguageResources>> {
    global().ok_or_else(|| SummarizeError::resource("tokenizer", "not initialized"))
}

const EN_TITLES: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "rev", "gen", "col", "capt", "lt", "sgt",
    "hon", "gov", "sen", "rep", "mt",
];
const EN_ABBREVIATIONS: &[&str] = &[
    "etc", "e.g", "i.e", "vs", "inc", "ltd", "co", "corp", "dept", "approx", "est", "fig", "vol",
    "no", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    "u.s", "u.k", "a.m", "p.m",
];
const DE_TITLES: &[&str] = &["dr", "prof", "hr", "fr"];
const DE_ABBREVIATIONS: &[&str] = &["bzw", "z.b", "usw", "ca", "nr", "vgl", "d.h", "evtl"];
const FR_TITLES: &[&str] = &["m", "mme", "mlle", "dr", "pr"];
const FR_ABBREVIATIONS: &[&str] = &["etc", "p.ex", "cf", "env"];
const ES_TITLES: &[&str] = &["sr", "sra", "srta", "dr", "dra"];
const ES_ABBREVIATIONS: &[&str] = &["etc", "p.ej", "aprox", "ud", "uds"];
const NO_ABBREVIATIONS: &[&str] = &[];

fn abbreviation_tables(code: &str) -> (&'static [&'static str], &'static [&'static str]) {
    match code {
        "en" => (EN_TITLES, EN_ABBREVIATIONS),
        "de" => (DE_TITLES, DE_ABBREVIATIONS),
        "fr" => (FR_TITLES, FR_ABBREVIATIONS),
        "es" => (ES_TITLES, ES_ABBREVIATIONS),
        _ => (NO_ABBREVIATIONS, NO_ABBREVIATIONS),
    }
}
