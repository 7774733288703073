//! Natural Language Processing components
//!
//! This module provides language resources, tokenization and stopword
//! filtering.

pub mod resources;
pub mod stopwords;
pub mod tokenizer;
