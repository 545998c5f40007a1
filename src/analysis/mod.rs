//! Text analysis for ticket classification.
//!
//! This module provides the building blocks of the ticket normalization
//! pipeline: char filters, tokenizers, token filters, lemmatizers and the
//! analyzers that chain them. [`normalizer::TextNormalizer`] assembles them
//! into the pipeline used for both training and classification.

pub mod analyzer;
pub mod char_filter;
pub mod lemmatizer;
pub mod normalizer;
pub mod stop_words;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use normalizer::TextNormalizer;
pub use stop_words::StopWordSet;
pub use token::{Token, TokenStream};
