//! Core analyzer trait definition.
//!
//! An [`Analyzer`] is the complete text processing pipeline for one text:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```
//!
//! The [`TextNormalizer`](crate::analysis::normalizer::TextNormalizer) builds
//! one [`PipelineAnalyzer`](super::PipelineAnalyzer) per stop word set and
//! runs every ticket text through it.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so one analyzer can be shared by every
/// training worker.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and logging).
    fn name(&self) -> &'static str;
}
