//! Ticket text normalization.
//!
//! [`TextNormalizer::normalize`] turns a list of raw texts into the
//! deduplicated lemma sequence that the classifier learns from and scores.
//! Each text goes through the same analysis pipeline:
//!
//! ```text
//! lowercase → letter runs → stop words dropped → lemma → unique
//! ```
//!
//! and the per-text results are concatenated in input order, keeping only the
//! first occurrence of every lemma.

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::LowercaseCharFilter;
use crate::analysis::lemmatizer::{Lemmatizer, load_lemmatizer};
use crate::analysis::stop_words::StopWordSet;
use crate::analysis::token_filter::{LemmaFilter, StopFilter, UniqueFilter};
use crate::analysis::tokenizer::{LetterTokenizer, Tokenizer};
use crate::error::Result;

/// Normalizes ticket texts into deduplicated lemma sequences.
///
/// Cheap to clone; every clone shares the lemmatizer and tokenizer.
#[derive(Clone)]
pub struct TextNormalizer {
    lemmatizer: Arc<dyn Lemmatizer>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("lemmatizer", &self.lemmatizer.name())
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl TextNormalizer {
    /// Create a normalizer around an injected lemmatizer.
    pub fn new(lemmatizer: Arc<dyn Lemmatizer>) -> Result<Self> {
        Ok(TextNormalizer {
            lemmatizer,
            tokenizer: Arc::new(LetterTokenizer::new()?),
        })
    }

    /// Create a normalizer with the built-in English lemma table.
    pub fn english() -> Result<Self> {
        Self::new(load_lemmatizer(None))
    }

    /// Get the lemmatizer in use.
    pub fn lemmatizer(&self) -> &Arc<dyn Lemmatizer> {
        &self.lemmatizer
    }

    /// Build the per-text analysis pipeline for a stop word set.
    ///
    /// Stop words are checked on the surface form, before lemmatization.
    pub fn analyzer(&self, stop_words: &StopWordSet) -> PipelineAnalyzer {
        PipelineAnalyzer::new(Arc::clone(&self.tokenizer))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_filter(Arc::new(StopFilter::with_stop_words(stop_words.clone())))
            .add_filter(Arc::new(LemmaFilter::new(Arc::clone(&self.lemmatizer))))
            .add_filter(Arc::new(UniqueFilter::new()))
            .with_name("ticket_normalizer")
    }

    /// Normalize `texts` into one deduplicated, first-occurrence-ordered
    /// lemma sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use ticket_triage::analysis::normalizer::TextNormalizer;
    /// use ticket_triage::analysis::stop_words::StopWordSet;
    ///
    /// let normalizer = TextNormalizer::english().unwrap();
    /// let stop_words = StopWordSet::from_words(["the", "is"]);
    ///
    /// let tokens = normalizer
    ///     .normalize(&["The cat is on the mat", "The dog is in the garden"], &stop_words)
    ///     .unwrap();
    /// assert_eq!(tokens, vec!["cat", "on", "mat", "dog", "in", "garden"]);
    /// ```
    pub fn normalize<S: AsRef<str>>(
        &self,
        texts: &[S],
        stop_words: &StopWordSet,
    ) -> Result<Vec<String>> {
        let analyzer = self.analyzer(stop_words);
        let mut seen = AHashSet::new();
        let mut lemmas = Vec::new();

        for text in texts {
            for token in analyzer.analyze(text.as_ref())? {
                if seen.insert(token.text.clone()) {
                    lemmas.push(token.text);
                }
            }
        }

        Ok(lemmas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lemmatizer::IdentityLemmatizer;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::english().unwrap()
    }

    const TEXTS: [&str; 2] = ["The cat is on the mat", "The dog is in the garden"];

    #[test]
    fn test_normalize_dedups_in_first_occurrence_order() {
        let stop_words = StopWordSet::from_words(["the", "is"]);
        let tokens = normalizer().normalize(&TEXTS, &stop_words).unwrap();
        assert_eq!(tokens, vec!["cat", "on", "mat", "dog", "in", "garden"]);
    }

    #[test]
    fn test_normalize_without_stop_words_lemmatizes() {
        let tokens = normalizer().normalize(&TEXTS, &StopWordSet::new()).unwrap();
        assert_eq!(
            tokens,
            vec!["the", "cat", "be", "on", "mat", "dog", "in", "garden"]
        );
    }

    #[test]
    fn test_stop_words_are_case_insensitive() {
        let stop_words = StopWordSet::from_words(["The"]);
        let tokens = normalizer()
            .normalize(&["the THE The cat"], &stop_words)
            .unwrap();
        assert_eq!(tokens, vec!["cat"]);
    }

    #[test]
    fn test_all_stop_words_yield_empty_sequence() {
        let stop_words = StopWordSet::from_words(["the", "is", "on"]);
        let tokens = normalizer()
            .normalize(&["The is on", "THE"], &stop_words)
            .unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let texts: [&str; 0] = [];
        assert!(
            normalizer()
                .normalize(&texts, &StopWordSet::new())
                .unwrap()
                .is_empty()
        );
        assert!(
            normalizer()
                .normalize(&["", "  ,, 42"], &StopWordSet::new())
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_non_letters_are_separators() {
        let tokens = normalizer()
            .normalize(&["card#1234 charged twice!!"], &StopWordSet::new())
            .unwrap();
        assert_eq!(tokens, vec!["card", "charge", "twice"]);
    }

    #[test]
    fn test_stop_words_checked_before_lemmatizing() {
        // "was" lemmatizes to "be", but only "be" is a stop word.
        let stop_words = StopWordSet::from_words(["be"]);
        let tokens = normalizer().normalize(&["it was"], &stop_words).unwrap();
        assert_eq!(tokens, vec!["it", "be"]);
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let stop_words = StopWordSet::from_words(["the"]);
        let normalizer = normalizer();
        let first = normalizer.normalize(&TEXTS, &stop_words).unwrap();
        let second = normalizer.normalize(&TEXTS, &stop_words).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_inflections_collapse_to_one_lemma() {
        let tokens = normalizer()
            .normalize(&["Jumps jumped", "jump jumping cats cat"], &StopWordSet::new())
            .unwrap();
        assert_eq!(tokens, vec!["jump", "cat"]);
    }

    #[test]
    fn test_identity_lemmatizer_keeps_surface_forms() {
        let normalizer = TextNormalizer::new(Arc::new(IdentityLemmatizer::new())).unwrap();
        let tokens = normalizer
            .normalize(&["Jumps jumps"], &StopWordSet::new())
            .unwrap();
        assert_eq!(tokens, vec!["jumps"]);
        assert_eq!(normalizer.lemmatizer().name(), "identity");
    }
}
