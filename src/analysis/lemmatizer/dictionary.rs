//! Dictionary-backed lemmatizer.
//!
//! The table format is one entry per line:
//!
//! ```text
//! # comment
//! went go        <- inflected form, lemma
//! account        <- bare lemma, known base form
//! ```
//!
//! Lookup folds case. A word that is neither a listed form nor a known lemma
//! is run through the regular English inflection rules; a candidate is only
//! accepted when it is itself a known lemma, so unknown words come back
//! untouched.

use std::fs;
use std::path::Path;

use ahash::{AHashMap, AHashSet};

use crate::analysis::lemmatizer::Lemmatizer;
use crate::error::{Result, TriageError};

const ENGLISH_LEMMAS: &str = include_str!("en_lemmas.txt");

/// Regular inflection suffixes and their replacements, tried in order.
const INFLECTION_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("es", ""),
    ("s", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

/// Lemmatizer backed by a form→lemma table.
#[derive(Debug, Clone, Default)]
pub struct DictionaryLemmatizer {
    forms: AHashMap<String, String>,
    lemmas: AHashSet<String>,
}

impl DictionaryLemmatizer {
    /// Build the lemmatizer from the embedded English table.
    pub fn english() -> Result<Self> {
        Self::parse(ENGLISH_LEMMAS)
    }

    /// Build the lemmatizer from a table file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            TriageError::analysis(format!(
                "can not read lemma dictionary {}: {e}",
                path.display()
            ))
        })?;
        Self::parse(&source)
    }

    /// Parse a lemma table.
    pub fn parse(source: &str) -> Result<Self> {
        let mut forms = AHashMap::new();
        let mut lemmas = AHashSet::new();

        for (line_num, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [lemma] => {
                    lemmas.insert(lemma.to_lowercase());
                }
                [form, lemma] => {
                    let lemma = lemma.to_lowercase();
                    forms.insert(form.to_lowercase(), lemma.clone());
                    lemmas.insert(lemma);
                }
                _ => {
                    return Err(TriageError::analysis(format!(
                        "lemma dictionary line {}: expected `form lemma` or `lemma`, got {line:?}",
                        line_num + 1
                    )));
                }
            }
        }

        if lemmas.is_empty() {
            return Err(TriageError::analysis("lemma dictionary is empty"));
        }

        Ok(DictionaryLemmatizer { forms, lemmas })
    }

    /// Number of inflected forms in the table.
    pub fn form_count(&self) -> usize {
        self.forms.len()
    }

    /// Number of known lemmas.
    pub fn lemma_count(&self) -> usize {
        self.lemmas.len()
    }

    fn lookup(&self, folded: &str) -> Option<String> {
        if let Some(lemma) = self.forms.get(folded) {
            return Some(lemma.clone());
        }
        if self.lemmas.contains(folded) {
            return Some(folded.to_string());
        }

        INFLECTION_RULES.iter().find_map(|(suffix, replacement)| {
            let stem = folded.strip_suffix(suffix)?;
            if stem.is_empty() {
                return None;
            }
            let candidate = format!("{stem}{replacement}");
            self.lemmas.contains(&candidate).then_some(candidate)
        })
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn lemmatize(&self, word: &str) -> Result<String> {
        let folded = word.to_lowercase();
        Ok(self.lookup(&folded).unwrap_or_else(|| word.to_string()))
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}
