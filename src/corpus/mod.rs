//! Labeled ticket corpus.
//!
//! A [`Corpus`] groups ticket texts by product label. Classes keep the order
//! in which their label was first seen in the source, and documents keep
//! their source order within a class, so training input is reproducible even
//! though the order in which classes are learned is not.

pub mod reader;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use reader::{read_corpus, read_stop_words, read_training_data};

/// A single labeled ticket: `"{title} {description}"` plus its product label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub label: String,
    pub text: String,
}

impl Document {
    pub fn new<L: Into<String>, T: Into<String>>(label: L, text: T) -> Self {
        Document {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Documents grouped by class label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    classes: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document text to its class, creating the class on first sight.
    pub fn push<L: AsRef<str>, T: Into<String>>(&mut self, label: L, text: T) {
        let label = label.as_ref();
        let slot = match self.index.get(label) {
            Some(&slot) => slot,
            None => {
                self.classes.push((label.to_string(), Vec::new()));
                self.index.insert(label.to_string(), self.classes.len() - 1);
                self.classes.len() - 1
            }
        };
        self.classes[slot].1.push(text.into());
    }

    /// Class labels in first-sight order.
    pub fn labels(&self) -> Vec<String> {
        self.classes.iter().map(|(label, _)| label.clone()).collect()
    }

    /// Number of distinct class labels.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Total number of documents across all classes.
    pub fn document_count(&self) -> usize {
        self.classes.iter().map(|(_, docs)| docs.len()).sum()
    }

    /// Documents of one class, in source order.
    pub fn documents(&self, label: &str) -> Option<&[String]> {
        self.index
            .get(label)
            .map(|&slot| self.classes[slot].1.as_slice())
    }

    /// Check whether the corpus holds no documents.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate over `(label, documents)` in first-sight order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.classes
            .iter()
            .map(|(label, docs)| (label.as_str(), docs.as_slice()))
    }

    /// Consume the corpus, yielding `(label, documents)` in first-sight order.
    pub fn into_classes(self) -> Vec<(String, Vec<String>)> {
        self.classes
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for document in iter {
            corpus.push(&document.label, document.text);
        }
        corpus
    }
}
