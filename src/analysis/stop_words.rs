//! Case-insensitive stop word set.
//!
//! Stop words are folded to lowercase when the set is built, and every
//! membership probe is folded as well, so a stored `"The"` removes `"the"`,
//! `"THE"` and `"The"` alike. The set is shared behind an `Arc`, which keeps
//! clones cheap when it is handed to every training worker.

use std::sync::Arc;

use ahash::AHashSet;

/// An immutable, case-folded set of stop words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: Arc<AHashSet<String>>,
}

impl StopWordSet {
    /// Create an empty stop word set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stop word set from any list of words, folding their case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ticket_triage::analysis::stop_words::StopWordSet;
    ///
    /// let stop_words = StopWordSet::from_words(["The", "is"]);
    /// assert!(stop_words.contains("the"));
    /// assert!(stop_words.contains("THE"));
    /// assert!(!stop_words.contains("cat"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().to_lowercase())
            .collect();
        StopWordSet {
            words: Arc::new(words),
        }
    }

    /// Check whether `word` is a stop word, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        if word.is_ascii() && !word.bytes().any(|b| b.is_ascii_uppercase()) {
            return self.words.contains(word);
        }
        self.words.contains(&word.to_lowercase())
    }

    /// Get the number of distinct folded stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_membership() {
        let stop_words = StopWordSet::from_words(["The", "IS", "a"]);

        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("THE"));
        assert!(stop_words.contains("is"));
        assert!(stop_words.contains("A"));
        assert!(!stop_words.contains("cat"));
    }

    #[test]
    fn test_folding_collapses_duplicates() {
        let stop_words: StopWordSet = ["The", "the", "THE"].into_iter().collect();
        assert_eq!(stop_words.len(), 1);
        assert!(!stop_words.is_empty());
    }

    #[test]
    fn test_empty_set() {
        let stop_words = StopWordSet::new();
        assert!(stop_words.is_empty());
        assert!(!stop_words.contains(""));
    }
}
