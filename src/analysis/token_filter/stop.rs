//! Stop filter implementation.
//!
//! Removes tokens whose case-folded text is in a [`StopWordSet`]. It runs
//! before lemmatization, so stop words match surface forms.
//!
//! # Examples
//!
//! ```
//! use ticket_triage::analysis::token_filter::Filter;
//! use ticket_triage::analysis::token_filter::stop::StopFilter;
//! use ticket_triage::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(["The"]);
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("THE", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "quick");
//! ```

use crate::analysis::stop_words::StopWordSet;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: StopWordSet,
}

impl StopFilter {
    /// Create a new stop filter over an existing stop word set.
    pub fn with_stop_words(stop_words: StopWordSet) -> Self {
        StopFilter { stop_words }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_stop_words(StopWordSet::from_words(words))
    }

    /// Check if a word is a stop word, ignoring case.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
