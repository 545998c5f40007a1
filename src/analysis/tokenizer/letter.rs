//! Letter-run tokenizer implementation.
//!
//! Splits text on maximal runs of non-letter characters. A letter is any
//! character in the Unicode `L` category, so digits, punctuation, marks and
//! whitespace all act as separators and never appear inside a token.
//!
//! # Examples
//!
//! ```
//! use ticket_triage::analysis::tokenizer::Tokenizer;
//! use ticket_triage::analysis::tokenizer::letter::LetterTokenizer;
//!
//! let tokenizer = LetterTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("card#1234 declined").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "card");
//! assert_eq!(tokens[1].text, "declined");
//! ```

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, TriageError};

const LETTER_RUN_PATTERN: &str = r"\p{L}+";

/// A tokenizer that extracts maximal runs of Unicode letters.
#[derive(Clone, Debug)]
pub struct LetterTokenizer {
    pattern: Arc<Regex>,
}

impl LetterTokenizer {
    /// Create a new letter tokenizer.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(LETTER_RUN_PATTERN)
            .map_err(|e| TriageError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(LetterTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for LetterTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "letter"
    }
}
