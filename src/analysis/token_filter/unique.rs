//! Filter that drops repeated token texts, keeping the first occurrence.

use ahash::AHashSet;

use super::Filter;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Removes tokens whose text already appeared earlier in the stream.
///
/// Only deduplicates within one stream. The normalizer dedups across texts
/// itself because each text is analyzed separately.
#[derive(Clone, Debug, Default)]
pub struct UniqueFilter;

impl UniqueFilter {
    pub fn new() -> Self {
        UniqueFilter
    }
}

impl Filter for UniqueFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut seen = AHashSet::new();
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| seen.insert(token.text.clone()))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unique"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(words: &[&str]) -> Vec<String> {
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect();
        UniqueFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_remove_duplicates() {
        assert_eq!(run(&["a", "b", "c", "a", "d", "b"]), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_remove_duplicates_all_duplicates() {
        assert_eq!(run(&["a", "a", "a", "a", "a"]), vec!["a"]);
    }

    #[test]
    fn test_remove_duplicates_empty() {
        assert!(run(&[]).is_empty());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(UniqueFilter::new().name(), "unique");
    }
}
