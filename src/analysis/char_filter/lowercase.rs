//! Lowercase char filter implementation.
//!
//! Case folding happens on the whole text before tokenization, so that the
//! letter tokenizer sees exactly the characters that survive folding. Some
//! characters expand when lowercased (`'İ'` becomes `"i̇"`, where the
//! combining dot is not a letter) and must be split on afterwards.

use crate::analysis::char_filter::CharFilter;

/// A char filter that converts the entire input to lowercase.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            input.to_ascii_lowercase()
        } else {
            input.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_char_filter() {
        let filter = LowercaseCharFilter::new();
        assert_eq!(filter.filter("The Cat IS on the MAT"), "the cat is on the mat");
        assert_eq!(filter.filter("ÉCOLE Straße"), "école straße");
        assert_eq!(filter.filter(""), "");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseCharFilter::new().name(), "lowercase");
    }
}
