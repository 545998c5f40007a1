//! Identity lemmatizer implementation.

use crate::analysis::lemmatizer::Lemmatizer;
use crate::error::Result;

/// Identity lemmatizer that returns words unchanged.
#[derive(Debug, Clone, Default)]
pub struct IdentityLemmatizer;

impl IdentityLemmatizer {
    pub fn new() -> Self {
        IdentityLemmatizer
    }
}

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, word: &str) -> Result<String> {
        Ok(word.to_string())
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_lemmatizer() {
        let lemmatizer = IdentityLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("running").unwrap(), "running");
        assert_eq!(lemmatizer.lemmatize("is").unwrap(), "is");
        assert_eq!(lemmatizer.lemmatize("").unwrap(), "");
    }
}
