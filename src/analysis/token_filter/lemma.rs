//! Lemmatizing token filter.

use std::sync::Arc;

use log::debug;

use super::Filter;
use crate::analysis::lemmatizer::Lemmatizer;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Filter that replaces each token with its lemma.
///
/// A failed lookup keeps the surface form; it never fails the stream.
pub struct LemmaFilter {
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl std::fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

impl LemmaFilter {
    /// Create a lemma filter around a shared lemmatizer.
    pub fn new(lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        LemmaFilter { lemmatizer }
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| match self.lemmatizer.lemmatize(&token.text) {
                Ok(lemma) => token.with_text(lemma),
                Err(e) => {
                    debug!("keeping surface form {:?}: {e}", token.text);
                    token
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}
