//! Lemmatizers reduce inflected surface forms to their dictionary base form.
//!
//! A lemmatizer is built once at startup and injected into the
//! [`TextNormalizer`](crate::analysis::normalizer::TextNormalizer); nothing in
//! the analysis pipeline reaches for a global instance. Building the
//! dictionary can fail, and so can an individual lookup for implementations
//! backed by external resources. Both failures are recoverable:
//!
//! - [`load_lemmatizer`] logs the construction error once and hands back an
//!   [`IdentityLemmatizer`];
//! - [`LemmaFilter`](crate::analysis::token_filter::LemmaFilter) keeps the
//!   surface form when a single lookup fails.

use std::path::Path;
use std::sync::Arc;

use log::{info, warn};

use crate::error::Result;

/// Trait for lemmatization algorithms.
pub trait Lemmatizer: Send + Sync {
    /// Reduce a word to its base form.
    fn lemmatize(&self, word: &str) -> Result<String>;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

pub mod dictionary;
pub mod identity;

pub use dictionary::DictionaryLemmatizer;
pub use identity::IdentityLemmatizer;

/// Build the process lemmatizer.
///
/// With `path` set, the form table is read from that file; otherwise the
/// embedded English table is used. Any failure degrades to the identity
/// lemmatizer instead of aborting the pipeline.
pub fn load_lemmatizer(path: Option<&Path>) -> Arc<dyn Lemmatizer> {
    let loaded = match path {
        Some(path) => DictionaryLemmatizer::from_path(path),
        None => DictionaryLemmatizer::english(),
    };

    match loaded {
        Ok(lemmatizer) => {
            info!(
                "Lemmatizer ready with {} forms and {} lemmas",
                lemmatizer.form_count(),
                lemmatizer.lemma_count()
            );
            Arc::new(lemmatizer)
        }
        Err(e) => {
            warn!("Lemmatizer not working, falling back to surface forms: {e}");
            Arc::new(IdentityLemmatizer::new())
        }
    }
}
