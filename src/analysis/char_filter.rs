//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw string before it is handed to the
//! tokenizer. Token offsets produced afterwards refer to the filtered text.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode case folding of the whole text
//!
//! # Examples
//!
//! ```
//! use ticket_triage::analysis::char_filter::CharFilter;
//! use ticket_triage::analysis::char_filter::lowercase::LowercaseCharFilter;
//!
//! let filter = LowercaseCharFilter::new();
//! assert_eq!(filter.filter("Hello WORLD"), "hello world");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;

pub use lowercase::LowercaseCharFilter;
