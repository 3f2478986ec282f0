//! Char filter implementations for text pre-processing.
//!
//! Char filters transform the raw text string before it is passed to the
//! tokenizer.
//!
//! # Available Filters
//!
//! - [`punctuation::PunctuationStripFilter`] - Removes a fixed punctuation set
//!
//! # Examples
//!
//! ```
//! use corpora::analysis::char_filter::CharFilter;
//! use corpora::analysis::char_filter::punctuation::PunctuationStripFilter;
//!
//! let filter = PunctuationStripFilter::new();
//! assert_eq!(filter.filter("The cat sat."), "The cat sat");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod punctuation;
