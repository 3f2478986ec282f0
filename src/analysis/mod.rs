//! Text analysis pipeline: char filters, tokenizers, and normalizers.
//!
//! Analysis turns raw document text into the normalized terms used as
//! index keys. See [`analyzer::Analyzer`] for the composed pipeline.

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod tokenizer;
