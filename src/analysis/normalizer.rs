//! Normalizer implementations for reducing tokens to canonical terms.
//!
//! A normalizer maps a raw token to the canonical term used as an index
//! key. The same normalizer instance must be used at ingestion time and at
//! query time, otherwise lookups will miss.
//!
//! # Contract
//!
//! Implementations must be deterministic and **idempotent**:
//! `normalize(normalize(x)) == normalize(x)` for any input. Idempotence is
//! what lets callers pass pre-normalized terms directly to the query API
//! and get the same behavior as tokens discovered during ingestion.
//!
//! # Available Normalizers
//!
//! - [`lowercase::LowercaseNormalizer`] - Lowercasing only
//! - [`lemma::EnglishLemmatizer`] - Lowercasing plus English noun lemmatization (default)
//!
//! # Examples
//!
//! ```
//! use corpora::analysis::normalizer::Normalizer;
//! use corpora::analysis::normalizer::lemma::EnglishLemmatizer;
//!
//! let normalizer = EnglishLemmatizer::new();
//! assert_eq!(normalizer.normalize("Cities"), "city");
//! ```

/// Trait for normalizers that map raw tokens to canonical terms.
pub trait Normalizer: Send + Sync {
    /// Normalize a token to its canonical term form.
    fn normalize(&self, token: &str) -> String;

    /// Get the name of this normalizer.
    fn name(&self) -> &'static str;
}

pub mod lemma;
pub mod lowercase;
