//! # corpora
//!
//! A corpus indexing and vocabulary statistics library for Rust.
//!
//! ## Features
//!
//! - Single-term inverted index over a directory of text documents
//! - Adjacent-pair (bigram) index for two-word lookups
//! - Corpus statistics: vocabulary growth (Heaps) and frequency-rank
//!   (Zipf) curves in log-log scale
//! - Pluggable analysis pipeline (char filters, tokenizer, normalizer)
//! - Sequential or parallel ingestion with a single serialized writer
//! - JSON export of both indexes
//!
//! ## Example
//!
//! ```
//! use corpora::index::builder::IndexBuilder;
//! use corpora::query::QueryEngine;
//!
//! let mut builder = IndexBuilder::default();
//! builder.ingest_document("a.txt", "The cat sat. The cat ran.")?;
//! let engine = QueryEngine::new(builder.freeze().into());
//!
//! assert!(engine.term_exists("cat", true));
//! assert!(engine.pair_exists("sat", "the", true));
//! # Ok::<(), corpora::error::CorporaError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod index;
pub mod query;

pub mod prelude {
    //! Convenience re-exports of the most commonly used types.

    pub use crate::analysis::analyzer::Analyzer;
    pub use crate::corpus::{IngestOptions, ingest_corpus, ingest_corpus_parallel};
    pub use crate::error::{CorporaError, Result};
    pub use crate::index::DocId;
    pub use crate::index::builder::IndexBuilder;
    pub use crate::index::frozen::FrozenIndex;
    pub use crate::query::QueryEngine;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
