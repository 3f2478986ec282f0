//! Corpus traversal and ingestion drivers.
//!
//! This layer owns the file-system side of indexing: walking the corpus
//! root, reading documents, and feeding them to the
//! [`IndexBuilder`](crate::index::builder::IndexBuilder) under a
//! configurable error policy.

pub mod ingest;
pub mod walker;

pub use ingest::{IngestErrorPolicy, IngestOptions, ingest_corpus, ingest_corpus_parallel};
pub use walker::CorpusWalker;
