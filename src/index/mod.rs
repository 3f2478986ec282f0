//! Index construction and storage.
//!
//! The mutable [`builder::IndexBuilder`] consumes documents during
//! ingestion; [`builder::IndexBuilder::freeze`] converts it into the
//! immutable [`frozen::FrozenIndex`] that queries and statistics read
//! from.

pub mod builder;
pub mod frozen;
pub mod registry;
pub mod stats;

/// Document identifier: sequential, zero-based, permanent.
pub type DocId = u64;
