//! Error types for the corpora library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`CorporaError`] enum.
//!
//! # Examples
//!
//! ```
//! use corpora::error::{CorporaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CorporaError::config("corpus root is not a directory"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for corpora operations.
///
/// Note that a term or bigram missing from the index is *not* an error:
/// the query API reports absence through `Option` (see
/// [`crate::query::QueryEngine`]).
#[derive(Error, Debug)]
pub enum CorporaError {
    /// I/O errors (reading corpus files, writing exports).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration (e.g. corpus root is not a readable
    /// directory). Raised before any ingestion begins.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A document could not be ingested (undecodable text, analysis
    /// failure mid-document).
    #[error("Ingestion error: {0}")]
    Ingest(String),

    /// Analysis-related errors (tokenization, normalization).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Query-related errors (malformed query input).
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`CorporaError`].
pub type Result<T> = std::result::Result<T, CorporaError>;

impl CorporaError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        CorporaError::Config(msg.into())
    }

    /// Create a new ingestion error.
    pub fn ingest<S: Into<String>>(msg: S) -> Self {
        CorporaError::Ingest(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        CorporaError::Analysis(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        CorporaError::Query(msg.into())
    }

    /// Create a generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CorporaError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CorporaError::config("'/nope' is not a directory");
        assert_eq!(
            err.to_string(),
            "Configuration error: '/nope' is not a directory"
        );

        let err = CorporaError::ingest("invalid UTF-8");
        assert_eq!(err.to_string(), "Ingestion error: invalid UTF-8");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: CorporaError = io_err.into();
        assert!(matches!(err, CorporaError::Io(_)));
    }
}
