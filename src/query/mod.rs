//! Query operations over a frozen index.
//!
//! [`QueryEngine`] answers existence and document-retrieval queries for
//! single terms and adjacent-term pairs. It never mutates index state and
//! can be cloned freely; all clones share the same underlying
//! [`FrozenIndex`].
//!
//! Unknown terms and pairs are expected outcomes, not errors: existence
//! queries return `false` and retrieval queries return `None`. `None` is
//! distinct from an empty result on purpose — under the index invariants
//! a present key always has at least one posting, so `None` is the only
//! not-found signal.
//!
//! # Examples
//!
//! ```
//! use corpora::index::builder::IndexBuilder;
//! use corpora::query::QueryEngine;
//!
//! let mut builder = IndexBuilder::default();
//! builder.ingest_document("a.txt", "The cat sat.").unwrap();
//! let engine = QueryEngine::new(builder.freeze().into());
//!
//! assert!(engine.term_exists("cat", true));
//! assert!(engine.pair_exists("the", "cat", true));
//! assert!(engine.documents_for_term("missing", true).is_none());
//! ```

use std::sync::Arc;

use crate::index::frozen::FrozenIndex;

/// Read-only query engine over a shared [`FrozenIndex`].
#[derive(Debug, Clone)]
pub struct QueryEngine {
    index: Arc<FrozenIndex>,
}

impl QueryEngine {
    /// Create a query engine over the given index.
    pub fn new(index: Arc<FrozenIndex>) -> Self {
        QueryEngine { index }
    }

    /// The underlying index.
    pub fn index(&self) -> &Arc<FrozenIndex> {
        &self.index
    }

    /// Report whether a term is a key in the single-term index.
    ///
    /// With `normalize` set, the term is first normalized with the same
    /// analyzer used at ingestion time. Callers passing `normalize =
    /// false` must supply an already-normalized term; normalization is
    /// idempotent, so normalizing twice is always safe.
    pub fn term_exists(&self, term: &str, normalize: bool) -> bool {
        let term = self.maybe_normalize(term, normalize);
        self.index.term_postings(&term).is_some()
    }

    /// Report whether an adjacent pair is a key in the bigram index.
    pub fn pair_exists(&self, term1: &str, term2: &str, normalize: bool) -> bool {
        let key = self.pair_key(term1, term2, normalize);
        self.index.bigram_postings(&key).is_some()
    }

    /// Paths of all documents containing the term.
    ///
    /// Returns `None` when the term is not in the index. The order of the
    /// returned paths is unspecified (posting sets are unordered).
    pub fn documents_for_term(&self, term: &str, normalize: bool) -> Option<Vec<String>> {
        let term = self.maybe_normalize(term, normalize);
        self.index
            .term_postings(&term)
            .map(|doc_ids| self.index.registry().resolve(doc_ids.iter().copied()))
    }

    /// Paths of all documents containing the adjacent pair.
    ///
    /// Returns `None` when the pair is not in the index; ordering is
    /// unspecified, as for [`documents_for_term`](Self::documents_for_term).
    pub fn documents_for_pair(
        &self,
        term1: &str,
        term2: &str,
        normalize: bool,
    ) -> Option<Vec<String>> {
        let key = self.pair_key(term1, term2, normalize);
        self.index
            .bigram_postings(&key)
            .map(|doc_ids| self.index.registry().resolve(doc_ids.iter().copied()))
    }

    fn maybe_normalize(&self, term: &str, normalize: bool) -> String {
        if normalize {
            self.index.analyzer().normalize_term(term)
        } else {
            term.to_string()
        }
    }

    fn pair_key(&self, term1: &str, term2: &str, normalize: bool) -> String {
        let term1 = self.maybe_normalize(term1, normalize);
        let term2 = self.maybe_normalize(term2, normalize);
        format!("{term1} {term2}")
    }
}
