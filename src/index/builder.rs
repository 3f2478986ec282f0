//! Mutable index builder: the single-writer side of ingestion.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use log::debug;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::index::frozen::FrozenIndex;
use crate::index::registry::DocumentRegistry;
use crate::index::stats::CorpusStats;
use crate::index::DocId;

/// Builds the single-term and bigram indexes over a stream of documents.
///
/// The builder exclusively owns all mutable ingestion state: the document
/// registry, both posting maps, and the corpus statistics. Ingestion is a
/// strictly single-writer affair; when parallelizing, analyze documents on
/// worker threads and funnel the results through one builder (see
/// [`crate::corpus::ingest`]). After the last document, [`freeze`] turns
/// the builder into an immutable [`FrozenIndex`] that is safe to share
/// across readers.
///
/// [`freeze`]: IndexBuilder::freeze
///
/// # Examples
///
/// ```
/// use corpora::index::builder::IndexBuilder;
///
/// let mut builder = IndexBuilder::default();
/// builder.ingest_document("a.txt", "The cat sat.").unwrap();
/// let index = builder.freeze();
/// assert!(index.term_postings("cat").is_some());
/// ```
pub struct IndexBuilder {
    analyzer: Arc<Analyzer>,
    registry: DocumentRegistry,
    term_index: AHashMap<String, AHashSet<DocId>>,
    bigram_index: AHashMap<String, AHashSet<DocId>>,
    stats: CorpusStats,
}

impl IndexBuilder {
    /// Create a builder using the given analyzer.
    pub fn new(analyzer: Arc<Analyzer>) -> Self {
        IndexBuilder {
            analyzer,
            registry: DocumentRegistry::new(),
            term_index: AHashMap::new(),
            bigram_index: AHashMap::new(),
            stats: CorpusStats::new(),
        }
    }

    /// The analyzer this builder normalizes with.
    pub fn analyzer(&self) -> &Arc<Analyzer> {
        &self.analyzer
    }

    /// Analyze and index one document, returning its assigned id.
    ///
    /// The raw text is char-filtered, tokenized, and normalized by the
    /// builder's analyzer, then committed. A document that yields no
    /// tokens is still registered and counted, but contributes no index
    /// entries. On analysis failure the error propagates and no state is
    /// mutated for that document.
    pub fn ingest_document<S: Into<String>>(&mut self, path: S, raw_text: &str) -> Result<DocId> {
        let terms: Vec<String> = self
            .analyzer
            .analyze(raw_text)?
            .into_iter()
            .map(|token| token.text)
            .collect();
        Ok(self.commit_document(path, terms))
    }

    /// Commit an already-analyzed document.
    ///
    /// This is the serialized mutation step of the ingestion pipeline:
    /// the document id is assigned here, atomically with its index
    /// entries, so no partially-indexed id is ever observable. `terms`
    /// must be the full normalized token sequence in document order.
    pub fn commit_document<S: Into<String>>(&mut self, path: S, terms: Vec<String>) -> DocId {
        let doc_id = self.registry.register(path);
        let token_count = terms.len() as u64;

        let mut previous: Option<&str> = None;
        for term in &terms {
            self.term_index
                .entry(term.clone())
                .or_default()
                .insert(doc_id);
            self.stats.record_term(term);

            if let Some(prev) = previous {
                // Adjacent pairs never cross document boundaries; the
                // chain restarts with each commit.
                self.bigram_index
                    .entry(format!("{prev} {term}"))
                    .or_default()
                    .insert(doc_id);
            }
            previous = Some(term);
        }

        self.stats.finish_document(token_count);
        debug!("indexed doc {doc_id} ({token_count} tokens)");
        doc_id
    }

    /// Number of documents ingested so far.
    pub fn documents_ingested(&self) -> u64 {
        self.stats.documents_ingested()
    }

    /// Consume the builder, producing an immutable snapshot.
    pub fn freeze(self) -> FrozenIndex {
        FrozenIndex::new(
            self.analyzer,
            self.registry,
            self.term_index,
            self.bigram_index,
            self.stats,
        )
    }
}

impl Default for IndexBuilder {
    /// A builder over the standard corpus analyzer.
    fn default() -> Self {
        IndexBuilder::new(Arc::new(Analyzer::default()))
    }
}
