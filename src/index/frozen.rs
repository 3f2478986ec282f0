//! Immutable index snapshot produced by freezing an
//! [`IndexBuilder`](crate::index::builder::IndexBuilder).

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::index::registry::DocumentRegistry;
use crate::index::stats::{CorpusStats, StatsSummary};
use crate::index::DocId;

/// The finished, read-only corpus index.
///
/// Holds the single-term index, the bigram index, the document registry,
/// the corpus statistics, and the analyzer they were built with. The type
/// is `Send + Sync` and never mutated, so it can be shared behind an
/// `Arc` across arbitrarily many concurrent readers without locking.
#[derive(Debug)]
pub struct FrozenIndex {
    analyzer: Arc<Analyzer>,
    registry: DocumentRegistry,
    term_index: AHashMap<String, AHashSet<DocId>>,
    bigram_index: AHashMap<String, AHashSet<DocId>>,
    stats: CorpusStats,
}

impl FrozenIndex {
    pub(crate) fn new(
        analyzer: Arc<Analyzer>,
        registry: DocumentRegistry,
        term_index: AHashMap<String, AHashSet<DocId>>,
        bigram_index: AHashMap<String, AHashSet<DocId>>,
        stats: CorpusStats,
    ) -> Self {
        FrozenIndex {
            analyzer,
            registry,
            term_index,
            bigram_index,
            stats,
        }
    }

    /// The analyzer used at ingestion time. Query normalization must go
    /// through this same analyzer.
    pub fn analyzer(&self) -> &Arc<Analyzer> {
        &self.analyzer
    }

    /// The document registry.
    pub fn registry(&self) -> &DocumentRegistry {
        &self.registry
    }

    /// The corpus statistics tracker.
    pub fn stats(&self) -> &CorpusStats {
        &self.stats
    }

    /// Posting set for a term, `None` if the term is not a key.
    pub fn term_postings(&self, term: &str) -> Option<&AHashSet<DocId>> {
        self.term_index.get(term)
    }

    /// Posting set for a bigram key (`"term1 term2"`), `None` if absent.
    pub fn bigram_postings(&self, key: &str) -> Option<&AHashSet<DocId>> {
        self.bigram_index.get(key)
    }

    /// Point-in-time statistics summary.
    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            documents_ingested: self.stats.documents_ingested(),
            total_tokens: self.stats.total_tokens(),
            distinct_terms: self.term_index.len() as u64,
            distinct_pairs: self.bigram_index.len() as u64,
        }
    }

    /// Export the single-term index as a term-to-ids mapping.
    ///
    /// Keys are sorted and each id array is sorted ascending, so the
    /// export (and its JSON form) is deterministic.
    pub fn export_term_index(&self) -> BTreeMap<String, Vec<DocId>> {
        Self::export_map(&self.term_index)
    }

    /// Export the bigram index as a `"term1 term2"`-to-ids mapping.
    pub fn export_bigram_index(&self) -> BTreeMap<String, Vec<DocId>> {
        Self::export_map(&self.bigram_index)
    }

    /// Write the single-term index to a file as JSON.
    pub fn save_term_index<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        Self::save_json(&self.export_term_index(), path)
    }

    /// Write the bigram index to a file as JSON.
    pub fn save_bigram_index<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        Self::save_json(&self.export_bigram_index(), path)
    }

    fn export_map(index: &AHashMap<String, AHashSet<DocId>>) -> BTreeMap<String, Vec<DocId>> {
        index
            .iter()
            .map(|(key, doc_ids)| {
                let mut ids: Vec<DocId> = doc_ids.iter().copied().collect();
                ids.sort_unstable();
                (key.clone(), ids)
            })
            .collect()
    }

    fn save_json<P: AsRef<Path>>(map: &BTreeMap<String, Vec<DocId>>, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, map)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::builder::IndexBuilder;

    fn small_index() -> FrozenIndex {
        let mut builder = IndexBuilder::default();
        builder.ingest_document("a.txt", "the cat sat").unwrap();
        builder.ingest_document("b.txt", "the dog ran").unwrap();
        builder.freeze()
    }

    #[test]
    fn test_summary_counts() {
        let index = small_index();
        let summary = index.summary();
        assert_eq!(summary.documents_ingested, 2);
        assert_eq!(summary.total_tokens, 6);
        assert_eq!(summary.distinct_terms, 5);
        assert_eq!(summary.distinct_pairs, 4);
    }

    #[test]
    fn test_export_is_sorted() {
        let index = small_index();
        let export = index.export_term_index();

        let keys: Vec<&String> = export.keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);

        let the_ids = &export["the"];
        assert_eq!(the_ids, &vec![0, 1]);
    }

    #[test]
    fn test_export_bigram_key_join() {
        let index = small_index();
        let export = index.export_bigram_index();
        assert!(export.contains_key("the cat"));
        assert!(export.contains_key("dog ran"));
        // Exactly one ASCII space joins the pair.
        assert!(export.keys().all(|k| k.matches(' ').count() == 1));
    }

    #[test]
    fn test_save_round_trip() {
        let index = small_index();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terms.json");
        index.save_term_index(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<String, Vec<DocId>> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, index.export_term_index());
    }
}
