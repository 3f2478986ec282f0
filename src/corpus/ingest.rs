//! Corpus ingestion drivers.
//!
//! Two drivers build a [`FrozenIndex`] from a directory tree:
//!
//! - [`ingest_corpus`] - sequential single-writer loop, and
//! - [`ingest_corpus_parallel`] - reads and analyzes documents on a
//!   worker pool while a single owner commits the results one at a time.
//!
//! Analysis is pure, so parallelizing it is safe; index and statistics
//! mutation stays serialized in both drivers. Each document's id is
//! assigned at commit time, atomically with its index entries. Note that
//! the parallel driver commits in worker completion order, so document
//! ids are not stable across parallel runs.

use std::path::Path;
use std::sync::Arc;

use crossbeam_channel::bounded;
use log::{info, warn};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::corpus::walker::CorpusWalker;
use crate::error::{CorporaError, Result};
use crate::index::builder::IndexBuilder;
use crate::index::frozen::FrozenIndex;

/// What to do when a single document fails to read or analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IngestErrorPolicy {
    /// Log a warning and continue with the next document.
    #[default]
    Skip,

    /// Propagate the failure and abort the run.
    Abort,
}

/// Options for an ingestion run.
#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    /// Per-document failure policy.
    pub policy: IngestErrorPolicy,

    /// Worker thread count for the parallel driver. `None` uses the
    /// number of available CPUs.
    pub threads: Option<usize>,
}

/// Build an index over all files under `root`, sequentially.
///
/// Returns [`CorporaError::Config`] before any ingestion if `root` is not
/// a directory. Per-document failures follow `options.policy`.
pub fn ingest_corpus<P: AsRef<Path>>(
    root: P,
    analyzer: Arc<Analyzer>,
    options: &IngestOptions,
) -> Result<FrozenIndex> {
    let walker = CorpusWalker::new(root)?;
    let files = walker.files()?;
    info!(
        "ingesting {} files under {}",
        files.len(),
        walker.root().display()
    );

    let mut builder = IndexBuilder::new(analyzer);
    for path in files {
        let outcome = CorpusWalker::read_document(&path)
            .and_then(|text| builder.ingest_document(path.display().to_string(), &text));
        if let Err(e) = outcome {
            handle_document_error(&path, e, options.policy)?;
        }
    }

    info!("ingested {} documents", builder.documents_ingested());
    Ok(builder.freeze())
}

/// Build an index over all files under `root`, analyzing documents in
/// parallel.
///
/// Workers read and analyze documents on a thread pool and send the
/// normalized token sequences over a bounded channel; this thread is the
/// single mutation owner, committing them one at a time.
pub fn ingest_corpus_parallel<P: AsRef<Path>>(
    root: P,
    analyzer: Arc<Analyzer>,
    options: &IngestOptions,
) -> Result<FrozenIndex> {
    let walker = CorpusWalker::new(root)?;
    let files = walker.files()?;
    let threads = options.threads.unwrap_or_else(num_cpus::get);
    info!(
        "ingesting {} files under {} with {} workers",
        files.len(),
        walker.root().display(),
        threads
    );

    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("corpus-ingest-{i}"))
        .build()
        .map_err(|e| CorporaError::other(format!("failed to create thread pool: {e}")))?;

    let (tx, rx) = bounded(threads * 2);
    let worker_analyzer = analyzer.clone();
    pool.spawn(move || {
        files.into_par_iter().for_each_with(tx, |tx, path| {
            let analyzed = CorpusWalker::read_document(&path).and_then(|text| {
                worker_analyzer
                    .analyze(&text)
                    .map(|tokens| tokens.into_iter().map(|t| t.text).collect::<Vec<String>>())
            });
            // The receiver may be gone if the run aborted early.
            let _ = tx.send((path, analyzed));
        });
    });

    let mut builder = IndexBuilder::new(analyzer);
    for (path, analyzed) in rx {
        match analyzed {
            Ok(terms) => {
                builder.commit_document(path.display().to_string(), terms);
            }
            Err(e) => handle_document_error(&path, e, options.policy)?,
        }
    }

    info!("ingested {} documents", builder.documents_ingested());
    Ok(builder.freeze())
}

fn handle_document_error(path: &Path, error: CorporaError, policy: IngestErrorPolicy) -> Result<()> {
    match policy {
        IngestErrorPolicy::Skip => {
            warn!("skipping {}: {}", path.display(), error);
            Ok(())
        }
        IngestErrorPolicy::Abort => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_corpus(files: &[(&str, &[u8])]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    #[test]
    fn test_sequential_ingest() {
        let dir = write_corpus(&[("a.txt", b"the cat"), ("b.txt", b"the dog")]);
        let index =
            ingest_corpus(dir.path(), Arc::new(Analyzer::default()), &IngestOptions::default())
                .unwrap();

        let summary = index.summary();
        assert_eq!(summary.documents_ingested, 2);
        assert_eq!(summary.total_tokens, 4);
    }

    #[test]
    fn test_invalid_root_is_config_error() {
        let err = ingest_corpus(
            "/no/such/corpus",
            Arc::new(Analyzer::default()),
            &IngestOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CorporaError::Config(_)));
    }

    #[test]
    fn test_skip_policy_skips_binary_files() {
        let dir = write_corpus(&[("a.txt", b"good text"), ("bad.bin", &[0xff, 0xfe])]);
        let index =
            ingest_corpus(dir.path(), Arc::new(Analyzer::default()), &IngestOptions::default())
                .unwrap();
        assert_eq!(index.summary().documents_ingested, 1);
    }

    #[test]
    fn test_abort_policy_propagates() {
        let dir = write_corpus(&[("bad.bin", &[0xff, 0xfe])]);
        let options = IngestOptions {
            policy: IngestErrorPolicy::Abort,
            ..Default::default()
        };
        let err =
            ingest_corpus(dir.path(), Arc::new(Analyzer::default()), &options).unwrap_err();
        assert!(matches!(err, CorporaError::Ingest(_)));
    }

    #[test]
    fn test_parallel_matches_sequential_statistics() {
        let dir = write_corpus(&[
            ("a.txt", b"the cat sat on the mat"),
            ("b.txt", b"the dog ran"),
            ("c.txt", b""),
            ("d.txt", b"cats and dogs"),
        ]);
        let analyzer = Arc::new(Analyzer::default());
        let options = IngestOptions {
            threads: Some(2),
            ..Default::default()
        };

        let sequential = ingest_corpus(dir.path(), analyzer.clone(), &options).unwrap();
        let parallel = ingest_corpus_parallel(dir.path(), analyzer, &options).unwrap();

        // Ids may differ between the two drivers; summaries and exported
        // key sets must not.
        assert_eq!(sequential.summary(), parallel.summary());
        let seq_export = sequential.export_term_index();
        let par_export = parallel.export_term_index();
        let seq_terms: Vec<&String> = seq_export.keys().collect();
        let par_terms: Vec<&String> = par_export.keys().collect();
        assert_eq!(seq_terms, par_terms);
    }
}
