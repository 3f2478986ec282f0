//! Corpus directory traversal and document reading.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{CorporaError, Result};

/// Walks a corpus root directory and reads its documents.
///
/// The root is validated at construction time: a path that is not a
/// readable directory is a fatal configuration error, raised before any
/// ingestion begins. Traversal is recursive and deterministic (entries
/// sorted within each directory), so document ids are stable across runs
/// over the same tree.
///
/// # Examples
///
/// ```no_run
/// use corpora::corpus::walker::CorpusWalker;
///
/// let walker = CorpusWalker::new("corpus/")?;
/// for path in walker.files()? {
///     let text = CorpusWalker::read_document(&path)?;
///     println!("{}: {} bytes", path.display(), text.len());
/// }
/// # Ok::<(), corpora::error::CorporaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CorpusWalker {
    root: PathBuf,
}

impl CorpusWalker {
    /// Create a walker over the given corpus root.
    ///
    /// Returns [`CorporaError::Config`] if the root is not a directory.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(CorporaError::config(format!(
                "'{}' is not a directory",
                root.display()
            )));
        }
        Ok(CorpusWalker { root })
    }

    /// The corpus root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Collect all file paths under the root, depth-first, sorted within
    /// each directory.
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        Self::walk_dir(&self.root, &mut files)?;
        Ok(files)
    }

    fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
        let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<_>>()?;
        entries.sort();

        for path in entries {
            if path.is_dir() {
                Self::walk_dir(&path, files)?;
            } else {
                debug!("found corpus file {}", path.display());
                files.push(path);
            }
        }
        Ok(())
    }

    /// Read a document as UTF-8 text.
    ///
    /// A file that cannot be decoded as UTF-8 surfaces as
    /// [`CorporaError::Ingest`]; the caller's error policy decides whether
    /// that skips the document or aborts the run.
    pub fn read_document(path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;
        String::from_utf8(bytes).map_err(|_| {
            CorporaError::ingest(format!("'{}' is not valid UTF-8", path.display()))
        })
    }
}
