//! Document registry: stable id assignment and id-to-path resolution.

use ahash::AHashMap;

use crate::index::DocId;

/// Registry of ingested documents.
///
/// Assigns sequential, zero-based [`DocId`]s and retains the id-to-path
/// mapping for query-time resolution. The registry is append-only: ids are
/// never reused and entries are never removed.
///
/// # Examples
///
/// ```
/// use corpora::index::registry::DocumentRegistry;
///
/// let mut registry = DocumentRegistry::new();
/// let a = registry.register("corpus/a.txt");
/// let b = registry.register("corpus/b.txt");
/// assert_eq!(a, 0);
/// assert_eq!(b, 1);
/// assert_eq!(registry.path(a), Some("corpus/a.txt"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentRegistry {
    paths: AHashMap<DocId, String>,
    next_id: DocId,
}

impl DocumentRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        DocumentRegistry {
            paths: AHashMap::new(),
            next_id: 0,
        }
    }

    /// Register a document, returning its assigned id.
    ///
    /// Ids are assigned sequentially starting at 0. This never fails and
    /// runs in constant time.
    pub fn register<S: Into<String>>(&mut self, path: S) -> DocId {
        let doc_id = self.next_id;
        self.paths.insert(doc_id, path.into());
        self.next_id += 1;
        doc_id
    }

    /// Get the path for a single document id.
    pub fn path(&self, doc_id: DocId) -> Option<&str> {
        self.paths.get(&doc_id).map(String::as_str)
    }

    /// Resolve a set of document ids to their paths.
    ///
    /// Ids without a registry entry are silently skipped. Ids only ever
    /// come from the index itself, so a miss here is a safety net rather
    /// than a user-facing failure. The output order follows the input
    /// order and carries no further guarantee.
    pub fn resolve<I>(&self, doc_ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = DocId>,
    {
        doc_ids
            .into_iter()
            .filter_map(|doc_id| self.paths.get(&doc_id).cloned())
            .collect()
    }

    /// Number of registered documents.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut registry = DocumentRegistry::new();
        for expected in 0..5 {
            let id = registry.register(format!("doc{expected}.txt"));
            assert_eq!(id, expected);
        }
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_resolve_skips_unknown_ids() {
        let mut registry = DocumentRegistry::new();
        registry.register("a.txt");
        registry.register("b.txt");

        let paths = registry.resolve([0, 99, 1]);
        assert_eq!(paths, vec!["a.txt".to_string(), "b.txt".to_string()]);
    }

    #[test]
    fn test_path_lookup() {
        let mut registry = DocumentRegistry::new();
        let id = registry.register("x.txt");
        assert_eq!(registry.path(id), Some("x.txt"));
        assert_eq!(registry.path(id + 1), None);
    }
}
