//! In-memory document index.
//!
//! Brute-force search over hashed embeddings. Useful for tests, for the
//! CLI, and for small personal corpora.

use crate::embed::HashEmbedder;
use crate::{DocumentIndex, IndexHit, IndexStatus, VectorError, VectorResult};
use std::collections::HashSet;
use std::sync::RwLock;
use tracing::debug;

struct IndexedDocument {
    source: String,
    content: String,
    tokens: HashSet<String>,
    vector: Vec<f32>,
}

/// In-memory index using brute-force search.
///
/// Documents keep their insertion order; ties in score are resolved in
/// favour of the earlier document. Only documents sharing at least one
/// token with the query are candidates, so hash collisions alone never
/// produce a hit.
pub struct InMemoryIndex {
    documents: RwLock<Vec<IndexedDocument>>,
    embedder: HashEmbedder,
}

impl InMemoryIndex {
    /// Create a new in-memory index with the specified dimension.
    ///
    /// Documents are ranked by cosine similarity.
    pub fn new(dimension: usize) -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            embedder: HashEmbedder::new(dimension),
        }
    }

    /// Embed and add a document. A document with the same source replaces
    /// the previous one in place.
    pub fn add(&self, source: impl Into<String>, content: impl Into<String>) -> VectorResult<()> {
        let source = source.into();
        let content = content.into();
        let vector = self.embedder.embed(&content)?;
        let tokens = HashEmbedder::tokenize(&content).into_iter().collect();

        let mut docs = self
            .documents
            .write()
            .map_err(|e| VectorError::Connection(format!("Failed to acquire write lock: {}", e)))?;

        let doc = IndexedDocument {
            source,
            content,
            tokens,
            vector,
        };
        match docs.iter_mut().find(|d| d.source == doc.source) {
            Some(existing) => *existing = doc,
            None => docs.push(doc),
        }
        Ok(())
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.documents.read().map(|d| d.len()).unwrap_or(0)
    }

    /// Whether the index holds no documents.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every document.
    pub fn clear(&self) -> VectorResult<()> {
        let mut docs = self
            .documents
            .write()
            .map_err(|e| VectorError::Connection(format!("Failed to acquire write lock: {}", e)))?;
        docs.clear();
        Ok(())
    }
}

impl Default for InMemoryIndex {
    fn default() -> Self {
        Self::new(256)
    }
}

impl DocumentIndex for InMemoryIndex {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn search(&self, query: &str, n_results: usize) -> VectorResult<Vec<IndexHit>> {
        let query_vector = self.embedder.embed(query)?;
        let query_tokens = HashEmbedder::tokenize(query);

        let docs = self
            .documents
            .read()
            .map_err(|e| VectorError::Connection(format!("Failed to acquire read lock: {}", e)))?;

        let mut scored: Vec<_> = docs
            .iter()
            .filter(|doc| query_tokens.iter().any(|t| doc.tokens.contains(t)))
            .map(|doc| (doc, crate::util::cosine_similarity(&query_vector, &doc.vector)))
            .collect();

        // Stable sort keeps insertion order among equal scores
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let hits: Vec<IndexHit> = scored
            .into_iter()
            .filter(|(_, score)| *score > 0.0)
            .take(n_results)
            .map(|(doc, score)| IndexHit {
                source: doc.source.clone(),
                content: doc.content.clone(),
                score,
            })
            .collect();

        debug!(query, hits = hits.len(), "in-memory index search");
        Ok(hits)
    }

    fn status(&self) -> IndexStatus {
        IndexStatus {
            backend: self.name().to_string(),
            documents: self.len(),
            dimension: self.embedder.dimension(),
            ready: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> InMemoryIndex {
        let index = InMemoryIndex::new(256);
        index
            .add("organoid.md", "uterine organoid culture in matrigel with wnt3a")
            .unwrap();
        index
            .add("stem.md", "embryonic stem cell pluripotency markers oct4 nanog")
            .unwrap();
        index
            .add("quantum.md", "superconducting qubit decoherence")
            .unwrap();
        index
    }

    #[test]
    fn test_search_ranks_overlap_first() {
        let index = seeded();
        let hits = index.search("organoid culture matrigel stem", 2).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].source, "organoid.md");
        assert!(hits[0].score >= hits[1].score);
    }

    #[test]
    fn test_n_results_caps_hits() {
        let index = seeded();
        let query = "organoid stem superconducting";
        assert_eq!(index.search(query, 10).unwrap().len(), 3);
        assert_eq!(index.search(query, 1).unwrap().len(), 1);
        assert!(index.search(query, 0).unwrap().is_empty());
    }

    #[test]
    fn test_unrelated_topics_get_no_hits() {
        let index = InMemoryIndex::default();
        index
            .add(
                "knowledge/uterine_organoid/maturation",
                "progesterone drives organoid maturation in matrigel domes",
            )
            .unwrap();

        for topic in [
            "hepatocyte",
            "insulin secretion",
            "keratin",
            "cardiomyocyte beating",
            "neural crest migration",
            "superconducting qubit",
            "retinal ganglion",
            "bone marrow niche",
        ] {
            assert!(index.search(topic, 5).unwrap().is_empty(), "hit for {topic}");
        }
        assert_eq!(index.search("Organoid", 5).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_index_returns_nothing() {
        let index = InMemoryIndex::default();
        assert!(index.search("organoid", 5).unwrap().is_empty());
    }

    #[test]
    fn test_add_replaces_same_source() {
        let index = seeded();
        index.add("stem.md", "induced pluripotent stem cells").unwrap();
        assert_eq!(index.len(), 3);

        let hits = index.search("induced pluripotent", 1).unwrap();
        assert_eq!(hits[0].content, "induced pluripotent stem cells");
    }

    #[test]
    fn test_empty_query_is_an_error() {
        let index = seeded();
        assert!(matches!(
            index.search("", 5),
            Err(VectorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_status_reports_counts() {
        let index = seeded();
        let status = index.status();
        assert_eq!(status.backend, "in-memory");
        assert_eq!(status.documents, 3);
        assert_eq!(status.dimension, 256);
        assert!(status.ready);

        index.clear().unwrap();
        assert!(index.is_empty());
    }
}
