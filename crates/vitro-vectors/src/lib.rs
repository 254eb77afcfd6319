//! # Vitro Vectors
//!
//! Vector-index facade used by Vitro's research engine.
//!
//! The research engine only needs one thing from an index: given a text
//! query, return up to `n` ranked document fragments with their source.
//! [`DocumentIndex`] captures that contract so that a hosted index and the
//! built-in [`InMemoryIndex`] are interchangeable.
//!
//! ## Quick Start
//!
//! ```rust
//! use vitro_vectors::{DocumentIndex, InMemoryIndex};
//!
//! let index = InMemoryIndex::new(256);
//! index.add("notes/organoids.md", "Endometrial organoids grow in Matrigel domes").unwrap();
//! index.add("notes/stem.md", "iPSC differentiation with BMP4").unwrap();
//!
//! let hits = index.search("organoids matrigel", 5).unwrap();
//! assert_eq!(hits[0].source, "notes/organoids.md");
//! ```

pub mod embed;
pub mod memory;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when working with a document index.
#[derive(Error, Debug)]
pub enum VectorError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Index unavailable: {0}")]
    Unavailable(String),
}

/// Result type for vector operations.
pub type VectorResult<T> = Result<T, VectorError>;

/// A document fragment returned by an index search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexHit {
    /// Where the fragment came from (path, URL or document id).
    pub source: String,
    /// Fragment text.
    pub content: String,
    /// Similarity score (higher is more similar).
    pub score: f32,
}

/// Status report of an index, passed through untouched by the research engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexStatus {
    /// Backend name.
    pub backend: String,
    /// Number of indexed documents.
    pub documents: usize,
    /// Embedding dimension.
    pub dimension: usize,
    /// Whether the index can currently serve queries.
    pub ready: bool,
}

/// Abstract interface for text search over an embedded corpus.
///
/// Results are ordered best first. Callers should not rely on any field
/// beyond `source` and `content` being meaningful.
pub trait DocumentIndex: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Search for the `n_results` fragments most similar to `query`.
    fn search(&self, query: &str, n_results: usize) -> VectorResult<Vec<IndexHit>>;

    /// Report the index status.
    fn status(&self) -> IndexStatus;
}

impl<T: DocumentIndex + ?Sized> DocumentIndex for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn search(&self, query: &str, n_results: usize) -> VectorResult<Vec<IndexHit>> {
        (**self).search(query, n_results)
    }

    fn status(&self) -> IndexStatus {
        (**self).status()
    }
}

// Re-export commonly used types
pub use embed::HashEmbedder;
pub use memory::InMemoryIndex;

/// Utility functions for vector operations.
pub mod util {
    /// Compute cosine similarity between two vectors.
    ///
    /// Returns 0.0 when the dimensions differ or either vector is zero.
    pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        if a.len() != b.len() {
            return 0.0;
        }

        let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            0.0
        } else {
            dot / (norm_a * norm_b)
        }
    }

    /// Normalize a vector to unit length.
    pub fn normalize(v: &mut [f32]) {
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in v.iter_mut() {
                *x /= norm;
            }
        }
    }
}
