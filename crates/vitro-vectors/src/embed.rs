//! Hash-based text embedder.
//!
//! Words are hashed into a fixed-dimension signed bag-of-words vector.
//! Not semantically rich, but deterministic and model-free, which is all
//! the in-memory index needs.

use crate::{VectorError, VectorResult};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hash-based embedder.
///
/// ```rust
/// use vitro_vectors::HashEmbedder;
///
/// let embedder = HashEmbedder::new(128);
/// let vec = embedder.embed("uterine organoid").unwrap();
/// assert_eq!(vec.len(), 128);
/// ```
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dimension: usize,
    num_hashes: usize,
}

impl HashEmbedder {
    /// Create a new embedder with the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
            num_hashes: 4,
        }
    }

    /// Embedding dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Tokenize text into lowercase words of two or more characters.
    pub fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.chars().count() > 1)
            .map(|s| s.to_string())
            .collect()
    }

    fn hash_with_seed(&self, word: &str, seed: u64) -> usize {
        let mut hasher = DefaultHasher::new();
        seed.hash(&mut hasher);
        word.hash(&mut hasher);
        (hasher.finish() as usize) % self.dimension
    }

    fn sign_hash(&self, word: &str, seed: u64) -> f32 {
        let mut hasher = DefaultHasher::new();
        (seed + 1000).hash(&mut hasher);
        word.hash(&mut hasher);
        if hasher.finish() % 2 == 0 { 1.0 } else { -1.0 }
    }

    /// Embed text into a unit-length vector.
    ///
    /// Text without any usable token yields the zero vector.
    pub fn embed(&self, text: &str) -> VectorResult<Vec<f32>> {
        if text.trim().is_empty() {
            return Err(VectorError::InvalidInput("Empty text".to_string()));
        }

        let mut vector = vec![0.0f32; self.dimension];
        for token in Self::tokenize(text) {
            for seed in 0..self.num_hashes as u64 {
                let idx = self.hash_with_seed(&token, seed);
                vector[idx] += self.sign_hash(&token, seed);
            }
        }

        crate::util::normalize(&mut vector);
        Ok(vector)
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(256)
    }
}
