//! Retrieval limits and locations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Research folders scanned, in order.
pub const DEFAULT_SEARCH_DIRS: [&str; 3] = ["01-Analysis", "02-Literature", "03-Vault"];
/// Only files with exactly this extension are read.
pub const DEFAULT_EXTENSION: &str = "md";
/// Hits requested from the vector index.
pub const VECTOR_HITS: usize = 5;
/// Snippets collected before scanning stops.
pub const MAX_COLLECTED: usize = 10;
/// Snippets merged into the prompt context.
pub const MAX_MERGED: usize = 8;
/// Characters kept from each document.
pub const SNIPPET_CHARS: usize = 1000;

/// Where to look and how much to keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_search_dirs")]
    pub search_dirs: Vec<String>,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_vector_hits")]
    pub vector_hits: usize,
    #[serde(default = "default_max_collected")]
    pub max_collected: usize,
    #[serde(default = "default_max_merged")]
    pub max_merged: usize,
    #[serde(default = "default_snippet_chars")]
    pub snippet_chars: usize,
}

// Default value functions
fn default_root() -> PathBuf { PathBuf::from(".") }
fn default_search_dirs() -> Vec<String> { DEFAULT_SEARCH_DIRS.iter().map(|d| d.to_string()).collect() }
fn default_extension() -> String { DEFAULT_EXTENSION.to_string() }
fn default_vector_hits() -> usize { VECTOR_HITS }
fn default_max_collected() -> usize { MAX_COLLECTED }
fn default_max_merged() -> usize { MAX_MERGED }
fn default_snippet_chars() -> usize { SNIPPET_CHARS }

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            search_dirs: default_search_dirs(),
            extension: default_extension(),
            vector_hits: default_vector_hits(),
            max_collected: default_max_collected(),
            max_merged: default_max_merged(),
            snippet_chars: default_snippet_chars(),
        }
    }
}

impl ResearchConfig {
    /// Set the directory the search folders live under.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Replace the search folders.
    pub fn with_search_dirs<S: Into<String>>(mut self, dirs: impl IntoIterator<Item = S>) -> Self {
        self.search_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the file extension, with or without a leading dot.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Absolute or root-relative paths of the search folders, in scan order.
    pub fn search_paths(&self) -> Vec<(String, PathBuf)> {
        self.search_dirs
            .iter()
            .map(|d| (d.clone(), self.root.join(d)))
            .collect()
    }
}
