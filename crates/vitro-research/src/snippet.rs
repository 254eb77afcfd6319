//! Retrieved document fragments.

use serde::{Deserialize, Serialize};

/// Where a snippet was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SnippetOrigin {
    /// Returned by the vector index.
    VectorIndex,
    /// Found by the filesystem scan under the named search folder.
    Filesystem { dir: String },
}

/// One matched document fragment with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedSnippet {
    /// Source label (index source or `<dir>/<file name>`).
    pub source: String,
    /// Leading characters of the document.
    pub content: String,
    /// Whether `content` was cut short.
    pub truncated: bool,
    pub origin: SnippetOrigin,
}

impl RetrievedSnippet {
    /// Snippet from a vector-index hit.
    pub fn from_index(source: impl Into<String>, content: &str, max_chars: usize) -> Self {
        let (content, truncated) = truncate_chars(content, max_chars);
        Self {
            source: source.into(),
            content,
            truncated,
            origin: SnippetOrigin::VectorIndex,
        }
    }

    /// Snippet from a file found under search folder `dir`.
    pub fn from_file(dir: &str, file_name: &str, content: &str, max_chars: usize) -> Self {
        let (content, truncated) = truncate_chars(content, max_chars);
        Self {
            source: format!("{}/{}", dir, file_name),
            content,
            truncated,
            origin: SnippetOrigin::Filesystem {
                dir: dir.to_string(),
            },
        }
    }

    /// Labelled text block placed in the merged context.
    pub fn render(&self) -> String {
        match &self.origin {
            SnippetOrigin::VectorIndex => {
                format!("Source (vector index): {}\nContent:\n{}", self.source, self.content)
            }
            SnippetOrigin::Filesystem { .. } => {
                let ellipsis = if self.truncated { "..." } else { "" };
                format!("Source ({}): {}{}", self.source, self.content, ellipsis)
            }
        }
    }
}

/// Keep at most `max_chars` characters, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (text[..byte_idx].to_string(), true),
        None => (text.to_string(), false),
    }
}
