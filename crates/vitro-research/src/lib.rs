//! # Vitro Research
//!
//! Multi-source retrieval and merge for research analysis.
//!
//! A single [`ResearchEngine::analyze`] call:
//!
//! 1. asks the vector index for the closest fragments,
//! 2. walks the local research folders for notes that mention the topic,
//! 3. merges the first snippets into one context block,
//! 4. wraps it in an analysis or debate prompt,
//! 5. and hands the prompt to a reasoning backend.
//!
//! Retrieval problems never abort an analysis. A failing index or an
//! unreadable note only means fewer snippets; zero snippets produce
//! [`NO_RESULTS_MESSAGE`] without contacting the backend.
//!
//! ## Example
//!
//! ```rust,ignore
//! use vitro_research::{ResearchConfig, ResearchEngine};
//! use vitro_vectors::InMemoryIndex;
//! use vitro_llm::MockBackend;
//!
//! let engine = ResearchEngine::new(InMemoryIndex::default(), MockBackend::new())
//!     .with_config(ResearchConfig::default().with_root("./lab"));
//! let answer = engine.analyze("endometrial organoid", false).await?;
//! ```

pub mod config;
pub mod engine;
pub mod scanner;
pub mod snippet;

pub use config::{
    ResearchConfig, DEFAULT_EXTENSION, DEFAULT_SEARCH_DIRS, MAX_COLLECTED, MAX_MERGED,
    SNIPPET_CHARS, VECTOR_HITS,
};
pub use engine::{ResearchEngine, ResearchError, ResearchResult, NO_RESULTS_MESSAGE};
pub use snippet::{RetrievedSnippet, SnippetOrigin};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{ResearchConfig, ResearchEngine, ResearchError, ResearchResult};
    pub use crate::{RetrievedSnippet, SnippetOrigin, NO_RESULTS_MESSAGE};
}
