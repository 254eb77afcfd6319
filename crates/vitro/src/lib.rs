//! # Vitro
//!
//! A personal research assistant for uterine organoid and stem cell work.
//!
//! Vitro has two independent halves. The research engine gathers notes
//! from a vector index and from local research folders, merges them into
//! one context and hands it to a reasoning backend, either for a single
//! analysis or for an adversarial two-hypothesis debate. The biology
//! cartridge is a stateful session over static domain knowledge, ethics
//! rules and an experiment planner.
//!
//! ## Quick Start
//!
//! ```rust
//! use vitro::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let index = InMemoryIndex::default();
//! index.add("notes/wnt.md", "Wnt3a keeps the endometrial organoid proliferative").unwrap();
//!
//! let engine = ResearchEngine::new(index, MockBackend::new())
//!     .with_config(ResearchConfig::default().with_root("/nonexistent"));
//!
//! let answer = engine.analyze("organoid", false).await.unwrap();
//! assert_eq!(answer, "Mock general response");
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`vitro_core`] - Shared domain types and errors
//! - [`vitro_llm`] - Reasoning backends and prompt templates
//! - [`vitro_vectors`] - Vector-index facade and in-memory index
//! - [`vitro_research`] - Multi-source retrieval and merge
//! - [`vitro_cartridge`] - Biology cartridge session
//!
//! ## Retrieval order
//!
//! | Stage | Limit | Order |
//! |-------|-------|-------|
//! | Vector index | 5 hits | index ranking |
//! | Research folders | 10 snippets total | folder order, then file name |
//! | Merged context | 8 snippets | first-found first-kept |

pub use vitro_cartridge as cartridge;
pub use vitro_core as core;
pub use vitro_llm as llm;
pub use vitro_research as research;
pub use vitro_vectors as vectors;

/// Prelude module for convenient imports.
///
/// ```rust
/// use vitro::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use vitro_core::prelude::{Hypothesis, ResearchDomain, VitroError};

    // Reasoning
    pub use vitro_llm::{
        AnalysisPrompt, DebatePrompt, LlmConfig, LlmError, MockBackend, PromptTemplate,
        ReasoningBackend, TaskType,
    };

    #[cfg(feature = "ollama")]
    pub use vitro_llm::OllamaBackend;

    // Vector index
    pub use vitro_vectors::{DocumentIndex, InMemoryIndex, IndexHit, IndexStatus, VectorError};

    // Retrieval
    pub use vitro_research::{
        ResearchConfig, ResearchEngine, ResearchError, RetrievedSnippet, NO_RESULTS_MESSAGE,
    };

    // Cartridge
    pub use vitro_cartridge::{
        Cartridge, CartridgeError, CartridgeStatus, EthicsEvaluator, ExperimentIntent,
        ExperimentPlan, ExperimentPlanner, KnowledgeStore, Mode, ResearchProject,
        ResearchRecord, SampleSummary, SnapshotStatus,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
