//! # Vitro LLM
//!
//! The reasoning component used by Vitro's research engine.
//!
//! A reasoning backend receives an assembled prompt together with a
//! [`TaskType`] tag and answers with free text plus call metadata. The
//! research engine only ever reads the text.
//!
//! ## Features
//!
//! - `local`: Local backends (Ollama)
//! - `full`: All backends
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vitro_llm::{ReasoningBackend, OllamaBackend, TaskType};
//!
//! let backend = OllamaBackend::localhost()?;
//! let (answer, _meta) = backend.think("Compare these findings", TaskType::General).await?;
//! ```

mod backend;
mod types;
mod prompt;

pub use backend::{LlmConfig, LlmError, LlmResult, MockBackend, ReasoningBackend, RecordedCall};
pub use types::{TaskType, ThinkMetadata};
pub use prompt::{AnalysisPrompt, DebatePrompt, PromptTemplate};

#[cfg(feature = "local")]
mod ollama;
#[cfg(feature = "local")]
pub use ollama::OllamaBackend;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{LlmConfig, LlmError, LlmResult, MockBackend, ReasoningBackend};
    pub use crate::{TaskType, ThinkMetadata};
    pub use crate::{AnalysisPrompt, DebatePrompt, PromptTemplate};

    #[cfg(feature = "local")]
    pub use crate::OllamaBackend;
}
