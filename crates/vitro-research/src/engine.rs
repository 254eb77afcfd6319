//! The research engine: retrieve, merge, prompt, delegate.

use crate::config::ResearchConfig;
use crate::scanner::scan_directories;
use crate::snippet::RetrievedSnippet;
use thiserror::Error;
use tracing::{debug, error, info};
use vitro_llm::{AnalysisPrompt, DebatePrompt, LlmError, PromptTemplate, ReasoningBackend, TaskType};
use vitro_vectors::{DocumentIndex, IndexStatus};

/// Returned when neither source produced a snippet.
pub const NO_RESULTS_MESSAGE: &str =
    "🔍 No related documents found. Try a broader topic.";

/// Research engine errors.
#[derive(Debug, Error)]
pub enum ResearchError {
    #[error("Reasoning backend failed: {0}")]
    Reasoning(#[from] LlmError),

    #[error("Invalid research configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for research operations.
pub type ResearchResult<T> = Result<T, ResearchError>;

impl ResearchConfig {
    /// Reject limits that would make every analysis empty.
    pub fn validate(&self) -> ResearchResult<()> {
        if self.search_dirs.iter().any(|d| d.trim().is_empty()) {
            return Err(ResearchError::InvalidConfig("search_dirs contains an empty name".into()));
        }
        if self.extension.is_empty() {
            return Err(ResearchError::InvalidConfig("extension must not be empty".into()));
        }
        if self.max_merged == 0 || self.max_collected == 0 {
            return Err(ResearchError::InvalidConfig(
                "max_merged and max_collected must be at least 1".into(),
            ));
        }
        if self.snippet_chars == 0 {
            return Err(ResearchError::InvalidConfig("snippet_chars must be at least 1".into()));
        }
        Ok(())
    }
}

/// Orchestrates multi-source discovery and hands the merged context to a
/// reasoning backend.
///
/// Snippet order is insertion order: index hits first, then search folders
/// in configured order, then files in sorted walk order. Because only the
/// first `max_merged` snippets reach the prompt, this order decides what
/// the backend sees.
pub struct ResearchEngine<I, B> {
    index: I,
    backend: B,
    config: ResearchConfig,
}

impl<I: DocumentIndex, B: ReasoningBackend> ResearchEngine<I, B> {
    /// Create an engine with default limits rooted at the current directory.
    pub fn new(index: I, backend: B) -> Self {
        Self {
            index,
            backend,
            config: ResearchConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ResearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResearchConfig {
        &self.config
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Gather snippets from the vector index and the research folders.
    ///
    /// Never fails: an index error counts as zero hits.
    pub fn collect_snippets(&self, topic: &str) -> Vec<RetrievedSnippet> {
        let mut collected = Vec::new();

        match self.index.search(topic, self.config.vector_hits) {
            Ok(hits) => {
                collected.extend(
                    hits.into_iter()
                        .take(self.config.vector_hits.min(self.config.max_collected))
                        .map(|hit| {
                            RetrievedSnippet::from_index(hit.source, &hit.content, self.config.snippet_chars)
                        }),
                );
            }
            Err(e) => {
                error!(index = self.index.name(), error = %e, "vector search failed, continuing without index hits");
            }
        }
        let from_index = collected.len();

        scan_directories(&self.config, topic, &mut collected);
        debug!(
            topic,
            from_index,
            from_files = collected.len() - from_index,
            "collected snippets"
        );

        collected
    }

    /// Join the first `max_merged` snippets with blank lines.
    pub fn merge_context(&self, snippets: &[RetrievedSnippet]) -> String {
        snippets
            .iter()
            .take(self.config.max_merged)
            .map(RetrievedSnippet::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Pick the analysis or debate template.
    pub fn build_prompt(topic: &str, context: &str, debate: bool) -> (String, TaskType) {
        if debate {
            let prompt = DebatePrompt::new(topic, context);
            (prompt.generate(), prompt.task_type())
        } else {
            let prompt = AnalysisPrompt::new(topic, context);
            (prompt.generate(), prompt.task_type())
        }
    }

    /// Retrieve, merge and delegate. Returns the backend's answer verbatim,
    /// or [`NO_RESULTS_MESSAGE`] when nothing matched.
    pub async fn analyze(&self, topic: &str, debate: bool) -> ResearchResult<String> {
        info!(topic, debate, "starting {}", if debate { "debate" } else { "meta-analysis" });

        let snippets = self.collect_snippets(topic);
        if snippets.is_empty() {
            info!(topic, "no documents matched");
            return Ok(NO_RESULTS_MESSAGE.to_string());
        }

        let context = self.merge_context(&snippets);
        let (prompt, task_type) = Self::build_prompt(topic, &context, debate);

        let (response, meta) = self.backend.think(&prompt, task_type).await?;
        debug!(backend = %meta.backend, model = %meta.model, "reasoning complete");
        Ok(response)
    }

    /// Status of the underlying index, passed through untouched.
    pub fn get_stats(&self) -> IndexStatus {
        self.index.status()
    }
}
