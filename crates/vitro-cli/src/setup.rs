//! Builds the runtime pieces a command needs from the loaded config.

use anyhow::{Context, Result};
use tracing::{debug, warn};
use vitro::cartridge::{KnowledgeStore, ResearchRecord};
use vitro::llm::{MockBackend, ReasoningBackend};
use vitro::research::ResearchEngine;
use vitro::vectors::InMemoryIndex;

use crate::config::{BackendKind, Config, ReasoningConfig};

/// Engine type used by `analyze` and `debate`.
pub type CliEngine = ResearchEngine<InMemoryIndex, Box<dyn ReasoningBackend>>;

/// Built-in knowledge plus whatever snapshot sits in the knowledge dir.
pub fn open_knowledge(config: &Config) -> Result<KnowledgeStore> {
    KnowledgeStore::open(&config.knowledge.dir).with_context(|| {
        format!(
            "Failed to open knowledge store at {}",
            config.knowledge.dir.display()
        )
    })
}

/// In-memory index seeded from the stored research records.
pub fn build_index(knowledge: &KnowledgeStore) -> InMemoryIndex {
    let index = InMemoryIndex::default();
    for (key, records) in knowledge.research_data() {
        for record in records {
            let source = index_source(key, record);
            if let Err(e) = index.add(&source, format!("{}\n{}", record.title, record.summary)) {
                warn!(source = %source, error = %e, "skipping record that could not be indexed");
            }
        }
    }
    debug!(documents = index.len(), "seeded vector index");
    index
}

fn index_source(key: &str, record: &ResearchRecord) -> String {
    record
        .source
        .clone()
        .unwrap_or_else(|| format!("knowledge/{}/{}", key, record.title))
}

/// Reasoning backend selected in `[reasoning]`.
pub fn build_backend(config: &ReasoningConfig) -> Result<Box<dyn ReasoningBackend>> {
    match config.backend {
        BackendKind::Mock => {
            warn!("mock reasoning backend selected; set [reasoning] backend = \"ollama\" for real answers");
            Ok(Box::new(MockBackend::new()))
        }
        BackendKind::Ollama => ollama_backend(config),
    }
}

#[cfg(feature = "ollama")]
fn ollama_backend(config: &ReasoningConfig) -> Result<Box<dyn ReasoningBackend>> {
    use vitro::llm::{LlmConfig, OllamaBackend};

    let llm = LlmConfig::ollama()
        .with_model(config.model.as_str())
        .with_timeout(config.timeout_secs);
    let backend = OllamaBackend::with_config(&config.endpoint, llm)
        .context("Failed to create Ollama backend")?;
    Ok(Box::new(backend))
}

#[cfg(not(feature = "ollama"))]
fn ollama_backend(_config: &ReasoningConfig) -> Result<Box<dyn ReasoningBackend>> {
    anyhow::bail!("This build has no Ollama support. Rebuild with --features ollama.")
}

/// Whether answers from `backend` are canned placeholders.
pub fn is_placeholder(backend: &dyn ReasoningBackend) -> bool {
    backend.name() == "mock"
}

/// Everything `analyze` needs.
pub fn build_engine(config: &Config) -> Result<CliEngine> {
    let knowledge = open_knowledge(config)?;
    let index = build_index(&knowledge);
    let backend = build_backend(&config.reasoning)?;
    Ok(ResearchEngine::new(index, backend).with_config(config.research.clone()))
}
