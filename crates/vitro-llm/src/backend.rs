//! Core reasoning backend trait.

use crate::types::{TaskType, ThinkMetadata};
use async_trait::async_trait;
use std::sync::Mutex;
use thiserror::Error;
use tracing::debug;

/// Reasoning-related errors.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Context too long: {0} chars (max: {1})")]
    ContextTooLong(usize, usize),

    #[error("Timeout after {0} seconds")]
    Timeout(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for reasoning operations.
pub type LlmResult<T> = Result<T, LlmError>;

/// Configuration for reasoning requests.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model name/identifier.
    pub model: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Temperature (0.0 = deterministic, 1.0 = creative).
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout_secs: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "default".to_string(),
            max_tokens: 2048,
            temperature: 0.3,
            timeout_secs: 120,
        }
    }
}

impl LlmConfig {
    /// Create config for Ollama.
    pub fn ollama() -> Self {
        Self {
            model: "llama3.2".to_string(),
            max_tokens: 2048,
            temperature: 0.3,
            timeout_secs: 300, // Long research prompts on local models
        }
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set max tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 2.0);
        self
    }

    /// Set timeout.
    pub fn with_timeout(mut self, timeout_secs: u32) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Core trait for reasoning backends.
///
/// The research engine awaits exactly one `think` call per analysis; it
/// performs no retries and applies no timeout of its own.
#[async_trait]
pub trait ReasoningBackend: Send + Sync {
    /// Get the backend name.
    fn name(&self) -> &str;

    /// Get the current configuration.
    fn config(&self) -> &LlmConfig;

    /// Answer a prompt tagged with a task type.
    async fn think(&self, prompt: &str, task_type: TaskType) -> LlmResult<(String, ThinkMetadata)>;

    /// Check if the backend is available.
    async fn health_check(&self) -> LlmResult<bool> {
        match self.think("ping", TaskType::General).await {
            Ok(_) => Ok(true),
            Err(LlmError::ConnectionFailed(_)) => Ok(false),
            Err(_) => Ok(true),
        }
    }
}

#[async_trait]
impl<T: ReasoningBackend + ?Sized> ReasoningBackend for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn config(&self) -> &LlmConfig {
        (**self).config()
    }

    async fn think(&self, prompt: &str, task_type: TaskType) -> LlmResult<(String, ThinkMetadata)> {
        (**self).think(prompt, task_type).await
    }

    async fn health_check(&self) -> LlmResult<bool> {
        (**self).health_check().await
    }
}

/// One call observed by [`MockBackend`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub prompt: String,
    pub task_type: TaskType,
}

/// A mock backend for testing.
///
/// Answers with the first canned response whose pattern occurs in the
/// prompt, and remembers every call it received.
pub struct MockBackend {
    config: LlmConfig,
    responses: Vec<(String, String)>,
    failure: Option<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockBackend {
    /// Create a new mock backend.
    pub fn new() -> Self {
        Self {
            config: LlmConfig::default(),
            responses: Vec::new(),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Add a canned response for a prompt pattern.
    pub fn with_response(mut self, pattern: &str, response: &str) -> Self {
        self.responses.push((pattern.to_string(), response.to_string()));
        self
    }

    /// Make every call fail with an API error.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReasoningBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    async fn think(&self, prompt: &str, task_type: TaskType) -> LlmResult<(String, ThinkMetadata)> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                prompt: prompt.to_string(),
                task_type,
            });
        }

        if let Some(message) = &self.failure {
            return Err(LlmError::ApiError(message.clone()));
        }

        let response = self
            .responses
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| format!("Mock {} response", task_type));

        debug!(%task_type, prompt_chars = prompt.chars().count(), "mock backend answered");
        Ok((response, ThinkMetadata::new("mock", &self.config.model, task_type)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_backend() {
        let backend = MockBackend::new().with_response("organoid", "Organoid answer");

        let (response, meta) = backend
            .think("Tell me about organoid culture", TaskType::General)
            .await
            .unwrap();
        assert_eq!(response, "Organoid answer");
        assert_eq!(meta.backend, "mock");
    }

    #[tokio::test]
    async fn test_mock_default_response_mentions_task() {
        let backend = MockBackend::new();
        let (response, _) = backend.think("anything", TaskType::Debate).await.unwrap();
        assert_eq!(response, "Mock debate response");
    }

    #[tokio::test]
    async fn test_mock_records_calls() {
        let backend = MockBackend::new();
        backend.think("first", TaskType::General).await.unwrap();
        backend.think("second", TaskType::Debate).await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].prompt, "second");
        assert_eq!(calls[1].task_type, TaskType::Debate);
    }

    #[tokio::test]
    async fn test_failing_mock() {
        let backend = MockBackend::failing("quota exhausted");
        let err = backend.think("x", TaskType::General).await.unwrap_err();
        assert!(matches!(err, LlmError::ApiError(ref m) if m == "quota exhausted"));
        assert_eq!(backend.call_count(), 1);
        // API errors still count as reachable
        assert!(backend.health_check().await.unwrap());
    }

    #[test]
    fn test_config_builders() {
        let ollama = LlmConfig::ollama().with_model("mistral").with_temperature(5.0);
        assert_eq!(ollama.model, "mistral");
        assert_eq!(ollama.temperature, 2.0);
    }
}
