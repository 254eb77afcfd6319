//! Ollama backend for local reasoning.
//!
//! Requires the `local` feature and a running Ollama instance.

use crate::backend::{LlmConfig, LlmError, LlmResult, ReasoningBackend};
use crate::types::{TaskType, ThinkMetadata};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ollama API request.
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
    num_predict: u32,
}

/// Ollama API response.
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: String,
    #[serde(default)]
    eval_count: Option<u32>,
}

/// Ollama backend for local reasoning.
///
/// # Example
///
/// ```rust,ignore
/// use vitro_llm::{OllamaBackend, ReasoningBackend, TaskType};
///
/// let backend = OllamaBackend::new("http://localhost:11434")?;
/// let (answer, _) = backend.think("Summarize", TaskType::General).await?;
/// ```
pub struct OllamaBackend {
    endpoint: String,
    config: LlmConfig,
    client: reqwest::Client,
}

impl OllamaBackend {
    /// Create a new Ollama backend at the given endpoint.
    pub fn new(endpoint: &str) -> LlmResult<Self> {
        Self::with_config(endpoint, LlmConfig::ollama())
    }

    /// Create with custom config.
    pub fn with_config(endpoint: &str, config: LlmConfig) -> LlmResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs as u64))
            .build()
            .map_err(|e| LlmError::ConnectionFailed(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            config,
            client,
        })
    }

    /// Create with default localhost endpoint.
    pub fn localhost() -> LlmResult<Self> {
        Self::new("http://localhost:11434")
    }

    /// Set the model.
    pub fn with_model(mut self, model: &str) -> Self {
        self.config.model = model.to_string();
        self
    }

    /// System prompt for a task type.
    fn system_for(task_type: TaskType) -> &'static str {
        match task_type {
            TaskType::General => "You are a careful biology research assistant.",
            TaskType::Debate => {
                "You simulate a panel of researchers who disagree. Keep opposing positions separate."
            }
        }
    }

    /// Make a request to Ollama.
    async fn request(&self, prompt: &str, system: Option<&str>) -> LlmResult<(String, Option<u32>)> {
        let request = OllamaRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            system: system.map(|s| s.to_string()),
            stream: false,
            options: OllamaOptions {
                temperature: self.config.temperature,
                num_predict: self.config.max_tokens,
            },
        };

        let url = format!("{}/api/generate", self.endpoint);
        debug!(url = %url, model = %self.config.model, "sending prompt to ollama");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    LlmError::ConnectionFailed(format!(
                        "Cannot connect to Ollama at {}. Is Ollama running?",
                        self.endpoint
                    ))
                } else if e.is_timeout() {
                    LlmError::Timeout(self.config.timeout_secs)
                } else {
                    LlmError::ApiError(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 404 {
                return Err(LlmError::ModelNotFound(format!(
                    "Model '{}' not found. Run: ollama pull {}",
                    self.config.model, self.config.model
                )));
            }

            return Err(LlmError::ApiError(format!(
                "Ollama error {}: {}",
                status, body
            )));
        }

        let resp: OllamaResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        Ok((resp.response, resp.eval_count))
    }
}

#[async_trait]
impl ReasoningBackend for OllamaBackend {
    fn name(&self) -> &str {
        "ollama"
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    async fn think(&self, prompt: &str, task_type: TaskType) -> LlmResult<(String, ThinkMetadata)> {
        let (text, tokens) = self
            .request(prompt, Some(Self::system_for(task_type)))
            .await?;

        let mut meta = ThinkMetadata::new("ollama", &self.config.model, task_type);
        if let Some(tokens) = tokens {
            meta = meta.with_tokens(tokens);
        }
        Ok((text, meta))
    }

    async fn health_check(&self) -> LlmResult<bool> {
        let url = format!("{}/api/tags", self.endpoint);

        match self.client.get(&url).send().await {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(_) => Ok(false),
        }
    }
}
