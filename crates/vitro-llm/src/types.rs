//! Core types for reasoning calls.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator passed along with every prompt.
///
/// Backends may route or tune on it; the research engine picks `Debate`
/// for adversarial runs and `General` for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Single-voice analysis and synthesis.
    General,
    /// Multi-agent debate that must keep opposing positions apart.
    Debate,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::General => "general",
            TaskType::Debate => "debate",
        }
    }
}

impl Default for TaskType {
    fn default() -> Self {
        Self::General
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata returned alongside a reasoning response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThinkMetadata {
    /// Backend that produced the answer.
    pub backend: String,
    /// Model identifier.
    pub model: String,
    /// Task type the call was tagged with.
    pub task_type: TaskType,
    /// Tokens generated, when the backend reports them.
    pub tokens_used: Option<u32>,
}

impl ThinkMetadata {
    /// Create metadata for a call.
    pub fn new(backend: impl Into<String>, model: impl Into<String>, task_type: TaskType) -> Self {
        Self {
            backend: backend.into(),
            model: model.into(),
            task_type,
            tokens_used: None,
        }
    }

    /// Record the token count.
    pub fn with_tokens(mut self, tokens: u32) -> Self {
        self.tokens_used = Some(tokens);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_type_tags() {
        assert_eq!(TaskType::Debate.as_str(), "debate");
        assert_eq!(TaskType::General.to_string(), "general");
        assert_eq!(TaskType::default(), TaskType::General);
    }

    #[test]
    fn metadata_builder() {
        let meta = ThinkMetadata::new("mock", "default", TaskType::Debate).with_tokens(42);
        assert_eq!(meta.tokens_used, Some(42));
        assert_eq!(meta.task_type, TaskType::Debate);
    }
}
