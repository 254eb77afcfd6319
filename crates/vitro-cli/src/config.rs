//! Configuration management for the Vitro CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vitro::research::ResearchConfig;

/// Config file looked up in the current and parent directories.
pub const CONFIG_FILE: &str = "vitro.toml";

/// Vitro project configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub research: ResearchConfig,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
    #[serde(default)]
    pub reasoning: ReasoningConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    #[serde(default = "default_knowledge_dir")]
    pub dir: PathBuf,
}

/// Which reasoning backend answers `analyze` and `debate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Mock,
    Ollama,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasoningConfig {
    #[serde(default)]
    pub backend: BackendKind,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

// Default value functions
fn default_knowledge_dir() -> PathBuf { PathBuf::from("knowledge") }
fn default_endpoint() -> String { "http://localhost:11434".to_string() }
fn default_model() -> String { "llama3.2".to_string() }
fn default_timeout() -> u32 { 300 }

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            dir: default_knowledge_dir(),
        }
    }
}

impl Default for ReasoningConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Config {
    /// Load config from vitro.toml in the current or parent directories.
    ///
    /// Relative paths are resolved against the directory holding the file,
    /// or against the current directory when no file exists.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        match find_config_file(&cwd) {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default().resolved(&cwd)),
        }
    }

    /// Load a specific config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config
            .research
            .validate()
            .with_context(|| format!("Invalid [research] section in {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(config.resolved(base))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    fn resolved(mut self, base: &Path) -> Self {
        if self.research.root.is_relative() {
            self.research.root = base.join(&self.research.root);
        }
        if self.knowledge.dir.is_relative() {
            self.knowledge.dir = base.join(&self.knowledge.dir);
        }
        self
    }
}

/// Find vitro.toml in `start` or its parents.
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.research, ResearchConfig::default());
        assert_eq!(parsed.reasoning.backend, BackendKind::Mock);
        assert_eq!(parsed.knowledge.dir, PathBuf::from("knowledge"));
    }

    #[test]
    fn partial_file_fills_defaults_and_resolves_paths() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            "[research]\nmax_merged = 4\n\n[reasoning]\nbackend = \"ollama\"\nmodel = \"qwen2.5\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.research.max_merged, 4);
        assert_eq!(config.research.max_collected, 10);
        assert_eq!(config.research.root, dir.path().join("."));
        assert_eq!(config.knowledge.dir, dir.path().join("knowledge"));
        assert_eq!(config.reasoning.backend, BackendKind::Ollama);
        assert_eq!(config.reasoning.model, "qwen2.5");
        assert_eq!(config.reasoning.timeout_secs, 300);
    }

    #[test]
    fn invalid_limits_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[research]\nsnippet_chars = 0\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn config_is_found_in_parent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "").unwrap();
        let nested = dir.path().join("01-Analysis/deep");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config_file(&nested), Some(dir.path().join(CONFIG_FILE)));
    }
}
