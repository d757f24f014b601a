//! Interpreter configuration, loadable from TOML.

use serde::Deserialize;
use wpt_matcher::MatchParams;
use wpt_protocol::interpretation::DEFAULT_CLARIFY_QUESTION;

use crate::embedder::OllamaConfig;

/// Top-level configuration for the command interpreter.
#[derive(Debug, Clone, Deserialize)]
pub struct InterpreterConfig {
    /// Known waypoint names, embedded once at startup.
    #[serde(default)]
    pub waypoints: Vec<String>,
    /// Clarification thresholds. Optional, defaults to 5 / 0.35 / 0.05.
    #[serde(default)]
    pub matching: MatchParams,
    /// Local Ollama embedding settings. Optional, defaults to localhost.
    #[serde(default)]
    pub ollama: OllamaConfig,
    /// Question attached to clarification prompts.
    #[serde(default = "default_clarify_question")]
    pub clarify_question: String,
}

fn default_clarify_question() -> String {
    DEFAULT_CLARIFY_QUESTION.into()
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            waypoints: Vec::new(),
            matching: MatchParams::default(),
            ollama: OllamaConfig::default(),
            clarify_question: default_clarify_question(),
        }
    }
}

impl InterpreterConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.matching.validate()?;
        Ok(config)
    }
}
