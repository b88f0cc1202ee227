//! Run configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration for a generation run, optionally loaded from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VibeConfig {
    /// Completion service configuration.
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Guidelines template configuration.
    #[serde(default)]
    pub guidelines: GuidelinesConfig,
    /// Output artifact configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

impl VibeConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.completion.validate()?;
        Ok(())
    }
}

/// Completion service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionConfig {
    /// Chat completion endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature sent with every request.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl CompletionConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("completion.model must not be empty"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::config_error(
                "completion.temperature must be between 0.0 and 2.0",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("completion.timeout_secs must be greater than 0"));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(AppError::config_error("completion.api_key_env must not be empty"));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout() -> u64 {
    120
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

/// What to do when the guidelines template file is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuidelinesPolicy {
    /// Use the embedded default guidelines.
    #[default]
    Fallback,
    /// Fail the run with a not-found error.
    Require,
}

/// Guidelines template configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuidelinesConfig {
    /// Missing-template policy.
    #[serde(default)]
    pub policy: GuidelinesPolicy,
    /// Template path. Defaults to `agents.md` next to the executable.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Output artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Whether to write `initial_prompt.md`.
    #[serde(default = "default_true")]
    pub initial_prompt: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { initial_prompt: default_true() }
    }
}

fn default_true() -> bool {
    true
}
