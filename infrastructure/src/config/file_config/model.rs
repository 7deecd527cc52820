//! Model configuration from TOML (`[model]` section)

use searchlight_domain::config::model_config::{MAX_TEMPERATURE, MIN_TEMPERATURE};
use searchlight_domain::{ConfigIssue, Model, ModelConfig};
use serde::{Deserialize, Serialize};

/// Raw model provider configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Model id sent to the provider
    pub name: Model,
    /// Sampling temperature for both router and responder
    pub temperature: f32,
    /// Upper bound on reply tokens
    pub max_tokens: Option<u32>,
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead)
    pub api_key: Option<String>,
    /// Bound on a single completion call
    pub timeout_seconds: u64,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: Model::default(),
            temperature: 0.7,
            max_tokens: None,
            base_url: "https://api.groq.com/openai".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            api_key: None,
            timeout_seconds: 60,
        }
    }
}

impl FileModelConfig {
    pub fn to_model_config(&self) -> ModelConfig {
        let mut config = ModelConfig::new(self.name.clone()).with_temperature(self.temperature);
        if let Some(max) = self.max_tokens {
            config = config.with_max_tokens(max);
        }
        config
    }

    /// Explicit key first, then the configured environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_key(self.api_key.as_deref(), &self.api_key_env)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if !self.to_model_config().temperature_in_range() {
            issues.push(ConfigIssue::error(
                "model.temperature",
                format!(
                    "{} is outside {}..={}",
                    self.temperature, MIN_TEMPERATURE, MAX_TEMPERATURE
                ),
            ));
        }
        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                "model.timeout_seconds",
                "must be at least 1",
            ));
        }
        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error("model.base_url", "must not be empty"));
        }
        issues
    }
}

/// Non-blank explicit key, else a non-blank value of `env_var`.
pub(super) fn resolve_key(explicit: Option<&str>, env_var: &str) -> Option<String> {
    explicit
        .map(str::to_string)
        .or_else(|| std::env::var(env_var).ok())
        .filter(|k| !k.trim().is_empty())
}
