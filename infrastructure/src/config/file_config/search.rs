//! Search configuration from TOML (`[search]` section)

use super::model::resolve_key;
use searchlight_domain::{ConfigIssue, RetrievalMode, SearchBackend};
use serde::{Deserialize, Serialize};

/// Raw search configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Search backend
    pub provider: SearchBackend,
    /// Summary digest or structured records plus article fetch
    pub mode: RetrievalMode,
    /// Environment variable holding the SerpAPI key
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead)
    pub api_key: Option<String>,
    /// SerpAPI engine parameter
    pub engine: String,
    /// Bound on a single search call
    pub timeout_seconds: u64,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            provider: SearchBackend::default(),
            mode: RetrievalMode::default(),
            api_key_env: "SERPAPI_API_KEY".to_string(),
            api_key: None,
            engine: "google".to_string(),
            timeout_seconds: 15,
        }
    }
}

impl FileSearchConfig {
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_key(self.api_key.as_deref(), &self.api_key_env)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                "search.timeout_seconds",
                "must be at least 1",
            ));
        }
        if self.provider.requires_api_key() && self.resolve_api_key().is_none() {
            issues.push(ConfigIssue::warning(
                "search.api_key_env",
                format!(
                    "{} is not set; falling back to duckduckgo",
                    self.api_key_env
                ),
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_warning() {
        let config = FileSearchConfig {
            api_key_env: "SEARCHLIGHT_TEST_UNSET_SERP_KEY".to_string(),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert!(issues[0].message.contains("SEARCHLIGHT_TEST_UNSET_SERP_KEY"));
    }

    #[test]
    fn test_duckduckgo_needs_no_key() {
        let config = FileSearchConfig {
            provider: SearchBackend::DuckDuckGo,
            api_key_env: "SEARCHLIGHT_TEST_UNSET_SERP_KEY".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_empty());
    }
}
