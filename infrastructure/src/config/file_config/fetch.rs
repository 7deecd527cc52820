//! Article fetch configuration from TOML (`[fetch]` section)

use searchlight_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Raw article fetch configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFetchConfig {
    /// Leading result records considered per turn
    pub limit: usize,
    /// Bound on a single article read
    pub timeout_seconds: u64,
    /// Paragraphs kept per article
    pub max_paragraphs: usize,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Fetch the bounded link set concurrently
    pub parallel: bool,
    /// Larger bodies are rejected
    pub max_body_bytes: u64,
}

impl Default for FileFetchConfig {
    fn default() -> Self {
        Self {
            limit: 2,
            timeout_seconds: 5,
            max_paragraphs: 10,
            user_agent: "Mozilla/5.0".to_string(),
            parallel: false,
            max_body_bytes: 5 * 1024 * 1024,
        }
    }
}

impl FileFetchConfig {
    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.limit == 0 {
            issues.push(ConfigIssue::error("fetch.limit", "must be at least 1"));
        }
        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                "fetch.timeout_seconds",
                "must be at least 1",
            ));
        }
        if self.max_paragraphs == 0 {
            issues.push(ConfigIssue::error(
                "fetch.max_paragraphs",
                "must be at least 1",
            ));
        }
        issues
    }
}
