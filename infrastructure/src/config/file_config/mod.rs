//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod fetch;
mod model;
mod output;
mod repl;
mod search;
mod telemetry;

pub use fetch::FileFetchConfig;
pub use model::FileModelConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use search::FileSearchConfig;
pub use telemetry::FileTelemetryConfig;

use searchlight_application::TurnParams;
use searchlight_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model provider settings
    pub model: FileModelConfig,
    /// Search provider settings
    pub search: FileSearchConfig,
    /// Article fetch settings
    pub fetch: FileFetchConfig,
    /// Conversation event log
    pub telemetry: FileTelemetryConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Callers abort on any error-severity issue and print the warnings.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.model.validate());
        issues.extend(self.search.validate());
        issues.extend(self.fetch.validate());
        issues
    }

    /// Pipeline parameters for the turn orchestrator.
    pub fn turn_params(&self) -> TurnParams {
        TurnParams::default()
            .with_mode(self.search.mode)
            .with_fetch_limit(self.fetch.limit)
            .with_parallel_fetch(self.fetch.parallel)
            .with_fetch_timeout(Duration::from_secs(self.fetch.timeout_seconds))
    }
}
