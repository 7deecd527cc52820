//! Telemetry configuration from TOML (`[telemetry]` section)

use serde::{Deserialize, Serialize};

/// Raw telemetry configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTelemetryConfig {
    /// JSONL file receiving conversation events; disabled when unset
    pub log_file: Option<String>,
}
