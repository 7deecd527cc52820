//! `[output]` section: how replies reach stdout

use searchlight_domain::OutputFormat;
use serde::{Deserialize, Serialize};

fn colored_by_default() -> bool {
    true
}

/// Reply rendering; `-o/--output` wins over `format`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutputConfig {
    /// `text` or `json`; unset falls back to text
    #[serde(default)]
    pub format: Option<OutputFormat>,
    /// ANSI styling for labels and progress
    #[serde(default = "colored_by_default")]
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: colored_by_default(),
        }
    }
}
