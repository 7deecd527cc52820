//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior, resolved from the
//! file config and CLI flags by the binary.

use crate::progress::reporter::ProgressKind;
use searchlight_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Progress notifier for each turn (also gates the route summary line)
    pub progress: ProgressKind,
    /// History file; `None` uses the data dir default
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            progress: ProgressKind::Spinner,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Configured history file, else `<data_dir>/searchlight/history.txt`.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("searchlight").join("history.txt")))
    }
}
