//! `[repl]` section: interactive chat behaviour

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn enabled() -> bool {
    true
}

/// Settings for the `You:` chat loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReplConfig {
    /// Phase spinner (or plain status lines when stderr is piped) per turn
    #[serde(default = "enabled")]
    pub show_progress: bool,
    /// Line history; unset means `<data_dir>/searchlight/history.txt`
    #[serde(default)]
    pub history_file: Option<PathBuf>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: enabled(),
            history_file: None,
        }
    }
}
