//! Configuration file loading for searchlight
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SEARCHLIGHT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./searchlight.toml` or `./.searchlight.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/searchlight/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileFetchConfig, FileModelConfig, FileOutputConfig, FileReplConfig,
    FileSearchConfig, FileTelemetryConfig,
};
pub use loader::ConfigLoader;
