//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

pub mod model_config;
pub mod output_format;
pub mod search_backend;
pub mod validation;

pub use model_config::ModelConfig;
pub use output_format::OutputFormat;
pub use search_backend::SearchBackend;
pub use validation::{ConfigIssue, Severity};
