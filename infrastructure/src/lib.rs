//! Infrastructure layer for searchlight
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod search;
pub mod web;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileFetchConfig, FileModelConfig, FileOutputConfig, FileReplConfig,
    FileSearchConfig, FileTelemetryConfig,
};
pub use logging::JsonlConversationLogger;
pub use providers::OpenAiCompatGateway;
pub use search::{DuckDuckGoSearch, SerpApiSearch};
pub use web::{HttpArticleReader, extract_paragraphs};
