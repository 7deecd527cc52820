//! Search provider port
//!
//! A web search backend reachable in two shapes: individually addressable
//! result records, or one pre-rendered digest.

use async_trait::async_trait;
use searchlight_domain::ResultRecord;
use thiserror::Error;

/// Errors from the search backend
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    RequestFailed(String),

    #[error("Search API returned error: {0}")]
    HttpStatus(u16),

    #[error("Failed to parse search results: {0}")]
    InvalidResponse(String),

    #[error("Search provider not configured: {0}")]
    NotConfigured(String),
}

/// Web search backend.
///
/// Both methods issue exactly one provider call and must be bounded by a
/// timeout in the implementation.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Short provider name used in logs
    fn name(&self) -> &str;

    /// Result records in provider (relevance) order; may be empty.
    async fn search_results(&self, query: &str) -> Result<Vec<ResultRecord>, SearchError>;

    /// Human-readable digest of the results.
    async fn search_summary(&self, query: &str) -> Result<String, SearchError>;
}
