//! Article reader port
//!
//! Fetches one web page and reduces it to its readable paragraph text.

use async_trait::async_trait;
use thiserror::Error;

/// Per-link fetch failure. Always recovered by the caller.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch URL: {0}")]
    RequestFailed(String),

    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    #[error("Timed out after {0} ms")]
    Timeout(u64),

    #[error("Response too large: {0} bytes")]
    TooLarge(u64),

    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Reads article text from a URL.
#[async_trait]
pub trait ArticleReader: Send + Sync {
    /// Fetch `url` and return its extracted paragraph text (possibly empty).
    async fn read_article(&self, url: &str) -> Result<String, FetchError>;
}
