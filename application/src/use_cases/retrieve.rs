//! Retrieve use case.
//!
//! Queries the search provider once with the user message, verbatim. This is
//! an optional enrichment stage: provider failures are logged and replaced
//! with neutral context so the turn always reaches the responder.

use crate::ports::search_provider::SearchProvider;
use searchlight_domain::util::preview;
use searchlight_domain::{RetrievalMode, RetrievedContext};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for the Searching phase.
#[derive(Clone)]
pub struct RetrieveUseCase {
    provider: Arc<dyn SearchProvider>,
}

impl RetrieveUseCase {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// Search for `query` in the given mode.
    ///
    /// - Summary → `RenderedText` with the digest, or `Search failed: <error>`
    /// - Structured → `StructuredResults`, empty on failure
    pub async fn execute(&self, query: &str, mode: RetrievalMode) -> RetrievedContext {
        info!(
            "[Search] Fetching from web via {} ({} mode)...",
            self.provider.name(),
            mode
        );

        match mode {
            RetrievalMode::Summary => match self.provider.search_summary(query).await {
                Ok(digest) => {
                    info!("[Search] Got results: {}", preview(&digest, 200));
                    RetrievedContext::RenderedText(digest)
                }
                Err(e) => {
                    warn!("[Search] Error: {}", e);
                    RetrievedContext::RenderedText(format!("Search failed: {}", e))
                }
            },
            RetrievalMode::Structured => match self.provider.search_results(query).await {
                Ok(records) => {
                    info!("[Search] Found {} results", records.len());
                    RetrievedContext::StructuredResults(records)
                }
                Err(e) => {
                    warn!("[Search] Error: {}", e);
                    RetrievedContext::StructuredResults(Vec::new())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::mocks::StubSearch;
    use searchlight_domain::ResultRecord;

    #[tokio::test]
    async fn test_structured_preserves_provider_order() {
        let records = vec![
            ResultRecord::new("First", "https://a.example", "a"),
            ResultRecord::new("Second", "https://b.example", "b"),
        ];
        let uc = RetrieveUseCase::new(Arc::new(StubSearch::with_records(records.clone())));
        let ctx = uc.execute("q", RetrievalMode::Structured).await;
        assert_eq!(ctx, RetrievedContext::StructuredResults(records));
    }

    #[tokio::test]
    async fn test_structured_failure_yields_empty_records() {
        let uc = RetrieveUseCase::new(Arc::new(StubSearch::failing("quota exceeded")));
        let ctx = uc.execute("q", RetrievalMode::Structured).await;
        assert_eq!(ctx, RetrievedContext::StructuredResults(vec![]));
    }

    #[tokio::test]
    async fn test_summary_returns_digest() {
        let uc = RetrieveUseCase::new(Arc::new(StubSearch::with_summary("Paris: sunny, 24°C")));
        let ctx = uc.execute("weather paris", RetrievalMode::Summary).await;
        assert_eq!(ctx.as_text(), Some("Paris: sunny, 24°C"));
    }

    #[tokio::test]
    async fn test_summary_failure_yields_error_text() {
        let uc = RetrieveUseCase::new(Arc::new(StubSearch::failing("timeout")));
        let ctx = uc.execute("q", RetrievalMode::Summary).await;
        let text = ctx.as_text().unwrap();
        assert!(text.starts_with("Search failed:"));
        assert!(text.contains("timeout"));
    }

    #[tokio::test]
    async fn test_single_provider_call() {
        let provider = Arc::new(StubSearch::with_records(vec![]));
        let uc = RetrieveUseCase::new(provider.clone());
        uc.execute("q", RetrievalMode::Structured).await;
        assert_eq!(provider.calls(), 1);
    }
}
