//! Fetch Articles use case.
//!
//! Turns the leading search results into one text blob for the responder.
//!
//! Only the first `limit` records are considered. Records without a link are
//! skipped, so fewer than `limit` fetches may happen. Each link is read once
//! under a timeout; a failed link is logged and skipped without affecting its
//! siblings. When nothing could be read the blob is [`NO_ARTICLE_CONTENT`].

use crate::ports::article_reader::{ArticleReader, FetchError};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use searchlight_domain::{NO_ARTICLE_CONTENT, ResultRecord};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Text assembled from the fetched articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedArticles {
    /// Never empty: the articles, or the placeholder
    pub text: String,
    /// Links actually requested
    pub attempted: usize,
    /// Links read successfully
    pub fetched: usize,
}

/// Use case for the Fetching phase.
#[derive(Clone)]
pub struct FetchArticlesUseCase {
    reader: Arc<dyn ArticleReader>,
    timeout: Duration,
    parallel: bool,
}

impl FetchArticlesUseCase {
    pub fn new(reader: Arc<dyn ArticleReader>, timeout: Duration) -> Self {
        Self {
            reader,
            timeout,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub async fn execute(&self, results: &[ResultRecord], limit: usize) -> FetchedArticles {
        self.execute_with_progress(results, limit, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        results: &[ResultRecord],
        limit: usize,
        progress: &dyn ProgressNotifier,
    ) -> FetchedArticles {
        info!("[Fetch] Reading full articles...");

        let links: Vec<&str> = results
            .iter()
            .take(limit)
            .filter_map(ResultRecord::fetchable_link)
            .collect();

        let outcomes: Vec<Result<String, FetchError>> = if self.parallel {
            futures::future::join_all(links.iter().map(|url| self.read_one(url))).await
        } else {
            let mut outcomes = Vec::with_capacity(links.len());
            for url in &links {
                outcomes.push(self.read_one(url).await);
            }
            outcomes
        };

        let mut text = String::new();
        let mut fetched = 0;
        for (url, outcome) in links.iter().zip(outcomes) {
            match outcome {
                Ok(article) => {
                    text.push_str(&format!("\n\nSource: {}\n{}\n", url, article.trim()));
                    fetched += 1;
                    info!("[Fetch] Fetched: {}", url);
                    progress.on_article(url, true);
                }
                Err(e) => {
                    warn!("[Fetch] Failed {}: {}", url, e);
                    progress.on_article(url, false);
                }
            }
        }

        if text.is_empty() {
            text = NO_ARTICLE_CONTENT.to_string();
        }

        FetchedArticles {
            text,
            attempted: links.len(),
            fetched,
        }
    }

    async fn read_one(&self, url: &str) -> Result<String, FetchError> {
        match tokio::time::timeout(self.timeout, self.reader.read_article(url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.timeout.as_millis() as u64)),
        }
    }
}
