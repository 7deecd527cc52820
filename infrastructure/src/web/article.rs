//! HTTP article reader.
//!
//! One GET per link with a browser-like User-Agent, a bounded body size and
//! a request timeout. The body is reduced to paragraph text by
//! [`extract_paragraphs`].

use super::extract::extract_paragraphs;
use crate::config::FileFetchConfig;
use async_trait::async_trait;
use searchlight_application::ports::article_reader::{ArticleReader, FetchError};
use std::time::Duration;
use tracing::debug;

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Maximum response body size (5 MB)
const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024;

/// Default number of paragraphs kept per article
const DEFAULT_MAX_PARAGRAPHS: usize = 10;

pub struct HttpArticleReader {
    client: reqwest::Client,
    timeout: Duration,
    user_agent: String,
    max_paragraphs: usize,
    max_body_bytes: u64,
}

impl HttpArticleReader {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::RequestFailed(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            timeout,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_paragraphs: DEFAULT_MAX_PARAGRAPHS,
            max_body_bytes: MAX_BODY_SIZE,
        })
    }

    /// Build from the `[fetch]` section.
    pub fn from_config(config: &FileFetchConfig) -> Result<Self, FetchError> {
        Ok(Self::new(Duration::from_secs(config.timeout_seconds))?
            .with_user_agent(config.user_agent.clone())
            .with_max_paragraphs(config.max_paragraphs)
            .with_max_body_bytes(config.max_body_bytes))
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_max_paragraphs(mut self, max: usize) -> Self {
        self.max_paragraphs = max;
        self
    }

    pub fn with_max_body_bytes(mut self, max: u64) -> Self {
        self.max_body_bytes = max;
        self
    }

    async fn read_body(&self, mut response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        if let Some(length) = response.content_length()
            && length > self.max_body_bytes
        {
            return Err(FetchError::TooLarge(length));
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| self.map_error(e))? {
            body.extend_from_slice(&chunk);
            if body.len() as u64 > self.max_body_bytes {
                return Err(FetchError::TooLarge(body.len() as u64));
            }
        }
        Ok(body)
    }

    fn map_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout.as_millis() as u64)
        } else if e.is_body() || e.is_decode() {
            FetchError::Body(e.to_string())
        } else {
            FetchError::RequestFailed(e.to_string())
        }
    }
}

#[async_trait]
impl ArticleReader for HttpArticleReader {
    async fn read_article(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = self.read_body(response).await?;
        let html = String::from_utf8_lossy(&body);
        let text = extract_paragraphs(&html, self.max_paragraphs);

        debug!("Extracted {} bytes of text from {}", text.len(), url);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::HeaderMap, http::StatusCode, http::header, response::Html, routing::get};
    use crate::test_support::serve;

    fn reader() -> HttpArticleReader {
        HttpArticleReader::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_reads_paragraphs_with_browser_user_agent() {
        let app = Router::new().route(
            "/article",
            get(|headers: HeaderMap| async move {
                let ua = headers
                    .get(header::USER_AGENT)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("")
                    .to_string();
                Html(format!(
                    "<html><body><nav><p>Menu</p></nav><p>UA was {}</p><p>Second</p></body></html>",
                    ua
                ))
            }),
        );
        let addr = serve(app).await;

        let text = reader()
            .read_article(&format!("http://{}/article", addr))
            .await
            .unwrap();
        assert_eq!(text, "UA was Mozilla/5.0 Second");
    }

    #[tokio::test]
    async fn test_error_status_fails() {
        let app = Router::new().route("/gone", get(|| async { StatusCode::NOT_FOUND }));
        let addr = serve(app).await;

        let err = reader()
            .read_article(&format!("http://{}/gone", addr))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::HttpStatus(404)));
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let app = Router::new().route(
            "/big",
            get(|| async { Html(format!("<p>{}</p>", "x".repeat(4096))) }),
        );
        let addr = serve(app).await;

        let err = reader()
            .with_max_body_bytes(1024)
            .read_article(&format!("http://{}/big", addr))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::TooLarge(_)));
    }

    #[tokio::test]
    async fn test_slow_page_times_out() {
        let app = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Html("<p>late</p>")
            }),
        );
        let addr = serve(app).await;

        let err = HttpArticleReader::new(Duration::from_millis(100))
            .unwrap()
            .read_article(&format!("http://{}/slow", addr))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Timeout(100)));
    }

    #[tokio::test]
    async fn test_unreachable_host_fails() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = reader()
            .read_article(&format!("http://{}/", addr))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::RequestFailed(_)));
    }
}
