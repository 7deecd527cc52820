//! DuckDuckGo Instant Answer search.
//!
//! Uses the [DuckDuckGo Instant Answer API](https://api.duckduckgo.com/) which:
//! - Requires **no API key**, so it doubles as the fallback provider
//! - Returns instant answers, abstracts, definitions, and related topics
//! - Does not return full web search result listings
//!
//! Structured records are built from the abstract source and the related
//! topics (nested topic groups are flattened).

use super::{build_client, get_json};
use async_trait::async_trait;
use searchlight_application::ports::search_provider::{SearchError, SearchProvider};
use searchlight_domain::ResultRecord;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// DuckDuckGo Instant Answer API endpoint (no API key required).
const DDG_API_URL: &str = "https://api.duckduckgo.com/";

/// Related topics kept per query
const MAX_TOPICS: usize = 10;

pub struct DuckDuckGoSearch {
    client: reqwest::Client,
    endpoint: String,
}

impl DuckDuckGoSearch {
    pub fn new(timeout: Duration) -> Result<Self, SearchError> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: DDG_API_URL.to_string(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn query(&self, query: &str) -> Result<Value, SearchError> {
        debug!("DuckDuckGo query: {}", query);
        get_json(
            self.client
                .get(&self.endpoint)
                .query(&[
                    ("q", query),
                    ("format", "json"),
                    ("no_html", "1"),
                    ("skip_disambig", "1"),
                ])
                .header("User-Agent", concat!("searchlight/", env!("CARGO_PKG_VERSION"))),
        )
        .await
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoSearch {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    async fn search_results(&self, query: &str) -> Result<Vec<ResultRecord>, SearchError> {
        let body = self.query(query).await?;
        Ok(topic_records(&body))
    }

    async fn search_summary(&self, query: &str) -> Result<String, SearchError> {
        let body = self.query(query).await?;
        Ok(format_search_results(query, &body))
    }
}

fn non_empty(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// Related topics, flattening topic groups (`{"Name": .., "Topics": [..]}`).
fn related_topics(data: &Value) -> Vec<&Value> {
    let mut out = Vec::new();
    for topic in data["RelatedTopics"].as_array().into_iter().flatten() {
        if let Some(group) = topic["Topics"].as_array() {
            out.extend(group.iter().filter(|t| non_empty(&t["Text"]).is_some()));
        } else if non_empty(&topic["Text"]).is_some() {
            out.push(topic);
        }
    }
    out.truncate(MAX_TOPICS);
    out
}

fn topic_records(data: &Value) -> Vec<ResultRecord> {
    let mut records = Vec::new();

    if let Some(abstract_text) = non_empty(&data["AbstractText"]) {
        records.push(ResultRecord {
            title: non_empty(&data["Heading"])
                .or_else(|| non_empty(&data["AbstractSource"]))
                .unwrap_or("Summary")
                .to_string(),
            link: non_empty(&data["AbstractURL"]).map(str::to_string),
            snippet: abstract_text.to_string(),
        });
    }

    for topic in related_topics(data) {
        let text = topic["Text"].as_str().unwrap_or_default();
        // "Title - description" is the usual shape
        let title = text.split(" - ").next().unwrap_or(text);
        records.push(ResultRecord {
            title: title.to_string(),
            link: non_empty(&topic["FirstURL"]).map(str::to_string),
            snippet: text.to_string(),
        });
    }

    records
}

/// Format DuckDuckGo API response into a readable markdown document.
///
/// Extracts and formats: AbstractText, Answer, Definition, RelatedTopics (up to 10),
/// and Redirect sections.
fn format_search_results(query: &str, data: &Value) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push(format!("## Search Results for: {}", query));

    if let Some(abstract_text) = non_empty(&data["AbstractText"]) {
        let source = data["AbstractSource"].as_str().unwrap_or("Unknown");
        let url = data["AbstractURL"].as_str().unwrap_or("");
        sections.push(format!(
            "### Summary ({})\n{}\nSource: {}",
            source, abstract_text, url
        ));
    }

    if let Some(answer) = non_empty(&data["Answer"]) {
        sections.push(format!("### Instant Answer\n{}", answer));
    }

    if let Some(definition) = non_empty(&data["Definition"]) {
        let source = data["DefinitionSource"].as_str().unwrap_or("Unknown");
        sections.push(format!("### Definition ({})\n{}", source, definition));
    }

    let topics: Vec<String> = related_topics(data)
        .into_iter()
        .map(|t| {
            format!(
                "- {} ({})",
                t["Text"].as_str().unwrap_or_default(),
                t["FirstURL"].as_str().unwrap_or("")
            )
        })
        .collect();
    if !topics.is_empty() {
        sections.push(format!("### Related Topics\n{}", topics.join("\n")));
    }

    if let Some(redirect) = non_empty(&data["Redirect"]) {
        sections.push(format!("### Redirect\n{}", redirect));
    }

    if sections.len() == 1 {
        sections.push("No instant answer available.".to_string());
    }

    sections.join("\n\n")
}
