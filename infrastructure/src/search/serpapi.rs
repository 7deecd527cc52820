//! SerpAPI Google search.
//!
//! Records come from `organic_results`, in provider order. The summary digest
//! uses the first populated source among the answer box, the knowledge graph
//! and the organic snippets.

use super::{build_client, get_json};
use crate::config::FileSearchConfig;
use async_trait::async_trait;
use searchlight_application::ports::search_provider::{SearchError, SearchProvider};
use searchlight_domain::ResultRecord;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const SERPAPI_URL: &str = "https://serpapi.com/search.json";

/// Digest used when the response has nothing to render
pub const NO_GOOD_RESULT: &str = "No good search result found";

pub struct SerpApiSearch {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    engine: String,
}

impl SerpApiSearch {
    pub fn new(
        api_key: impl Into<String>,
        engine: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SearchError> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: SERPAPI_URL.to_string(),
            api_key: api_key.into(),
            engine: engine.into(),
        })
    }

    /// Build from the `[search]` section; fails when no key can be resolved.
    pub fn from_config(config: &FileSearchConfig) -> Result<Self, SearchError> {
        let key = config.resolve_api_key().ok_or_else(|| {
            SearchError::NotConfigured(format!("missing {}", config.api_key_env))
        })?;
        Self::new(
            key,
            config.engine.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    /// Point at a different endpoint (self-hosted proxy or test server).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn query(&self, query: &str) -> Result<Value, SearchError> {
        debug!("SerpAPI query (engine: {}): {}", self.engine, query);
        let body = get_json(self.client.get(&self.endpoint).query(&[
            ("engine", self.engine.as_str()),
            ("q", query),
            ("api_key", self.api_key.as_str()),
        ]))
        .await?;

        if let Some(error) = body["error"].as_str() {
            return Err(SearchError::InvalidResponse(error.to_string()));
        }
        Ok(body)
    }
}

#[async_trait]
impl SearchProvider for SerpApiSearch {
    fn name(&self) -> &str {
        "serpapi"
    }

    async fn search_results(&self, query: &str) -> Result<Vec<ResultRecord>, SearchError> {
        let body = self.query(query).await?;
        parse_organic_results(body)
    }

    async fn search_summary(&self, query: &str) -> Result<String, SearchError> {
        let body = self.query(query).await?;
        Ok(render_summary(&body))
    }
}

#[derive(Debug, Deserialize)]
struct OrganicResponse {
    #[serde(default)]
    organic_results: Vec<OrganicItem>,
}

#[derive(Debug, Deserialize)]
struct OrganicItem {
    #[serde(default)]
    title: String,
    link: Option<String>,
    #[serde(default)]
    snippet: String,
}

fn parse_organic_results(body: Value) -> Result<Vec<ResultRecord>, SearchError> {
    let parsed: OrganicResponse =
        serde_json::from_value(body).map_err(|e| SearchError::InvalidResponse(e.to_string()))?;
    Ok(parsed
        .organic_results
        .into_iter()
        .map(|item| ResultRecord {
            title: item.title,
            link: item.link,
            snippet: item.snippet,
        })
        .collect())
}

fn non_empty(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

/// Max shopping entries rendered into a digest
const SHOPPING_LIMIT: usize = 3;

/// First answer box; `answer_box_list` wins when both are present.
fn answer_box(body: &Value) -> Option<&Value> {
    let found = body.get("answer_box_list").or_else(|| body.get("answer_box"))?;
    match found {
        Value::Array(items) => items.first(),
        Value::Object(_) => Some(found),
        _ => None,
    }
}

fn highlighted_words(value: &Value) -> Option<String> {
    let words: Vec<&str> = value
        .as_array()?
        .iter()
        .filter_map(non_empty)
        .collect();
    (!words.is_empty()).then(|| words.join(", "))
}

fn render_shopping(items: &[Value]) -> String {
    items
        .iter()
        .take(SHOPPING_LIMIT)
        .map(|item| match (non_empty(&item["title"]), non_empty(&item["price"])) {
            (Some(title), Some(price)) => format!("- {} ({})", title, price),
            (Some(title), None) => format!("- {}", title),
            _ => format!("- {}", item),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Digest in priority order: answer box (result, answer, snippet, highlighted
/// words), sports results, shopping results, knowledge graph, organic snippets.
fn render_summary(body: &Value) -> String {
    if let Some(answer_box) = answer_box(body) {
        let text = ["result", "answer", "snippet"]
            .iter()
            .find_map(|key| non_empty(&answer_box[*key]))
            .map(str::to_string)
            .or_else(|| highlighted_words(&answer_box["snippet_highlighted_words"]));
        if let Some(text) = text {
            return text;
        }
    }

    if let Some(sports) = body.get("sports_results").filter(|v| v.is_object()) {
        return sports.to_string();
    }

    if let Some(items) = body["shopping_results"].as_array().filter(|a| !a.is_empty()) {
        return render_shopping(items);
    }

    if let Some(text) = non_empty(&body["knowledge_graph"]["description"]) {
        return text.to_string();
    }

    let snippets: Vec<String> = body["organic_results"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| non_empty(&item["snippet"]))
                .map(|s| format!("- {}", s))
                .collect()
        })
        .unwrap_or_default();

    if snippets.is_empty() {
        NO_GOOD_RESULT.to_string()
    } else {
        snippets.join("\n")
    }
}
