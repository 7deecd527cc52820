//! Web search adapters.
//!
//! | Provider | Key | Records | Summary |
//! |----------|-----|---------|---------|
//! | [`SerpApiSearch`] | `SERPAPI_API_KEY` | `organic_results` | answer box, knowledge graph, snippets |
//! | [`DuckDuckGoSearch`] | none | related topics | instant answer markdown |

mod duckduckgo;
mod serpapi;

pub use duckduckgo::DuckDuckGoSearch;
pub use serpapi::SerpApiSearch;

use searchlight_application::ports::search_provider::SearchError;
use std::time::Duration;

fn build_client(timeout: Duration) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| SearchError::NotConfigured(format!("Failed to build HTTP client: {}", e)))
}

/// Send `request` and decode a JSON body, mapping transport and status errors.
async fn get_json(request: reqwest::RequestBuilder) -> Result<serde_json::Value, SearchError> {
    let response = request
        .send()
        .await
        .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(SearchError::HttpStatus(response.status().as_u16()));
    }

    response
        .json()
        .await
        .map_err(|e| SearchError::InvalidResponse(e.to_string()))
}
