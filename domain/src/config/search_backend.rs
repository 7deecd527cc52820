//! Search backend selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which web search service backs the retriever
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchBackend {
    /// SerpAPI Google results (needs an API key)
    #[default]
    SerpApi,
    /// DuckDuckGo Instant Answer API (no key)
    DuckDuckGo,
}

impl SearchBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchBackend::SerpApi => "serpapi",
            SearchBackend::DuckDuckGo => "duckduckgo",
        }
    }

    /// Whether the backend refuses requests without an API key.
    pub fn requires_api_key(&self) -> bool {
        matches!(self, SearchBackend::SerpApi)
    }
}

impl fmt::Display for SearchBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "serpapi" | "serp" | "google" => Ok(SearchBackend::SerpApi),
            "duckduckgo" | "ddg" => Ok(SearchBackend::DuckDuckGo),
            other => Err(format!(
                "unknown search provider '{}' (expected serpapi or duckduckgo)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("SerpAPI".parse::<SearchBackend>().unwrap(), SearchBackend::SerpApi);
        assert_eq!("ddg".parse::<SearchBackend>().unwrap(), SearchBackend::DuckDuckGo);
        assert!("bing".parse::<SearchBackend>().is_err());
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&SearchBackend::DuckDuckGo).unwrap();
        assert_eq!(json, "\"duckduckgo\"");
        assert_eq!(SearchBackend::default().to_string(), "serpapi");
    }
}
