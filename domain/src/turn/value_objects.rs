//! Turn value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Context text used when no article could be fetched.
pub const NO_ARTICLE_CONTENT: &str = "No article content found.";

/// Binary routing label produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteDecision {
    /// Consult the web before answering
    Search,
    /// Answer from the model's own knowledge
    Chat,
}

impl RouteDecision {
    /// Interpret raw classifier output.
    ///
    /// The decision is `Search` iff the lower-cased output contains the
    /// substring `"search"` anywhere. Output such as "searching not needed,
    /// chat" therefore routes to search; the classifier prompt asks for a
    /// single word, and anything mentioning search counts as a positive.
    pub fn from_classifier_output(output: &str) -> Self {
        if output.to_lowercase().contains("search") {
            RouteDecision::Search
        } else {
            RouteDecision::Chat
        }
    }

    pub fn needs_search(&self) -> bool {
        matches!(self, RouteDecision::Search)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteDecision::Search => "search",
            RouteDecision::Chat => "chat",
        }
    }
}

impl fmt::Display for RouteDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One candidate search hit (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResultRecord {
    pub title: String,
    pub link: Option<String>,
    pub snippet: String,
}

impl ResultRecord {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: Some(link.into()),
            snippet: snippet.into(),
        }
    }

    /// The link, if present and non-blank
    pub fn fetchable_link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .map(str::trim)
            .filter(|link| !link.is_empty())
    }
}

/// Web context carried between the search branch and the responder.
///
/// The variant in play depends on how far the turn has progressed:
/// `Empty` before search and after responding, `StructuredResults` between
/// Searching and Fetching, `RenderedText` once there is prose for the model.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RetrievedContext {
    #[default]
    Empty,
    StructuredResults(Vec<ResultRecord>),
    RenderedText(String),
}

impl RetrievedContext {
    pub fn is_empty(&self) -> bool {
        matches!(self, RetrievedContext::Empty)
    }

    /// Text usable as grounding for the responder.
    ///
    /// Only `RenderedText` qualifies; structured records must be fetched
    /// into text first. Blank text counts as no context.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RetrievedContext::RenderedText(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }

    pub fn records(&self) -> Option<&[ResultRecord]> {
        match self {
            RetrievedContext::StructuredResults(records) => Some(records),
            _ => None,
        }
    }
}
