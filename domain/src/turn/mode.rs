//! Retrieval mode for the search branch of a turn.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the search branch retrieves web context.
///
/// - **Summary**: the provider renders one text digest; the turn goes
///   Searching → Responding.
/// - **Structured** (default): the provider returns result records and the
///   top links are fetched; the turn goes Searching → Fetching → Responding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetrievalMode {
    Summary,
    #[default]
    Structured,
}

impl RetrievalMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RetrievalMode::Summary => "summary",
            RetrievalMode::Structured => "structured",
        }
    }

    /// Whether the Fetching phase is reachable in this mode
    pub fn fetches_articles(&self) -> bool {
        matches!(self, RetrievalMode::Structured)
    }
}

impl fmt::Display for RetrievalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RetrievalMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(RetrievalMode::Summary),
            "structured" | "fetch" => Ok(RetrievalMode::Structured),
            other => Err(format!(
                "unknown retrieval mode '{}': expected 'summary' or 'structured'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_structured() {
        assert_eq!(RetrievalMode::default(), RetrievalMode::Structured);
        assert!(RetrievalMode::default().fetches_articles());
        assert!(!RetrievalMode::Summary.fetches_articles());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Summary".parse(), Ok(RetrievalMode::Summary));
        assert_eq!("fetch".parse(), Ok(RetrievalMode::Structured));
        assert!("digest".parse::<RetrievalMode>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&RetrievalMode::Summary).unwrap();
        assert_eq!(json, "\"summary\"");
    }
}
