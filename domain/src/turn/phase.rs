//! Turn phases and the legal transitions between them.

use crate::turn::mode::RetrievalMode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnPhase {
    /// Classifier decides between search and chat
    Routing,
    /// Search provider is queried with the user message
    Searching,
    /// Top result links are fetched and reduced to text
    Fetching,
    /// Model produces the final reply
    Responding,
    /// Terminal
    Done,
}

impl TurnPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnPhase::Routing => "routing",
            TurnPhase::Searching => "searching",
            TurnPhase::Fetching => "fetching",
            TurnPhase::Responding => "responding",
            TurnPhase::Done => "done",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TurnPhase::Routing => "Router",
            TurnPhase::Searching => "Search",
            TurnPhase::Fetching => "Fetch",
            TurnPhase::Responding => "Chat",
            TurnPhase::Done => "Done",
        }
    }

    /// Check whether `next` may follow this phase under `mode`.
    ///
    /// Each edge of the graph appears exactly once below; there are no
    /// cycles, so every phase runs at most once per turn.
    pub fn can_transition_to(&self, next: TurnPhase, mode: RetrievalMode) -> bool {
        use TurnPhase::*;
        match (self, next) {
            (Routing, Searching) | (Routing, Responding) => true,
            (Searching, Fetching) => mode.fetches_articles(),
            (Searching, Responding) => !mode.fetches_articles(),
            (Fetching, Responding) => true,
            (Responding, Done) => true,
            _ => false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnPhase::Done)
    }
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
