//! Result of a completed turn

use crate::session::entities::Message;
use crate::turn::mode::RetrievalMode;
use crate::turn::value_objects::RouteDecision;
use serde::{Deserialize, Serialize};

/// What a finished turn hands back to the caller (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Final reply text (never empty)
    pub response: String,
    /// Classifier decision for this turn
    pub route: RouteDecision,
    /// Retrieval mode in effect
    pub mode: RetrievalMode,
    /// Result records returned by the search provider (structured mode)
    pub results_found: usize,
    /// Articles fetched successfully (structured mode)
    pub articles_fetched: usize,
    /// Messages of the turn: the user query followed by the reply
    pub messages: Vec<Message>,
}

impl TurnOutcome {
    pub fn searched(&self) -> bool {
        self.route.needs_search()
    }
}
