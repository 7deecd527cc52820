//! Turn state entity

use crate::core::error::DomainError;
use crate::core::query::Query;
use crate::session::entities::Message;
use crate::turn::mode::RetrievalMode;
use crate::turn::phase::TurnPhase;
use crate::turn::value_objects::{RetrievedContext, RouteDecision};

/// The mutable record threading through one turn (Entity)
///
/// Created fresh per query with exactly one user message and owned by the
/// orchestrator until the turn is done. Nothing here survives the turn;
/// callers that want history keep it themselves.
///
/// # Invariants
///
/// - the message sequence always contains at least one user message
/// - `response` is set exactly once, by [`TurnState::record_response`]
/// - the retrieved context is [`RetrievedContext::Empty`] once a response
///   is recorded
/// - phases only move along the edges allowed by
///   [`TurnPhase::can_transition_to`]
#[derive(Debug, Clone)]
pub struct TurnState {
    messages: Vec<Message>,
    context: RetrievedContext,
    needs_search: bool,
    response: Option<String>,
    phase: TurnPhase,
    mode: RetrievalMode,
}

impl TurnState {
    /// Start a turn in [`TurnPhase::Routing`] with the given query
    pub fn new(query: Query, mode: RetrievalMode) -> Self {
        Self {
            messages: vec![Message::user(query.into_content())],
            context: RetrievedContext::Empty,
            needs_search: false,
            response: None,
            phase: TurnPhase::Routing,
            mode,
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn mode(&self) -> RetrievalMode {
        self.mode
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn context(&self) -> &RetrievedContext {
        &self.context
    }

    pub fn needs_search(&self) -> bool {
        self.needs_search
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    /// Text of the most recent user message.
    pub fn last_user_message(&self) -> &str {
        self.messages
            .iter()
            .rev()
            .find(|m| m.is_user())
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }

    /// Move to `next`, rejecting any edge the turn graph does not have.
    pub fn advance(&mut self, next: TurnPhase) -> Result<(), DomainError> {
        if !self.phase.can_transition_to(next, self.mode) {
            return Err(DomainError::InvalidTransition {
                from: self.phase,
                to: next,
            });
        }
        self.phase = next;
        Ok(())
    }

    pub fn record_route(&mut self, decision: RouteDecision) {
        self.needs_search = decision.needs_search();
    }

    /// Replace the retrieved context wholesale.
    pub fn set_context(&mut self, context: RetrievedContext) {
        self.context = context;
    }

    /// Take the retrieved context, leaving `Empty` behind.
    pub fn take_context(&mut self) -> RetrievedContext {
        std::mem::take(&mut self.context)
    }

    /// Append the assistant reply, set the response and drop the context.
    pub fn record_response(&mut self, text: impl Into<String>) -> Result<(), DomainError> {
        if self.response.is_some() {
            return Err(DomainError::ResponseAlreadySet);
        }
        let text = text.into();
        self.messages.push(Message::assistant(text.clone()));
        self.response = Some(text);
        self.context = RetrievedContext::Empty;
        Ok(())
    }

    /// Consume the state, yielding the full message sequence.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}
