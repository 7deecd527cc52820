//! Domain layer for searchlight
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Turn
//!
//! A turn is one complete request/response cycle for a single user message.
//! Every turn walks the same fixed graph:
//!
//! ```text
//! Routing ──search──▶ Searching ──(structured)──▶ Fetching ──▶ Responding ──▶ Done
//!    │                     └──────(summary)───────────────────────▲
//!    └──chat───────────────────────────────────────────────────────┘
//! ```
//!
//! [`TurnState`] owns the conversation for the turn and enforces the graph:
//! any transition not drawn above is rejected.
//!
//! ## Retrieval Mode
//!
//! - **Summary**: the search provider renders a text digest, no article fetch
//! - **Structured**: the search provider returns records whose links are fetched

pub mod config;
pub mod core;
pub mod prompt;
pub mod session;
pub mod turn;
pub mod util;

// Re-export commonly used types
pub use config::{
    model_config::ModelConfig,
    output_format::OutputFormat,
    search_backend::SearchBackend,
    validation::{ConfigIssue, Severity},
};
pub use core::{error::DomainError, model::Model, query::Query};
pub use prompt::PromptTemplate;
pub use session::entities::{Message, Role};
pub use turn::{
    entities::TurnState,
    mode::RetrievalMode,
    outcome::TurnOutcome,
    phase::TurnPhase,
    value_objects::{NO_ARTICLE_CONTENT, ResultRecord, RetrievedContext, RouteDecision},
};
