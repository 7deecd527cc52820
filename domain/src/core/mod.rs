//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: chat-completion model identifiers
//! - [`query::Query`]: a validated user query that starts a turn
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod query;
