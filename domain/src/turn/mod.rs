//! Turn domain.
//!
//! - [`entities::TurnState`]: the mutable record threading through one turn
//! - [`phase::TurnPhase`]: the fixed routing graph and its legal transitions
//! - [`mode::RetrievalMode`]: summary vs structured search
//! - [`value_objects`]: result records, retrieved context, route decision
//! - [`outcome::TurnOutcome`]: what a finished turn hands back to the caller

pub mod entities;
pub mod mode;
pub mod outcome;
pub mod phase;
pub mod value_objects;
