//! Conversation messages.
//!
//! - [`entities::Message`]: a single message exchanged with the model
//! - [`entities::Role`]: who authored a message

pub mod entities;
