//! Prompt domain
//!
//! Fixed instructions for the router and the responder.

mod template;

pub use template::PromptTemplate;
