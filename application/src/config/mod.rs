//! Application-level configuration.
//!
//! - [`TurnParams`]: retrieval mode, fetch limit, parallelism and per-link timeout

pub mod turn_params;

pub use turn_params::TurnParams;
