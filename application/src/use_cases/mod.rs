//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod classify;
pub mod fetch_articles;
pub mod respond;
pub mod retrieve;
pub mod run_turn;

#[cfg(test)]
mod mocks;
