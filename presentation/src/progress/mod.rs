//! Progress reporting for turns

pub mod reporter;
