//! Comparison plumbing around the engine
//!
//! - `comparison`: the configured comparison and its output writer
//! - `workspace`: resolving and reading the two inputs

pub mod comparison;
pub mod workspace;
