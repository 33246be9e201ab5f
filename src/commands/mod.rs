//! Command implementations
//!
//! - `compare`: reads both inputs, runs the engine and reports the result

pub mod compare;
