//! Line-by-line comparison of text files.
//!
//! The engine lives in [`artifacts::diff`]: [`artifacts::diff::diff_lines`]
//! takes two [`artifacts::lines::LineSequence`]s and returns the change-list
//! covering both of them. Everything else is plumbing for the `ldiff` binary.

pub mod areas;
pub mod artifacts;
pub mod commands;
