//! Line comparison data structures and algorithms
//!
//! - `lines`: splitting raw content into numbered lines
//! - `diff`: the comparison engine and its change-list
//! - `render`: printing a change-list
//! - `core`: shared output plumbing (pager wrapper)

pub mod core;
pub mod diff;
pub mod lines;
pub mod render;
