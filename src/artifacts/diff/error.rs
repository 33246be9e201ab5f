use std::fmt;
use thiserror::Error;

/// The resource a caller-configured ceiling applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ceiling {
    Lines,
    EditDistance,
}

impl fmt::Display for Ceiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ceiling::Lines => write!(f, "line count"),
            Ceiling::EditDistance => write!(f, "edit distance"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The comparison was aborted before producing any result.
    #[error("input too large: {ceiling} of at least {required} exceeds the limit of {limit}")]
    InputTooLarge {
        ceiling: Ceiling,
        required: usize,
        limit: usize,
    },
}
