//! Line comparison engine
//!
//! - `options`: equality predicate and resource ceilings
//! - `myers`: Myers' shortest edit script search producing the match set
//! - `classification`: per-line Common/Deleted/Inserted tags derived from matches
//! - `change_list`: grouping of classified lines into contiguous runs
//! - `error`: typed failures of the engine
//!
//! [`diff_lines`] is the single entry point: it takes two line sequences and
//! returns a [`DiffResult`] whose runs partition both sides, or fails without
//! producing anything when a configured ceiling is exceeded.

pub mod change_list;
pub mod classification;
pub mod error;
pub mod myers;
pub mod options;

pub use change_list::{ChangeListBuilder, ChangeRun, RunKind};
pub use classification::{Classification, ClassifiedLine, LineStatus, Match};
pub use error::{Ceiling, DiffError};
pub use options::DiffOptions;

use crate::artifacts::lines::{Line, LineSequence};
use myers::{DiffAlgorithm, MyersDiff};
use options::InternedLines;
use tracing::debug;

#[tracing::instrument(level = "debug", skip_all, fields(left = left.len(), right = right.len()))]
pub fn diff_lines<'s>(
    left: &'s LineSequence,
    right: &'s LineSequence,
    options: &DiffOptions,
) -> Result<DiffResult<'s>, DiffError> {
    options.check_line_count(left.len() + right.len())?;

    let interned = InternedLines::intern(left, right, options);
    debug!(distinct = interned.distinct, "lines interned");

    let matches =
        MyersDiff::new(&interned.left, &interned.right, options.max_edit_distance).matches()?;
    let classification = Classification::from_matches(left.len(), right.len(), matches);
    let runs = ChangeListBuilder::build(&classification);
    debug!(runs = runs.len(), "change list built");

    Ok(DiffResult {
        left,
        right,
        classification,
        runs,
    })
}

/// The outcome of comparing two line sequences.
///
/// Holds on to both inputs so renderers can reach the original text and line
/// numbers behind every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffResult<'s> {
    left: &'s LineSequence,
    right: &'s LineSequence,
    classification: Classification,
    runs: Vec<ChangeRun>,
}

impl<'s> DiffResult<'s> {
    pub fn left(&self) -> &'s LineSequence {
        self.left
    }

    pub fn right(&self) -> &'s LineSequence {
        self.right
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn runs(&self) -> &[ChangeRun] {
        &self.runs
    }

    pub fn changes(&self) -> impl Iterator<Item = &ChangeRun> {
        self.runs.iter().filter(|run| run.is_change())
    }

    pub fn left_lines(&self, run: &ChangeRun) -> &'s [Line] {
        self.left.slice(run.left())
    }

    pub fn right_lines(&self, run: &ChangeRun) -> &'s [Line] {
        self.right.slice(run.right())
    }

    pub fn is_identical(&self) -> bool {
        self.classification.is_identical()
    }

    pub fn deleted_count(&self) -> usize {
        self.classification.deleted_count()
    }

    pub fn inserted_count(&self) -> usize {
        self.classification.inserted_count()
    }

    pub fn unchanged_count(&self) -> usize {
        self.classification.matches().len()
    }
}
