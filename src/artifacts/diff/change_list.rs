use crate::artifacts::diff::classification::{Classification, ClassifiedLine};
use derive_new::new;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunKind {
    Unchanged,
    Deleted,
    Inserted,
    /// A deleted run immediately followed by an inserted run.
    Replaced,
}

impl fmt::Display for RunKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunKind::Unchanged => "unchanged",
            RunKind::Deleted => "deleted",
            RunKind::Inserted => "inserted",
            RunKind::Replaced => "replaced",
        };
        write!(f, "{label}")
    }
}

/// A maximal block of lines sharing one classification.
///
/// Both ranges are half-open line indices. A side the run does not touch
/// gets an empty range positioned where the run sits in that file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct ChangeRun {
    kind: RunKind,
    left: Range<usize>,
    right: Range<usize>,
}

impl ChangeRun {
    pub fn kind(&self) -> RunKind {
        self.kind
    }

    pub fn left(&self) -> Range<usize> {
        self.left.clone()
    }

    pub fn right(&self) -> Range<usize> {
        self.right.clone()
    }

    pub fn is_change(&self) -> bool {
        self.kind != RunKind::Unchanged
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Span {
    left: Range<usize>,
    right: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum BuilderState {
    #[default]
    None,
    Unchanged(Span),
    Deleted(Span),
    Inserted(Span),
    DeletedThenInserted(Span),
}

impl BuilderState {
    fn into_run(self) -> Option<ChangeRun> {
        let (kind, span) = match self {
            BuilderState::None => return None,
            BuilderState::Unchanged(span) => (RunKind::Unchanged, span),
            BuilderState::Deleted(span) => (RunKind::Deleted, span),
            BuilderState::Inserted(span) => (RunKind::Inserted, span),
            BuilderState::DeletedThenInserted(span) => (RunKind::Replaced, span),
        };
        Some(ChangeRun::new(kind, span.left, span.right))
    }
}

/// Folds the classification stream into [`ChangeRun`]s.
///
/// Each pushed line either extends the pending run or flushes it and opens a
/// new one; [`ChangeListBuilder::finish`] flushes whatever is left.
#[derive(Debug, Default)]
pub struct ChangeListBuilder {
    state: BuilderState,
    left_cursor: usize,
    right_cursor: usize,
    runs: Vec<ChangeRun>,
}

impl ChangeListBuilder {
    pub fn build(classification: &Classification) -> Vec<ChangeRun> {
        let mut builder = ChangeListBuilder::default();
        for line in classification.scan() {
            builder.push(line);
        }
        builder.finish()
    }

    pub fn push(&mut self, line: ClassifiedLine) {
        let state = std::mem::take(&mut self.state);

        self.state = match (state, line) {
            (BuilderState::Unchanged(mut span), ClassifiedLine::Unchanged { left, right }) => {
                span.left.end = left + 1;
                span.right.end = right + 1;
                BuilderState::Unchanged(span)
            }
            (BuilderState::Deleted(mut span), ClassifiedLine::Deleted { left }) => {
                span.left.end = left + 1;
                BuilderState::Deleted(span)
            }
            (BuilderState::Deleted(mut span), ClassifiedLine::Inserted { right }) => {
                span.right = right..right + 1;
                BuilderState::DeletedThenInserted(span)
            }
            (BuilderState::Inserted(mut span), ClassifiedLine::Inserted { right }) => {
                span.right.end = right + 1;
                BuilderState::Inserted(span)
            }
            (BuilderState::DeletedThenInserted(mut span), ClassifiedLine::Inserted { right }) => {
                span.right.end = right + 1;
                BuilderState::DeletedThenInserted(span)
            }
            (pending, line) => {
                self.runs.extend(pending.into_run());
                self.open(line)
            }
        };

        match line {
            ClassifiedLine::Unchanged { left, right } => {
                self.left_cursor = left + 1;
                self.right_cursor = right + 1;
            }
            ClassifiedLine::Deleted { left } => self.left_cursor = left + 1,
            ClassifiedLine::Inserted { right } => self.right_cursor = right + 1,
        }
    }

    fn open(&self, line: ClassifiedLine) -> BuilderState {
        let (left_at, right_at) = (self.left_cursor, self.right_cursor);

        match line {
            ClassifiedLine::Unchanged { left, right } => BuilderState::Unchanged(Span {
                left: left..left + 1,
                right: right..right + 1,
            }),
            ClassifiedLine::Deleted { left } => BuilderState::Deleted(Span {
                left: left..left + 1,
                right: right_at..right_at,
            }),
            ClassifiedLine::Inserted { right } => BuilderState::Inserted(Span {
                left: left_at..left_at,
                right: right..right + 1,
            }),
        }
    }

    /// Flushes the pending run. Two empty inputs yield one empty unchanged
    /// run.
    pub fn finish(mut self) -> Vec<ChangeRun> {
        let state = std::mem::take(&mut self.state);
        self.runs.extend(state.into_run());

        if self.runs.is_empty() {
            self.runs.push(ChangeRun::new(RunKind::Unchanged, 0..0, 0..0));
        }

        self.runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::classification::Match;
    use pretty_assertions::assert_eq;

    fn build(left_len: usize, right_len: usize, matches: &[(usize, usize)]) -> Vec<ChangeRun> {
        let matches = matches
            .iter()
            .map(|&(left, right)| Match::new(left, right))
            .collect();
        ChangeListBuilder::build(&Classification::from_matches(left_len, right_len, matches))
    }

    #[test]
    fn merges_delete_then_insert_into_replaced() {
        // a b c -> a x c
        let runs = build(3, 3, &[(0, 0), (2, 2)]);

        assert_eq!(
            runs,
            vec![
                ChangeRun::new(RunKind::Unchanged, 0..1, 0..1),
                ChangeRun::new(RunKind::Replaced, 1..2, 1..2),
                ChangeRun::new(RunKind::Unchanged, 2..3, 2..3),
            ]
        );
    }

    #[test]
    fn pure_insertion_has_positioned_empty_left_range() {
        // a c -> a b c
        let runs = build(2, 3, &[(0, 0), (1, 2)]);

        assert_eq!(
            runs,
            vec![
                ChangeRun::new(RunKind::Unchanged, 0..1, 0..1),
                ChangeRun::new(RunKind::Inserted, 1..1, 1..2),
                ChangeRun::new(RunKind::Unchanged, 1..2, 2..3),
            ]
        );
    }

    #[test]
    fn pure_deletion_has_positioned_empty_right_range() {
        // a a -> a
        let runs = build(2, 1, &[(0, 0)]);

        assert_eq!(
            runs,
            vec![
                ChangeRun::new(RunKind::Unchanged, 0..1, 0..1),
                ChangeRun::new(RunKind::Deleted, 1..2, 1..1),
            ]
        );
    }

    #[test]
    fn insertion_followed_by_deletion_stays_separate() {
        // x a -> a x
        let runs = build(2, 2, &[(1, 0)]);

        assert_eq!(
            runs,
            vec![
                ChangeRun::new(RunKind::Deleted, 0..1, 0..0),
                ChangeRun::new(RunKind::Unchanged, 1..2, 0..1),
                ChangeRun::new(RunKind::Inserted, 2..2, 1..2),
            ]
        );
    }

    #[test]
    fn disjoint_sides_form_a_single_replaced_run() {
        let runs = build(2, 3, &[]);

        assert_eq!(runs, vec![ChangeRun::new(RunKind::Replaced, 0..2, 0..3)]);
    }

    #[test]
    fn empty_sides_form_an_empty_unchanged_run() {
        assert_eq!(
            build(0, 0, &[]),
            vec![ChangeRun::new(RunKind::Unchanged, 0..0, 0..0)]
        );
    }

    #[test]
    fn only_insertions_into_empty_left() {
        assert_eq!(
            build(0, 1, &[]),
            vec![ChangeRun::new(RunKind::Inserted, 0..0, 0..1)]
        );
    }

    #[test]
    fn run_kinds_display_lowercase() {
        assert_eq!(RunKind::Replaced.to_string(), "replaced");
        assert_eq!(RunKind::Unchanged.to_string(), "unchanged");
    }
}
