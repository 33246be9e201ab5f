use crate::artifacts::diff::error::{Ceiling, DiffError};
use crate::artifacts::lines::LineSequence;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::warn;

/// Knobs for a single comparison.
///
/// `ignore_whitespace` and `ignore_case` only change the equality predicate
/// used to pair lines; the ceilings bound the work the engine is allowed to
/// do before giving up with [`DiffError::InputTooLarge`].
///
/// `ignore_case` compares the Unicode lowercase forms of both lines. That is
/// not full case folding: `STRASSE` and `straße` still differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffOptions {
    pub ignore_whitespace: bool,
    pub ignore_case: bool,
    pub max_lines: Option<usize>,
    pub max_edit_distance: Option<usize>,
}

impl DiffOptions {
    pub fn with_ignore_whitespace(mut self, ignore_whitespace: bool) -> Self {
        self.ignore_whitespace = ignore_whitespace;
        self
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn with_max_lines(mut self, max_lines: Option<usize>) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_max_edit_distance(mut self, max_edit_distance: Option<usize>) -> Self {
        self.max_edit_distance = max_edit_distance;
        self
    }

    /// The form of `text` that takes part in comparisons.
    pub fn comparison_key<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut key = Cow::Borrowed(text);

        if self.ignore_whitespace {
            key = Cow::Owned(key.chars().filter(|c| !c.is_whitespace()).collect());
        }
        if self.ignore_case {
            key = Cow::Owned(key.to_lowercase());
        }

        key
    }

    pub fn lines_equal(&self, a: &str, b: &str) -> bool {
        self.comparison_key(a) == self.comparison_key(b)
    }

    pub fn check_line_count(&self, lines: usize) -> Result<(), DiffError> {
        match self.max_lines {
            Some(limit) if lines > limit => {
                warn!(lines, limit, "refusing to compare, line ceiling exceeded");
                Err(DiffError::InputTooLarge {
                    ceiling: Ceiling::Lines,
                    required: lines,
                    limit,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Both sides of a comparison, with every line replaced by a dense id.
///
/// Lines whose comparison keys are equal share an id, so the search compares
/// integers instead of strings. A final line without a terminator never
/// shares an id with a terminated line, whatever the options say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternedLines {
    pub left: Vec<usize>,
    pub right: Vec<usize>,
    pub distinct: usize,
}

impl InternedLines {
    pub fn intern<'s>(
        left: &'s LineSequence,
        right: &'s LineSequence,
        options: &DiffOptions,
    ) -> Self {
        let mut ids: HashMap<Cow<'s, str>, usize> = HashMap::new();

        let left = Self::intern_side(&mut ids, left, options);
        let right = Self::intern_side(&mut ids, right, options);

        InternedLines {
            left,
            right,
            distinct: ids.len(),
        }
    }

    fn intern_side<'s>(
        ids: &mut HashMap<Cow<'s, str>, usize>,
        sequence: &'s LineSequence,
        options: &DiffOptions,
    ) -> Vec<usize> {
        sequence
            .lines()
            .iter()
            .map(|line| {
                let mut key = options.comparison_key(line.text());
                // Line texts never hold '\n', so the suffix keeps an unterminated
                // last line apart from a terminated one with the same text.
                if sequence.is_unterminated(line.index()) {
                    key.to_mut().push('\n');
                }

                let next = ids.len();
                *ids.entry(key).or_insert(next)
            })
            .collect()
    }
}
