use derive_new::new;

/// A pairing of a left line with an equal right line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Match {
    pub left: usize,
    pub right: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStatus {
    /// Matched to the line at `counterpart` on the other side.
    Common { counterpart: usize },
    /// Present only on the left side.
    Deleted,
    /// Present only on the right side.
    Inserted,
}

/// One step of the parallel scan over both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassifiedLine {
    Unchanged { left: usize, right: usize },
    Deleted { left: usize },
    Inserted { right: usize },
}

/// Per-line classification of both sides, derived from a match set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    matches: Vec<Match>,
    left: Vec<LineStatus>,
    right: Vec<LineStatus>,
}

impl Classification {
    /// `matches` must be strictly increasing in both coordinates and within
    /// bounds.
    pub fn from_matches(left_len: usize, right_len: usize, matches: Vec<Match>) -> Self {
        let mut left = vec![LineStatus::Deleted; left_len];
        let mut right = vec![LineStatus::Inserted; right_len];

        for m in &matches {
            left[m.left] = LineStatus::Common {
                counterpart: m.right,
            };
            right[m.right] = LineStatus::Common {
                counterpart: m.left,
            };
        }

        Classification {
            matches,
            left,
            right,
        }
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn left(&self) -> &[LineStatus] {
        &self.left
    }

    pub fn right(&self) -> &[LineStatus] {
        &self.right
    }

    pub fn deleted_count(&self) -> usize {
        self.left.len() - self.matches.len()
    }

    pub fn inserted_count(&self) -> usize {
        self.right.len() - self.matches.len()
    }

    pub fn is_identical(&self) -> bool {
        self.deleted_count() == 0 && self.inserted_count() == 0
    }

    /// Walks both sides in order. Between two matches every deleted left
    /// line is yielded before every inserted right line.
    pub fn scan(&self) -> Vec<ClassifiedLine> {
        let mut lines = Vec::with_capacity(self.left.len() + self.right.len());
        let (mut left_cursor, mut right_cursor) = (0, 0);

        let sentinel = Match::new(self.left.len(), self.right.len());
        for m in self.matches.iter().chain(std::iter::once(&sentinel)) {
            lines.extend((left_cursor..m.left).map(|left| ClassifiedLine::Deleted { left }));
            lines.extend((right_cursor..m.right).map(|right| ClassifiedLine::Inserted { right }));

            if *m != sentinel {
                lines.push(ClassifiedLine::Unchanged {
                    left: m.left,
                    right: m.right,
                });
            }

            left_cursor = m.left + 1;
            right_cursor = m.right + 1;
        }

        lines
    }
}
