use crate::artifacts::diff::classification::Match;
use crate::artifacts::diff::error::{Ceiling, DiffError};
use derive_new::new;
use tracing::{debug, warn};

/// A shortest-edit-script search over two token sequences.
///
/// Implementations report the matched pairs of the edit script they pick;
/// everything else on either side is a deletion or an insertion.
pub trait DiffAlgorithm<'d, T> {
    type Trace;
    type EditPath;

    fn compute_shortest_edit(&self) -> Result<Self::Trace, DiffError>;
    fn backtrack(&self, trace: &Self::Trace) -> Self::EditPath;
    fn matches(&self) -> Result<Vec<Match>, DiffError>;
}

/// Myers' greedy O((N+M)·D) algorithm.
///
/// Tie-break: when the diagonals on both sides of `k` reach equally far, the
/// path arrives from `k+1` (an insertion); the deleting edge from `k-1` is
/// only taken when it reaches strictly further. The backtrack applies the
/// same rule, so the chosen script is fully determined by the inputs.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
    max_edit_distance: Option<usize>,
}

impl<'d, T: Eq> MyersDiff<'d, T> {
    fn offset(&self) -> isize {
        (self.a.len() + self.b.len()) as isize
    }

    fn slot(&self, k: isize) -> usize {
        (self.offset() + k) as usize
    }
}

impl<'d, T: Eq> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    /// Snapshot of the furthest-reaching x per diagonal, taken at the start
    /// of every round `d`.
    type Trace = Vec<Vec<isize>>;
    type EditPath = Vec<Match>;

    fn compute_shortest_edit(&self) -> Result<Self::Trace, DiffError> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let mut trace = Vec::new();

        if n == 0 && m == 0 {
            return Ok(trace);
        }

        let mut v = vec![0; 2 * self.offset() as usize + 1];

        for d in 0..=(n + m) {
            if let Some(limit) = self.max_edit_distance
                && d as usize > limit
            {
                warn!(limit, "edit distance ceiling exceeded, aborting comparison");
                return Err(DiffError::InputTooLarge {
                    ceiling: Ceiling::EditDistance,
                    required: d as usize,
                    limit,
                });
            }

            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = self.slot(k);

                let mut x = if k == -d {
                    // only reachable from k+1, an insertion
                    v[idx + 1]
                } else if k == d {
                    // only reachable from k-1, a deletion
                    v[idx - 1] + 1
                } else {
                    let x_del = v[idx - 1] + 1;
                    let x_ins = v[idx + 1];
                    x_del.max(x_ins)
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return Ok(trace);
                }
            }
        }

        Ok(trace)
    }

    fn backtrack(&self, trace: &Self::Trace) -> Self::EditPath {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let mut matches = Vec::new();

        for (d, v) in trace.iter().enumerate().rev() {
            let d = d as isize;
            let k = x - y;

            let prev_k = if k == -d {
                k + 1
            } else if k == d {
                k - 1
            } else {
                let k_del = k - 1;
                let k_ins = k + 1;
                if v[self.slot(k_del)] + 1 > v[self.slot(k_ins)] {
                    k_del
                } else {
                    k_ins
                }
            };

            let prev_x = v[self.slot(prev_k)];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                matches.push(Match::new((x - 1) as usize, (y - 1) as usize));
                x -= 1;
                y -= 1;
            }

            (x, y) = (prev_x, prev_y);
        }

        matches.reverse();
        matches
    }

    fn matches(&self) -> Result<Vec<Match>, DiffError> {
        let trace = self.compute_shortest_edit()?;
        let matches = self.backtrack(&trace);

        debug!(
            edit_distance = trace.len().saturating_sub(1),
            matches = matches.len(),
            "shortest edit script found"
        );

        Ok(matches)
    }
}
