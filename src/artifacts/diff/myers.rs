//! Myers' O(ND) shortest edit script
//!
//! The forward pass explores the edit graph one edit distance at a time,
//! keeping for each diagonal `k = x - y` the furthest x it has reached. A
//! snapshot of that state is pushed to the [`Trace`] before every depth, so
//! the backward pass can walk from `(N, M)` to `(0, 0)` by re-applying the
//! same predecessor rule.
//!
//! Predecessor rule, shared by both passes: on diagonal `k` at depth `d`,
//! move down from `k + 1` (an insertion) when `k == -d`, or when `k != d` and
//! `V[k - 1] < V[k + 1]`; otherwise move right from `k - 1` (a deletion).

use crate::artifacts::diff::compact::format_compact;
use crate::artifacts::diff::edit::{Edit, EditScript};
use crate::artifacts::diff::error::DiffError;
use crate::artifacts::diff::trace::Trace;
use derive_new::new;
use std::fmt::Display;

pub trait DiffAlgorithm<'d, T> {
    type Trace;
    type EditScript;

    fn compute_shortest_edit(&self) -> Self::Trace;
    fn backtrack(&self, trace: &Self::Trace) -> Self::EditScript;

    fn diff(&self) -> Self::EditScript {
        let trace = self.compute_shortest_edit();
        self.backtrack(&trace)
    }

    fn format_compact(&self) -> String
    where
        T: Display,
        Self::EditScript: AsRef<[Edit<T>]>,
    {
        format_compact(self.diff().as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Clone> MyersDiff<'d, T> {
    /// Forward pass that gives up once the edit distance would exceed `limit`
    ///
    /// The check runs between increasing values of `d`, so a search that
    /// terminates at exactly `limit` still succeeds.
    pub fn compute_shortest_edit_within(&self, limit: Option<usize>) -> Result<Trace, DiffError> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let max = n + m;
        // k +/- 1 can reach one past the widest diagonal
        let offset = max + 1;

        let mut v = vec![0isize; (2 * offset + 1) as usize];
        let mut trace = Trace::new(offset as usize);

        for d in 0..=max {
            if let Some(limit) = limit
                && (d as usize) > limit
            {
                log::debug!("myers: giving up at depth {d}, budget {limit}");
                return Err(DiffError::TooLarge { limit });
            }

            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset + k) as usize;

                let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                    // down from k+1, an insertion
                    v[idx + 1]
                } else {
                    // right from k-1, a deletion
                    v[idx - 1] + 1
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    log::trace!("myers: n={n} m={m} distance={d}");
                    return Ok(trace);
                }
            }
        }

        panic!("myers: search exceeded the N + M = {max} bound without reaching ({n}, {m})");
    }

    fn predecessor(trace: &Trace, d: usize, k: isize) -> isize {
        let depth = d as isize;
        let furthest = |k: isize| trace.furthest(d, k).unwrap_or(0);

        if k == -depth || (k != depth && furthest(k - 1) < furthest(k + 1)) {
            k + 1
        } else {
            k - 1
        }
    }
}

impl<'d, T: Eq + Clone> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    type Trace = Trace;
    type EditScript = EditScript<T>;

    fn compute_shortest_edit(&self) -> Self::Trace {
        match self.compute_shortest_edit_within(None) {
            Ok(trace) => trace,
            Err(err) => unreachable!("unbounded search reported {err}"),
        }
    }

    fn backtrack(&self, trace: &Self::Trace) -> Self::EditScript {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let mut edits = Vec::new();

        for d in (1..=trace.distance()).rev() {
            let k = x - y;
            let prev_k = Self::predecessor(trace, d, k);

            // only diagonals -(d-1)..=(d-1) were explored at depth d - 1
            let prev_x = match trace.furthest(d, prev_k) {
                Some(prev_x) if prev_k.unsigned_abs() < d => prev_x,
                _ => panic!("myers: invalid backtrack, k={prev_k} not explored at d={}", d - 1),
            };
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edits.push(Edit::Equal {
                    value: self.a[(x - 1) as usize].clone(),
                });
                x -= 1;
                y -= 1;
            }

            if x == prev_x {
                edits.push(Edit::Insert {
                    value: self.b[(y - 1) as usize].clone(),
                });
                y -= 1;
            } else {
                edits.push(Edit::Delete {
                    value: self.a[(x - 1) as usize].clone(),
                });
                x -= 1;
            }
        }

        while x > 0 || y > 0 {
            if x > 0 && y > 0 && self.a[(x - 1) as usize] == self.b[(y - 1) as usize] {
                edits.push(Edit::Equal {
                    value: self.a[(x - 1) as usize].clone(),
                });
                x -= 1;
                y -= 1;
            } else if x > 0 {
                edits.push(Edit::Delete {
                    value: self.a[(x - 1) as usize].clone(),
                });
                x -= 1;
            } else {
                edits.push(Edit::Insert {
                    value: self.b[(y - 1) as usize].clone(),
                });
                y -= 1;
            }
        }

        edits.reverse();
        edits
    }
}

/// Budgeted diff of two sequences
pub fn diff_within<T: Eq + Clone>(
    a: &[T],
    b: &[T],
    limit: Option<usize>,
) -> Result<EditScript<T>, DiffError> {
    let differ = MyersDiff::new(a, b);
    let trace = differ.compute_shortest_edit_within(limit)?;
    Ok(differ.backtrack(&trace))
}
