//! Longest common subsequence over token slices
//!
//! - [`ExactLcs`]: O(m·n) table with backtrace, exact result
//! - [`ApproximateLcs`]: O(min(m, n)) space length computation plus a lossy
//!   reconstruction that keeps every token of the shorter side that occurs
//!   anywhere in the longer side (order of the shorter side, no multiplicity
//!   check against the longer side)
//!
//! [`longest_common_subsequence`] picks between them by input size.

use derive_new::new;
use std::collections::HashSet;
use std::hash::Hash;

pub trait CommonSubsequence<T> {
    /// Length of a longest common subsequence
    fn length(&self) -> usize;
    /// The subsequence itself (or its approximation)
    fn subsequence(&self) -> Vec<T>;
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ExactLcs<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: Eq + Clone> ExactLcs<'_, T> {
    fn table(&self) -> Vec<Vec<usize>> {
        let (m, n) = (self.a.len(), self.b.len());
        let mut table = vec![vec![0usize; n + 1]; m + 1];

        for i in 1..=m {
            for j in 1..=n {
                table[i][j] = if self.a[i - 1] == self.b[j - 1] {
                    table[i - 1][j - 1] + 1
                } else {
                    table[i - 1][j].max(table[i][j - 1])
                };
            }
        }

        table
    }
}

impl<T: Eq + Clone> CommonSubsequence<T> for ExactLcs<'_, T> {
    fn length(&self) -> usize {
        self.table()[self.a.len()][self.b.len()]
    }

    fn subsequence(&self) -> Vec<T> {
        let table = self.table();
        let (mut i, mut j) = (self.a.len(), self.b.len());
        let mut common = Vec::with_capacity(table[i][j]);

        while i > 0 && j > 0 {
            if self.a[i - 1] == self.b[j - 1] {
                common.push(self.a[i - 1].clone());
                i -= 1;
                j -= 1;
            } else if table[i - 1][j] >= table[i][j - 1] {
                i -= 1;
            } else {
                j -= 1;
            }
        }

        common.reverse();
        common
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ApproximateLcs<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T> ApproximateLcs<'d, T> {
    /// (shorter, longer); ties keep `a` as the shorter side
    fn by_length(&self) -> (&'d [T], &'d [T]) {
        if self.a.len() <= self.b.len() {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }
}

impl<T: Eq + Hash + Clone> CommonSubsequence<T> for ApproximateLcs<'_, T> {
    /// True LCS length in O(min(m, n)) space
    ///
    /// Diagnostic only: [`Self::subsequence`] does not use it, and
    /// [`longest_common_subsequence`] evaluates it solely inside a
    /// `log::trace!`, so it runs only when trace logging is enabled.
    fn length(&self) -> usize {
        let (shorter, longer) = self.by_length();
        let mut prev = vec![0usize; shorter.len() + 1];
        let mut curr = vec![0usize; shorter.len() + 1];

        for outer in longer {
            for (j, inner) in shorter.iter().enumerate() {
                curr[j + 1] = if outer == inner {
                    prev[j] + 1
                } else {
                    prev[j + 1].max(curr[j])
                };
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        prev[shorter.len()]
    }

    fn subsequence(&self) -> Vec<T> {
        let (shorter, longer) = self.by_length();
        let present: HashSet<&T> = longer.iter().collect();

        shorter
            .iter()
            .filter(|token| present.contains(token))
            .cloned()
            .collect()
    }
}

/// Exact LCS when both sides have at most `exact_max` tokens, approximate otherwise
pub fn longest_common_subsequence<T: Eq + Hash + Clone>(
    a: &[T],
    b: &[T],
    exact_max: usize,
) -> Vec<T> {
    if a.len() <= exact_max && b.len() <= exact_max {
        return ExactLcs::new(a, b).subsequence();
    }

    let approximate = ApproximateLcs::new(a, b);
    let common = approximate.subsequence();
    log::trace!(
        "approximate LCS for {}x{} tokens: exact length {}, reconstructed {}",
        a.len(),
        b.len(),
        approximate.length(),
        common.len()
    );

    common
}
