// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Combinations without repetition.
//!
//! [KSubsets] walks the k-subsets of `0..n` in lexicographic order, each
//! subset is a sorted list of positions that callers use to pick items out of
//! a slice.
use std::ops::Deref;

/// Returns the binomial coefficient for n choose k.
///
/// Saturates at `usize::MAX` if the result doesn't fit.
pub fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    // C(n, k) == C(n, n - k), use the smaller one.
    let k = k.min(n - k) as u128;
    let n = n as u128;

    let mut res = 1u128;
    for i in 0..k {
        // Exact at every step as res holds C(n, i) * (n - i) / (i + 1).
        res = res * (n - i) / (i + 1);
        if res > usize::MAX as u128 {
            return usize::MAX;
        }
    }

    res as usize
}

/// A k-subset of positions, sorted in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subset {
    idx: [usize; KSubsets::MAX_K],
    len: usize,
}

impl Deref for Subset {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.idx[..self.len]
    }
}

/// Iterator over all k-subsets of `0..n`.
///
/// ```
/// # use showdown_cards::KSubsets;
/// let subsets = KSubsets::new(4, 2).map(|s| s.to_vec()).collect::<Vec<_>>();
/// assert_eq!(
///     subsets,
///     [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct KSubsets {
    n: usize,
    k: usize,
    /// The next subset to return.
    idx: [usize; KSubsets::MAX_K],
    /// Number of subsets left.
    remaining: usize,
}

impl KSubsets {
    /// The largest supported subset size.
    pub const MAX_K: usize = 7;

    /// Creates an iterator for all k-subsets of `0..n`.
    ///
    /// Panics if k > [KSubsets::MAX_K].
    pub fn new(n: usize, k: usize) -> Self {
        Self::from_nth(n, k, 0)
    }

    /// Creates an iterator that starts from the nth k-subset in lexicographic
    /// order, useful to split the subsets between tasks.
    ///
    /// Panics if k > [KSubsets::MAX_K].
    pub fn from_nth(n: usize, k: usize, nth: usize) -> Self {
        assert!(k <= Self::MAX_K, "k={k} must be k <= {}", Self::MAX_K);

        let total = nck(n, k);
        let remaining = total.saturating_sub(nth);
        let idx = if remaining > 0 {
            Self::nth_subset(n, k, nth)
        } else {
            [0; Self::MAX_K]
        };

        Self {
            n,
            k,
            idx,
            remaining,
        }
    }

    /// Unranks the nth subset, each position takes the smallest value that
    /// leaves fewer than nth subsets before it.
    fn nth_subset(n: usize, k: usize, mut nth: usize) -> [usize; Self::MAX_K] {
        let mut out = [0; Self::MAX_K];
        let mut c = 0;

        for i in 0..k {
            loop {
                // Number of subsets with c at position i.
                let count = nck(n - c - 1, k - i - 1);
                if nth < count {
                    break;
                }

                nth -= count;
                c += 1;
            }

            out[i] = c;
            c += 1;
        }

        out
    }

    /// Moves idx to the next subset in lexicographic order.
    fn advance(&mut self) {
        let (n, k) = (self.n, self.k);

        // Find the rightmost position that can still move right.
        let Some(i) = (0..k).rev().find(|&i| self.idx[i] < n - k + i) else {
            return;
        };

        self.idx[i] += 1;
        for j in (i + 1)..k {
            self.idx[j] = self.idx[j - 1] + 1;
        }
    }
}

impl Iterator for KSubsets {
    type Item = Subset;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let subset = Subset {
            idx: self.idx,
            len: self.k,
        };

        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }

        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for KSubsets {}
