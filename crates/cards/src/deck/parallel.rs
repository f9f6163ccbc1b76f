// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
use std::thread;

use super::Deck;
use crate::{Card, KSubsets, nck};

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards hand.
    ///
    /// The closure takes an usize that is the task identifier (0..num_tasks)
    /// and a slice of cards of length k. Each task goes through a contiguous
    /// range of hands in lexicographic order.
    ///
    /// Panics if k is not 1 <= k <= 7 or num_tasks is zero.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((1..=KSubsets::MAX_K).contains(&k), "1 <= k <= 7");
        assert!(num_tasks > 0);

        let n = self.cards.len();
        let num_hands = nck(n, k);
        let hands_per_task = num_hands.div_ceil(num_tasks);

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let start = task_id * hands_per_task;
                if start >= num_hands {
                    break;
                }

                let f = &f;
                s.spawn(move || {
                    let mut h = [Card::default(); KSubsets::MAX_K];
                    for subset in KSubsets::from_nth(n, k, start).take(hands_per_task) {
                        for (pos, &idx) in subset.iter().enumerate() {
                            h[pos] = self.cards[idx];
                        }

                        f(task_id, &h[..k]);
                    }
                });
            }
        });
    }
}
