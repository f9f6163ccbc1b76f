// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines types to create and parse cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit, parse_cards};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "DK".parse().unwrap();
//! assert_eq!(kd.rank(), Rank::King);
//!
//! let board = parse_cards("CT CJ CQ CK CA").unwrap();
//! assert_eq!(board.len(), 5);
//! assert!(!board.contains(&ah));
//! ```
//!
//! a [KSubsets] iterator to choose k items out of n, and a [Deck] type for
//! iterating all the k-cards hands in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! // Iterate through all 5 cards hands (2.6M hands).
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! The **`parallel`** feature enables parallel iteration with a given number of
//! tasks, the closure `task_id` can be used to store per task data to reduce
//! contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_for_each() {
//! # use std::sync::atomic;
//! # use showdown_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_for_each(4, 5, |task_id, hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 2_598_960);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, Rank, Suit, ensure_distinct, parse_cards};

mod deck;
pub use deck::Deck;

mod subsets;
pub use subsets::{KSubsets, Subset, nck};
