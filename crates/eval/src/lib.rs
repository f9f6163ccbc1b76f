// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for hands of any size: five cards are classified
//! directly, larger hands, like the seven cards in Hold'em, are evaluated by
//! searching the best five cards combination.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use showdown_eval::*;
//! let royal = parse_cards("CT CJ CQ CK CA").unwrap();
//! let v1 = HandValue::eval(&royal);
//! assert_eq!(v1.rank(), HandRank::RoyalFlush);
//! assert_eq!(v1.rank().to_string(), "Royal Flush");
//!
//! let holdem = parse_cards("D6 S9 H4 S3 C2 SK CA").unwrap();
//! let v2 = HandValue::eval(&holdem);
//! assert_eq!(v2.rank(), HandRank::HighCard);
//! assert!(v1 > v2);
//! ```
//!
//! and [Hand] to also get the five cards that make the best hand:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = parse_cards("D6 S9 H4 S3 C2 SK CA").unwrap();
//! let hand = Hand::best(&cards);
//! assert_eq!(hand.to_string(), "High Card (A K 9 6 4) [CA SK S9 D6 H4]");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Hand, HandRank, HandValue, showdown};

// Reexport cards types.
pub use showdown_cards::{
    Card, Deck, KSubsets, Rank, Subset, Suit, ensure_distinct, nck, parse_cards,
};
