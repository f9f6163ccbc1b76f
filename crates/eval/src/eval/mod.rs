// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator classifies five cards into one of the ten [HandRank]
//! categories and computes the ranks used to break ties between hands of the
//! same category, both are stored in a [HandValue] that is totally ordered.
//!
//! For more than five cards [Hand::best] goes through every five cards
//! combination and keeps the strongest one, useful for Hold'em where a player
//! hand is made of the two hole cards and five board cards. The [showdown]
//! function compares the best hands of several players and returns the winners.

mod hand;
pub use hand::{Hand, showdown};

mod rank;
pub use rank::HandRank;

mod value;
pub use value::HandValue;
