// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Category labels indexed by [HandRank] value.
const LABELS: [&str; HandRank::COUNT] = [
    "High Card",
    "One Pair",
    "Two Pairs",
    "Three of a Kind",
    "Straight",
    "Flush",
    "Full House",
    "Four of a Kind",
    "Straight Flush",
    "Royal Flush",
];

/// All categories from the weakest to the strongest.
const RANKS: [HandRank; HandRank::COUNT] = {
    use HandRank::*;
    [
        HighCard,
        OnePair,
        TwoPairs,
        ThreeOfAKind,
        Straight,
        Flush,
        FullHouse,
        FourOfAKind,
        StraightFlush,
        RoyalFlush,
    ]
};

/// A hand category, ordered by strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPairs,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal flush.
    RoyalFlush,
}

impl HandRank {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        RANKS.into_iter()
    }

    /// The display label for this category.
    pub fn label(&self) -> &'static str {
        LABELS[*self as usize]
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HandRank {
    type Err = anyhow::Error;

    /// Parses a category label, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim();
        LABELS
            .iter()
            .position(|l| l.eq_ignore_ascii_case(label))
            .map(|idx| RANKS[idx])
            .ok_or_else(|| anyhow!("Unknown hand category {s:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(HandRank::HighCard.to_string(), "High Card");
        assert_eq!(HandRank::TwoPairs.to_string(), "Two Pairs");
        assert_eq!(HandRank::ThreeOfAKind.to_string(), "Three of a Kind");
        assert_eq!(HandRank::StraightFlush.to_string(), "Straight Flush");
        assert_eq!(HandRank::RoyalFlush.to_string(), "Royal Flush");
    }

    #[test]
    fn labels_round_trip() {
        for rank in HandRank::ranks() {
            assert_eq!(rank.to_string().parse::<HandRank>().unwrap(), rank);
        }

        assert_eq!(
            "full house".parse::<HandRank>().unwrap(),
            HandRank::FullHouse
        );
        assert!("Five of a Kind".parse::<HandRank>().is_err());
        assert!("".parse::<HandRank>().is_err());
    }

    #[test]
    fn strength_order() {
        let ranks = HandRank::ranks().collect::<Vec<_>>();
        assert_eq!(ranks.len(), HandRank::COUNT);
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ranks[0], HandRank::HighCard);
        assert_eq!(ranks[HandRank::COUNT - 1], HandRank::RoyalFlush);
    }
}
