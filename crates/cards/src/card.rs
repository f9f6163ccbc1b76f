// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use ahash::AHashSet;
use anyhow::{Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Rank symbols indexed by [Rank] value.
const RANK_SYMBOLS: [char; 13] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

/// Suit symbols indexed by [Suit] value.
const SUIT_SYMBOLS: [char; 4] = ['H', 'S', 'C', 'D'];

/// All ranks in ascending order.
const RANKS: [Rank; 13] = {
    use Rank::*;
    [
        Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
    ]
};

/// All suits.
const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Clubs, Suit::Diamonds];

/// A Poker card.
///
/// A card is a plain rank and suit pair, its string representation is the suit
/// symbol followed by the rank symbol:
///
/// ```
/// # use showdown_cards::{Card, Rank, Suit};
/// let tc = Card::new(Rank::Ten, Suit::Clubs);
/// assert_eq!(tc.to_string(), "CT");
/// assert_eq!("CT".parse::<Card>().unwrap(), tc);
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl Default for Card {
    fn default() -> Self {
        Card::new(Rank::Ace, Suit::Spades)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.suit, self.rank)
    }
}

impl FromStr for Card {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(suit), Some(rank), None) => {
                let suit = Suit::from_char(suit).map_err(|e| anyhow!("Invalid card {s}: {e}"))?;
                let rank = Rank::from_char(rank).map_err(|e| anyhow!("Invalid card {s}: {e}"))?;
                Ok(Card::new(rank, suit))
            }
            _ => bail!("Invalid card {s:?}: expected a suit and a rank symbol"),
        }
    }
}

/// Parses a whitespace separated list of cards, for example `"CT CJ CQ CK CA"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>> {
    s.split_whitespace().map(str::parse).collect()
}

/// Checks that no card appears more than once.
pub fn ensure_distinct(cards: &[Card]) -> Result<()> {
    let mut seen = AHashSet::with_capacity(cards.len());
    for card in cards {
        if !seen.insert(*card) {
            bail!("Duplicate card {card}");
        }
    }

    Ok(())
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        RANKS.into_iter()
    }

    /// Returns the rank with the given index, 0 for deuce up to 12 for ace.
    pub fn from_index(idx: usize) -> Option<Rank> {
        RANKS.get(idx).copied()
    }

    /// Parses a rank symbol.
    pub fn from_char(c: char) -> Result<Rank> {
        RANK_SYMBOLS
            .iter()
            .position(|&s| s == c)
            .map(|idx| RANKS[idx])
            .ok_or_else(|| anyhow!("invalid rank {c:?}"))
    }

    /// The rank symbol.
    pub fn symbol(&self) -> char {
        RANK_SYMBOLS[*self as usize]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts = 0,
    /// Spades suit.
    Spades,
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        SUITS.into_iter()
    }

    /// Parses a suit symbol.
    pub fn from_char(c: char) -> Result<Suit> {
        SUIT_SYMBOLS
            .iter()
            .position(|&s| s == c)
            .map(|idx| SUITS[idx])
            .ok_or_else(|| anyhow!("invalid suit {c:?}"))
    }

    /// The suit symbol.
    pub fn symbol(&self) -> char {
        SUIT_SYMBOLS[*self as usize]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
