// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classifier.
use std::{cmp::Ordering, fmt, iter};

use super::{Hand, HandRank};
use crate::{Card, Rank, Suit};

/// Maximum number of ranks used to break ties.
const MAX_VALUES: usize = 5;

/// A hand category with the ranks used to break ties between hands of the same
/// category.
///
/// Values compare by category first and then by the tie-break ranks from the
/// most significant one, suits never matter:
///
/// ```
/// # use showdown_eval::*;
/// let quads = HandValue::classify(&parse_cards("HT SQ ST DT CT").unwrap());
/// assert_eq!(quads.rank(), HandRank::FourOfAKind);
/// assert_eq!(quads.values(), [Rank::Ten, Rank::Queen]);
///
/// let wheel = HandValue::classify(&parse_cards("H4 S5 HA D3 H2").unwrap());
/// assert_eq!(wheel.rank(), HandRank::Straight);
/// assert_eq!(wheel.values(), [Rank::Five]);
/// assert!(quads > wheel);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HandValue {
    rank: HandRank,
    values: [Rank; MAX_VALUES],
    len: usize,
}

impl HandValue {
    /// Classifies a five cards hand.
    ///
    /// Cards don't need to be sorted. The classifier doesn't reject other
    /// lengths or duplicated cards, for those it returns a degenerate but
    /// deterministic value: straights and flushes need exactly five cards,
    /// pairs, trips and quads are counted over whatever cards are given and
    /// the tie-break ranks are truncated to five. An empty slice is a high
    /// card with no ranks.
    pub fn classify(cards: &[Card]) -> HandValue {
        let counts = Counts::new(cards);
        let is_flush = counts.is_flush();
        let straight = counts.straight_high();

        match (is_flush, straight) {
            (true, Some(Rank::Ace)) => {
                return Self::new(HandRank::RoyalFlush, [Rank::Ace]);
            }
            (true, Some(high)) => {
                return Self::new(HandRank::StraightFlush, [high]);
            }
            _ => {}
        }

        if let Some(quads) = counts.of_a_kind(4) {
            let kickers = counts.kickers([quads]).take(1);
            return Self::new(HandRank::FourOfAKind, iter::once(quads).chain(kickers));
        }

        let trips = counts.of_a_kind(3);
        if let (Some(trips), Some(pair)) = (trips, counts.of_a_kind(2)) {
            return Self::new(HandRank::FullHouse, [trips, pair]);
        }

        if is_flush {
            return Self::new(HandRank::Flush, counts.descending());
        }

        if let Some(high) = straight {
            return Self::new(HandRank::Straight, [high]);
        }

        if let Some(trips) = trips {
            let kickers = counts.kickers([trips]).take(2);
            return Self::new(HandRank::ThreeOfAKind, iter::once(trips).chain(kickers));
        }

        let mut pairs = counts.pairs();
        match (counts.num_pairs(), pairs.next(), pairs.next()) {
            (2, Some(high), Some(low)) => {
                let kickers = counts.kickers([high, low]).take(1);
                Self::new(HandRank::TwoPairs, [high, low].into_iter().chain(kickers))
            }
            (_, Some(pair), _) => {
                let kickers = counts.kickers([pair]).take(3);
                Self::new(HandRank::OnePair, iter::once(pair).chain(kickers))
            }
            _ => Self::new(HandRank::HighCard, counts.descending()),
        }
    }

    /// Evaluates the best five cards hand out of the given cards.
    ///
    /// Same as [Hand::best] without returning the winning cards.
    pub fn eval(cards: &[Card]) -> HandValue {
        Hand::best(cards).value()
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The ranks used to break ties, from the most significant.
    pub fn values(&self) -> &[Rank] {
        &self.values[..self.len]
    }

    fn new(rank: HandRank, values: impl IntoIterator<Item = Rank>) -> Self {
        let mut value = Self {
            rank,
            values: [Rank::Deuce; MAX_VALUES],
            len: 0,
        };

        for r in values.into_iter().take(MAX_VALUES) {
            value.values[value.len] = r;
            value.len += 1;
        }

        value
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    /// Slices compare element by element and a strict prefix is less than the
    /// longer slice.
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.values().cmp(other.values()))
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.rank)?;
        for (idx, r) in self.values().iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{r}")?;
        }
        write!(f, ")")
    }
}

/// Rank and suit frequencies for a set of cards.
struct Counts {
    ranks: [u8; Rank::COUNT],
    suits: [u8; Suit::COUNT],
    len: usize,
}

impl Counts {
    fn new(cards: &[Card]) -> Self {
        let mut ranks = [0; Rank::COUNT];
        let mut suits = [0; Suit::COUNT];

        for card in cards {
            ranks[card.rank() as usize] += 1;
            suits[card.suit() as usize] += 1;
        }

        Self {
            ranks,
            suits,
            len: cards.len(),
        }
    }

    fn is_flush(&self) -> bool {
        self.len == 5 && self.suits.contains(&5)
    }

    /// Returns the straight high card if the five ranks are consecutive.
    fn straight_high(&self) -> Option<Rank> {
        if self.len != 5 || self.ranks.iter().any(|&c| c > 1) {
            return None;
        }

        // The wheel, ace plays low.
        let wheel = [Rank::Ace, Rank::Deuce, Rank::Trey, Rank::Four, Rank::Five];
        if wheel.iter().all(|&r| self.ranks[r as usize] == 1) {
            return Some(Rank::Five);
        }

        // Five distinct ranks, check there are no gaps below the highest.
        let high = self.descending().next()?;
        let low = (high as usize).checked_sub(4)?;
        self.ranks[low..=high as usize]
            .iter()
            .all(|&c| c == 1)
            .then_some(high)
    }

    /// The highest rank that appears exactly n times.
    fn of_a_kind(&self, n: u8) -> Option<Rank> {
        self.ranks_where(move |c| c == n).next()
    }

    /// Pair ranks from the highest.
    fn pairs(&self) -> impl Iterator<Item = Rank> + '_ {
        self.ranks_where(|c| c == 2)
    }

    fn num_pairs(&self) -> usize {
        self.ranks.iter().filter(|&&c| c == 2).count()
    }

    /// Distinct ranks not in `exclude`, from the highest.
    fn kickers<const N: usize>(&self, exclude: [Rank; N]) -> impl Iterator<Item = Rank> + '_ {
        self.ranks_where(|c| c > 0)
            .filter(move |r| !exclude.contains(r))
    }

    /// All cards ranks from the highest, repeated ranks included.
    fn descending(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks()
            .rev()
            .flat_map(move |r| iter::repeat_n(r, self.ranks[r as usize] as usize))
    }

    fn ranks_where<F>(&self, f: F) -> impl Iterator<Item = Rank> + '_
    where
        F: Fn(u8) -> bool + 'static,
    {
        Rank::ranks()
            .rev()
            .filter(move |&r| f(self.ranks[r as usize]))
    }
}
