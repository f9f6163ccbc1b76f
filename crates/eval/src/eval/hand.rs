// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hand selection.
use log::trace;
use std::{cmp::Ordering, fmt};

use super::{HandRank, HandValue};
use crate::{Card, KSubsets};

/// Number of cards in a poker hand.
const HAND_SIZE: usize = 5;

/// The best five cards hand out of a set of cards.
///
/// ```
/// # use showdown_eval::*;
/// let cards = parse_cards("SA DQ CK D6 H6 HA C3").unwrap();
/// let hand = Hand::best(&cards);
/// assert_eq!(hand.rank(), HandRank::TwoPairs);
/// assert_eq!(hand.value().values(), [Rank::Ace, Rank::Six, Rank::King]);
/// assert_eq!(hand.to_string(), "Two Pairs (A 6 K) [SA HA CK D6 H6]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    len: usize,
    value: HandValue,
}

impl Hand {
    /// Finds the best hand out of the given cards.
    ///
    /// With five cards or fewer all cards are classified as they are, with more
    /// cards every five cards combination is classified and the strongest one
    /// wins. When several combinations tie the first one found is returned.
    pub fn best(cards: &[Card]) -> Hand {
        if cards.len() <= HAND_SIZE {
            return Self::new(cards, HandValue::classify(cards));
        }

        // The first combination in lexicographic order.
        let mut best_cards = [Card::default(); HAND_SIZE];
        best_cards.copy_from_slice(&cards[..HAND_SIZE]);
        let mut best_value = HandValue::classify(&best_cards);

        let mut h = [Card::default(); HAND_SIZE];
        for subset in KSubsets::from_nth(cards.len(), HAND_SIZE, 1) {
            for (pos, &idx) in subset.iter().enumerate() {
                h[pos] = cards[idx];
            }

            let value = HandValue::classify(&h);
            if value > best_value {
                trace!("New best hand {value} {h:?}");
                best_value = value;
                best_cards = h;
            }
        }

        Self::new(&best_cards, best_value)
    }

    /// The hand cards sorted by rank from the highest.
    pub fn cards(&self) -> &[Card] {
        &self.cards[..self.len]
    }

    /// The hand value.
    pub fn value(&self) -> HandValue {
        self.value
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.value.rank()
    }

    fn new(cards: &[Card], value: HandValue) -> Self {
        let mut hand = Self {
            cards: [Card::default(); HAND_SIZE],
            len: cards.len(),
            value,
        };

        hand.cards[..cards.len()].copy_from_slice(cards);
        hand.cards[..cards.len()].sort_by(|c1, c2| c2.rank().cmp(&c1.rank()));
        hand
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Hands compare by value, the cards suits don't matter.
impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.value)?;
        for (idx, c) in self.cards().iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}

/// Evaluates each player cards and returns the indices of the players with the
/// best hand, more than one index if the best hands tie.
///
/// ```
/// # use showdown_eval::*;
/// let board = "D6 S9 H4 S3 C2";
/// let p1 = parse_cards(&format!("{board} SK CA")).unwrap();
/// let p2 = parse_cards(&format!("{board} HA SQ")).unwrap();
/// let p3 = parse_cards(&format!("{board} HA CK")).unwrap();
/// assert_eq!(showdown(&[&p1, &p2]), [0]);
/// assert_eq!(showdown(&[&p1, &p2, &p3]), [0, 2]);
/// ```
pub fn showdown<C: AsRef<[Card]>>(players: &[C]) -> Vec<usize> {
    let values = players
        .iter()
        .map(|cards| HandValue::eval(cards.as_ref()))
        .collect::<Vec<_>>();

    let Some(best) = values.iter().max() else {
        return Vec::new();
    };

    values
        .iter()
        .enumerate()
        .filter(|(_, v)| *v == best)
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, Rank, parse_cards};
    use rand::prelude::*;

    fn best(s: &str) -> Hand {
        Hand::best(&parse_cards(s).unwrap())
    }

    #[test]
    fn best_of_seven() {
        // Three clubs and a pair of nines, the flush needs five suited cards.
        let hand = best("C2 C7 CK H9 S9 DA H4");
        assert_eq!(hand.rank(), HandRank::OnePair);
        assert_eq!(hand.value().values(), [Rank::Nine, Rank::Ace, Rank::King, Rank::Seven]);

        // Five clubs beat the pair.
        let hand = best("C2 C7 CK H9 C9 DA C4");
        assert_eq!(hand.rank(), HandRank::Flush);
        assert!(hand.cards().iter().all(|c| c.suit() == crate::Suit::Clubs));
        assert_eq!(
            hand.value().values(),
            [Rank::King, Rank::Nine, Rank::Seven, Rank::Four, Rank::Deuce]
        );

        // A straight hidden among pairs.
        let hand = best("H5 S6 C7 D8 H9 S9 C5");
        assert_eq!(hand.rank(), HandRank::Straight);
        assert_eq!(hand.value().values(), [Rank::Nine]);

        // Two trips make a full house with the higher trips.
        let hand = best("HQ SQ CQ H4 S4 D4 C2");
        assert_eq!(hand.rank(), HandRank::FullHouse);
        assert_eq!(hand.value().values(), [Rank::Queen, Rank::Four]);

        // Three pairs, the best two pairs with the highest kicker.
        let hand = best("HQ SQ C8 H8 S3 D3 CA");
        assert_eq!(hand.rank(), HandRank::TwoPairs);
        assert_eq!(hand.value().values(), [Rank::Queen, Rank::Eight, Rank::Ace]);
    }

    #[test]
    fn best_hand_cards() {
        let hand = best("D6 S9 H4 S3 C2 SK CA");
        assert_eq!(hand.cards().len(), 5);
        assert_eq!(
            hand.cards().iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            ["CA", "SK", "S9", "D6", "H4"]
        );
        assert_eq!(hand.to_string(), "High Card (A K 9 6 4) [CA SK S9 D6 H4]");
    }

    #[test]
    fn five_or_fewer_cards() {
        let hand = best("CT CJ CQ CK CA");
        assert_eq!(hand.rank(), HandRank::RoyalFlush);
        assert_eq!(hand.value().values(), [Rank::Ace]);
        assert_eq!(hand.cards()[0].rank(), Rank::Ace);

        let hand = best("HA SA");
        assert_eq!(hand.rank(), HandRank::OnePair);
        assert_eq!(hand.cards().len(), 2);

        let hand = Hand::best(&[]);
        assert_eq!(hand.rank(), HandRank::HighCard);
        assert!(hand.cards().is_empty());
    }

    #[test]
    fn equal_high_cards() {
        let h1 = best("D6 S9 H4 S3 C2 SK CA");
        let h2 = best("D6 S9 H4 S3 C2 HA CK");
        assert_eq!(h1.rank(), HandRank::HighCard);
        assert_eq!(
            h1.value().values(),
            [Rank::Ace, Rank::King, Rank::Nine, Rank::Six, Rank::Four]
        );
        assert_eq!(h1.value(), h2.value());
        assert_eq!(h1.cmp(&h2), Ordering::Equal);
    }

    #[test]
    fn showdowns() {
        use Ordering::*;

        #[rustfmt::skip]
        let tests = [
            // High card
            ("D6 S9 H4 S3 C2", "SK CA", "HA SQ", Greater),
            ("D6 S9 H4 S3 C2", "SK CA", "HA CK", Equal),
            ("D6 S9 H4 H3 D4", "C7 DQ", "C8 DJ", Greater),
            // One pair
            ("SK HT C8 C7 D2", "DK C5", "H8 D5", Greater),
            ("SK HT C8 C7 D2", "DK C4", "HK C5", Equal),
            ("HA DA ST C9 D4", "D5 C6", "H7 C2", Less),
            // Two pairs
            ("SA DQ CK D6 H6", "HA C3", "CQ H4", Greater),
            ("SA DQ CK D6 H6", "HQ C3", "SQ H4", Equal),
            ("SA DQ CK D6 H5", "HQ C6", "CA HK", Less),
            // Three of a kind
            ("SA D3 H2 C8 SJ", "HJ CJ", "C3 H3", Greater),
            ("SA D3 H3 C8 SJ", "C3 S2", "S3 H2", Equal),
            ("HA SA DA H3 HT", "S2 S5", "H2 SK", Less),
            // Straight
            ("H3 S4 C5 S6 HT", "D7 HA", "H2 SA", Greater),
            ("H3 S4 C5 S6 HT", "D7 HA", "H7 SA", Equal),
            ("H2 H3 S4 C5 HT", "HA S3", "H6 SA", Less),
            // Flush
            ("D3 D6 DT C5 HQ", "DK DA", "D2 DQ", Greater),
            ("D3 D6 DT DJ DK", "C3 HA", "S9 HJ", Equal),
            ("D3 D6 DT C5 HQ", "D2 D5", "DJ DA", Less),
            // Full house
            ("HQ SQ HT DT C3", "DQ C2", "CT C4", Greater),
            ("SA HQ SQ HT D8", "HA DQ", "DA CQ", Equal),
            ("HQ SQ HT DT C3", "ST C2", "CQ C4", Less),
            // Four of a kind
            ("HT ST CT DT HK", "HA S7", "DJ C5", Greater),
            ("S5 D5 C5 H5 HA", "CT HT", "C4 SQ", Equal),
            ("HT ST CT DT S8", "C2 C3", "C5 HK", Less),
            // Straight flush
            ("H3 H4 H5 H6 HT", "H7 HA", "H2 SA", Greater),
            ("H3 H4 H5 H6 H7", "HA ST", "CQ D6", Equal),
            ("S7 S8 S9 ST DK", "S6 C2", "SJ D5", Less),
            // Royal flush
            ("DT DJ DQ DK DA", "C2 C3", "H2 H3", Equal),
        ];

        for (board, p1, p2, expected) in tests {
            let h1 = best(&format!("{board} {p1}"));
            let h2 = best(&format!("{board} {p2}"));
            assert_eq!(h1.cmp(&h2), expected, "{board} | {p1}: {h1} | {p2}: {h2}");

            let winners = match expected {
                Greater => vec![0],
                Less => vec![1],
                Equal => vec![0, 1],
            };

            let p1 = parse_cards(&format!("{board} {p1}")).unwrap();
            let p2 = parse_cards(&format!("{board} {p2}")).unwrap();
            assert_eq!(showdown(&[p1, p2]), winners, "{board}");
        }
    }

    #[test]
    fn showdown_edge_cases() {
        let players: [Vec<Card>; 0] = [];
        assert!(showdown(&players).is_empty());

        let p1 = parse_cards("H2 S7 C9 DJ HK S3 D4").unwrap();
        assert_eq!(showdown(&[&p1]), [0]);
    }

    #[test]
    fn best_beats_every_subset() {
        let mut rng = rand::rng();
        let deck = Deck::default();

        for _ in 0..200 {
            let cards = deck
                .cards()
                .choose_multiple(&mut rng, 7)
                .copied()
                .collect::<Vec<_>>();
            let hand = Hand::best(&cards);

            // Winning cards come from the input.
            assert_eq!(hand.cards().len(), 5);
            assert!(hand.cards().iter().all(|c| cards.contains(c)));
            assert_eq!(HandValue::classify(hand.cards()), hand.value());

            let mut h = [Card::default(); 5];
            for subset in KSubsets::new(7, 5) {
                for (pos, &idx) in subset.iter().enumerate() {
                    h[pos] = cards[idx];
                }
                assert!(HandValue::classify(&h) <= hand.value());
            }
        }
    }

    #[test]
    fn best_ignores_input_order() {
        let mut rng = rand::rng();
        let deck = Deck::default();

        for _ in 0..100 {
            let mut cards = deck
                .cards()
                .choose_multiple(&mut rng, 7)
                .copied()
                .collect::<Vec<_>>();
            let expected = HandValue::eval(&cards);

            for _ in 0..5 {
                cards.shuffle(&mut rng);
                assert_eq!(HandValue::eval(&cards), expected);
            }
        }
    }

    #[test]
    fn more_than_seven_cards() {
        // All diamonds, the royal flush is somewhere in there.
        let cards = Deck::default()
            .into_iter()
            .filter(|c| c.suit() == crate::Suit::Diamonds)
            .collect::<Vec<_>>();
        assert_eq!(cards.len(), 13);

        let hand = Hand::best(&cards);
        assert_eq!(hand.rank(), HandRank::RoyalFlush);
    }
}
