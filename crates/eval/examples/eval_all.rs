// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all -- --cards 5
// ...
// Total hands      2598960
//
// High Card:       1302540
// One Pair:        1098240
// Two Pairs:       123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  36
// Royal Flush:     4
// ```
//
// With `--cards 7` the best hand of each 7 cards hand is counted, the royal
// flushes are 4324 and the straight flushes 37260.
use clap::{Parser, value_parser};
use std::time::Instant;

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The number of cards in each hand.
    #[clap(long, short, default_value_t = 5, value_parser = value_parser!(u8).range(5..=7))]
    cards: u8,
}

fn main() {
    let cli = Cli::parse();

    let now = Instant::now();
    let mut counts = [0usize; HandRank::COUNT];

    Deck::default().for_each(cli.cards as usize, |hand| {
        let rank = HandValue::eval(hand).rank();
        counts[rank as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        let label = format!("{rank}:");
        println!("{label:<17}{}", counts[rank as usize]);
    }
}
