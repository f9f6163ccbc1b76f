// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, evaluates and compares poker hands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use log::{debug, error, warn};
use std::fmt::Write;

use showdown_eval::{Card, Hand, ensure_distinct, parse_cards, showdown};

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Finds the best five cards hand.
    Eval {
        /// The cards, for example "CT CJ CQ CK CA".
        #[clap(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Compares the best hands of two or more players.
    Compare {
        /// The board cards shared by all players.
        #[clap(long, short, default_value = "")]
        board: String,
        /// The cards of each player, for example "SK CA" "HA SQ".
        #[clap(required = true, num_args = 2..)]
        hands: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let res = match cli.command {
        Command::Eval { cards } => eval(&cards.join(" ")),
        Command::Compare { board, hands } => compare(&board, &hands),
    };

    match res {
        Ok(report) => print!("{report}"),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}

/// Evaluates the best hand for the given cards.
fn eval(cards: &str) -> Result<String> {
    let cards = parse_cards(cards)?;
    if cards.is_empty() {
        bail!("No cards to evaluate");
    }

    ensure_distinct(&cards)?;
    check_size(&cards);

    debug!("Evaluating {}", format_cards(&cards));
    let hand = Hand::best(&cards);
    Ok(format!("{hand}\n"))
}

/// Compares players hands, each player hand is made of the board cards and
/// the player cards.
fn compare(board: &str, hands: &[String]) -> Result<String> {
    if hands.len() < 2 {
        bail!("At least two players are needed for a showdown");
    }

    let board = parse_cards(board)?;
    let players = hands
        .iter()
        .map(|h| parse_cards(h))
        .collect::<Result<Vec<_>>>()?;

    // A card can be dealt only once.
    let all_cards = board
        .iter()
        .chain(players.iter().flatten())
        .copied()
        .collect::<Vec<_>>();
    ensure_distinct(&all_cards)?;

    let players = players
        .into_iter()
        .map(|cards| board.iter().copied().chain(cards).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let mut report = String::new();
    for (idx, cards) in players.iter().enumerate() {
        check_size(cards);
        debug!("Player {} cards {}", idx + 1, format_cards(cards));

        let hand = Hand::best(cards);
        writeln!(report, "Player {}: {hand}", idx + 1)?;
    }

    let winners = showdown(&players);
    match winners.as_slice() {
        [winner] => writeln!(report, "Player {} wins", winner + 1)?,
        winners => {
            let players = winners
                .iter()
                .map(|idx| (idx + 1).to_string())
                .collect::<Vec<_>>();
            writeln!(report, "Tie between players {}", players.join(", "))?;
        }
    }

    Ok(report)
}

fn check_size(cards: &[Card]) {
    if cards.len() < 5 {
        warn!(
            "Only {} cards, straights and flushes need five cards",
            cards.len()
        );
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
