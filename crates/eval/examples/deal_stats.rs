// Copyright (C) 2025 The Showdown Authors
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example deal_stats -- --deals 100000
// 5 cards deals:
// High Card:       50135
// One Pair:        42237
// Two Pair:        4753
// Three of a Kind: 2114
// Straight:        391
// Flush:           197
// Full House:      146
// Four of a Kind:  25
// Straight Flush:  2
// ...
// ```
use clap::Parser;
use log::info;
use std::time::Instant;

use showdown_eval::{Deck, Hand, HandCategory};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of hands to deal for each hand size.
    #[clap(long, short, default_value_t = 100_000)]
    deals: u32,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    tally(5, cli.deals);
    println!();
    tally(7, cli.deals);
}

/// Deals and evaluates random hands of the given size counting categories.
fn tally(size: usize, deals: u32) {
    let mut rng = rand::rng();
    let mut counts = [0u32; 9];

    let now = Instant::now();
    for _ in 0..deals {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let cards = (0..size).map(|_| deck.deal()).collect::<Vec<_>>();

        let mut hand = Hand::new(cards).expect("a valid hand size");
        counts[hand.evaluate().ordinal() as usize - 1] += 1;
    }

    info!(
        "dealt {deals} {size} cards hands in {:.3}s",
        now.elapsed().as_secs_f64()
    );

    println!("{size} cards deals:");
    for category in HandCategory::categories() {
        let count = counts[category.ordinal() as usize - 1];
        println!("{:<16} {count}", format!("{category}:"));
    }
}
