// Copyright (C) 2025 The Showdown Authors
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --example classify -- --cards "2C 4C 4H 9C JC"
// 2C 4C 4H 9C JC
// One Pair, kicker JC
// ```
use anyhow::Result;
use clap::Parser;

use showdown_eval::Hand;

#[derive(Debug, Parser)]
struct Cli {
    /// The hand to evaluate, five or seven cards as in "2C 4C 4H 9C JC".
    #[clap(long, short)]
    cards: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut hand = Hand::try_from(cli.cards.as_str())?;
    let category = hand.evaluate();

    println!("{hand}");
    if let (Some(top), Some(bottom)) = (hand.full_house_top(), hand.full_house_bottom()) {
        println!("{category}, {top} over {bottom}");
    } else if let Some(kicker) = hand.kicker() {
        println!("{category}, kicker {kicker}");
    } else {
        println!("{category}");
    }

    Ok(())
}
