// Copyright (C) 2025 The Showdown Authors
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines the card types consumed by the hand evaluator:
//!
//! ```
//! # use showdown_cards::{Card, Face, Suit};
//! let ah = Card::new(Suit::Hearts, Face::Ace);
//! let kd = Card::try_from("KD").unwrap();
//! assert!(ah.value() < kd.value());
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let card = deck.deal();
//! assert_eq!(deck.count(), Deck::SIZE - 1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod cards;
pub use cards::{Card, Deck, Face, ParseCardError, Suit};
