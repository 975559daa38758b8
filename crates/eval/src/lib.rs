// Copyright (C) 2025 The Showdown Authors
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Classifies a 5 cards hand, or the best 5 cards out of a 7 cards hand,
//! into one of the nine standard Poker hand categories, together with the
//! kicker card that breaks ties within a category and, for a full house,
//! the face values of its triple and pair.
//!
//! To use the evaluator create a [Hand] and evaluate it:
//!
//! ```
//! # use showdown_eval::*;
//! let mut hand = Hand::try_from("2C 4C 4H 9C JC").unwrap();
//! assert_eq!(hand.evaluate(), HandCategory::OnePair);
//! assert_eq!(hand.kicker().unwrap().to_string(), "JC");
//! ```
//!
//! Seven cards hands go through all their five cards sub-hands and keep
//! the strongest:
//!
//! ```
//! # use showdown_eval::*;
//! let mut hand = Hand::try_from("9D TD JD QD KD 9S QH").unwrap();
//! assert_eq!(hand.evaluate(), HandCategory::StraightFlush);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod combos;
pub mod eval;
pub use eval::{Hand, HandCategory, HandError};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Face, ParseCardError, Suit};
