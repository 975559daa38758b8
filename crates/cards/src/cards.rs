// Copyright (C) 2025 The Showdown Authors
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Card face.
///
/// The discriminants are the face values used for ranking, with the Ace
/// low: `Ace = 1` up to `King = 13`. The derived order follows the values,
/// so sorting cards by face puts Aces first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Ace
    Ace = 1,
    /// Two
    Two,
    /// Three
    Three,
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
}

impl Face {
    /// Returns the face value, 1 for the Ace through 13 for the King.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns this face's slot in a 13-entry table, 0 for the Ace
    /// through 12 for the King.
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Returns all faces in ascending value order.
    pub fn faces() -> impl DoubleEndedIterator<Item = Face> {
        use Face::*;
        [
            Ace, Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King,
        ]
        .into_iter()
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face = match self {
            Face::Ace => 'A',
            Face::Two => '2',
            Face::Three => '3',
            Face::Four => '4',
            Face::Five => '5',
            Face::Six => '6',
            Face::Seven => '7',
            Face::Eight => '8',
            Face::Nine => '9',
            Face::Ten => 'T',
            Face::Jack => 'J',
            Face::Queen => 'Q',
            Face::King => 'K',
        };

        write!(f, "{face}")
    }
}

impl TryFrom<char> for Face {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let face = match c.to_ascii_uppercase() {
            'A' => Face::Ace,
            '2' => Face::Two,
            '3' => Face::Three,
            '4' => Face::Four,
            '5' => Face::Five,
            '6' => Face::Six,
            '7' => Face::Seven,
            '8' => Face::Eight,
            '9' => Face::Nine,
            'T' => Face::Ten,
            'J' => Face::Jack,
            'Q' => Face::Queen,
            'K' => Face::King,
            _ => return Err(ParseCardError::Face(c)),
        };

        Ok(face)
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let suit = match c.to_ascii_uppercase() {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(ParseCardError::Suit(c)),
        };

        Ok(suit)
    }
}

/// A Poker card.
///
/// A card is an immutable suit and face pair ordered by its face
/// [value](Card::value), and prints as a two character code:
///
/// ```
/// # use showdown_cards::{Card, Face, Suit};
/// let card = Card::new(Suit::Diamonds, Face::Ten);
/// assert_eq!(card.to_string(), "TD");
/// assert_eq!(Card::try_from("TD").unwrap(), card);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    face: Face,
}

impl Card {
    /// Creates a card given a suit and a face.
    pub const fn new(suit: Suit, face: Face) -> Card {
        Self { suit, face }
    }

    /// Returns the card suit.
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card face.
    pub const fn face(&self) -> Face {
        self.face
    }

    /// Returns the card ranking value, the value of its face.
    pub const fn value(&self) -> u8 {
        self.face.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.face, self.suit)
    }
}

impl TryFrom<&str> for Card {
    type Error = ParseCardError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(face), Some(suit), None) => {
                Ok(Card::new(Suit::try_from(suit)?, Face::try_from(face)?))
            }
            _ => Err(ParseCardError::Length(s.to_string())),
        }
    }
}

/// Errors from parsing cards text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The string is not a face character followed by a suit character.
    #[error("invalid card {0:?}, expected a face and a suit as in \"AS\" or \"TD\"")]
    Length(String),
    /// Unknown face character.
    #[error("invalid face character {0:?}")]
    Face(char),
    /// Unknown suit character.
    #[error("invalid suit character {0:?}")]
    Suit(char),
}

/// A cards Deck.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Card {
        self.cards.pop().unwrap()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Face::faces().map(move |f| Card::new(s, f)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
