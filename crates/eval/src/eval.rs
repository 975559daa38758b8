// Copyright (C) 2025 The Showdown Authors
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! Evaluates a hand into one of the nine standard Poker categories, from
//! high card up to straight flush, together with the kicker card that
//! breaks ties within a category and, for a full house, the face values of
//! its triple and pair.
//!
//! A five cards hand is classified directly from its face multiplicities;
//! a seven cards hand goes through its twenty-one five cards sub-hands and
//! keeps the strongest category.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use showdown_cards::{Card, Face, ParseCardError};

use crate::combos;

/// The standard Poker hand categories in ascending strength order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No two faces alike, no straight, no flush.
    HighCard = 1,
    /// Two cards of one face.
    OnePair,
    /// Two cards of one face and two of another.
    TwoPair,
    /// Three cards of one face.
    ThreeOfAKind,
    /// Five consecutive faces, the Ace playing low or high.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one face and two of another.
    FullHouse,
    /// Four cards of one face.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
}

impl HandCategory {
    /// Returns this category's strength, 1 for a high card through 9 for a
    /// straight flush.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns all categories in ascending strength order.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };

        write!(f, "{label}")
    }
}

/// Errors from building a hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// The number of cards is not one of the two supported sizes.
    #[error("invalid hand size {0}, a hand has exactly 5 or 7 cards")]
    InvalidHandSize(usize),
    /// A card code failed to parse.
    #[error(transparent)]
    Card(#[from] ParseCardError),
}

/// A Poker hand of five or seven cards.
///
/// A hand owns its cards sorted by ascending [value](Card::value), with the
/// Ace low, and computes its category on demand:
///
/// ```
/// # use showdown_eval::{Hand, HandCategory};
/// let mut hand = Hand::try_from("AD 9C AH 9H 9S").unwrap();
/// assert_eq!(hand.evaluate(), HandCategory::FullHouse);
/// assert_eq!(hand.full_house_top(), Some(9));
/// assert_eq!(hand.full_house_bottom(), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    eval: Option<Evaluation>,
}

impl Hand {
    /// Creates a hand from exactly five or seven cards.
    pub fn new(mut cards: Vec<Card>) -> Result<Self, HandError> {
        if !matches!(cards.len(), 5 | 7) {
            return Err(HandError::InvalidHandSize(cards.len()));
        }

        cards.sort_by_key(Card::value);
        Ok(Self { cards, eval: None })
    }

    /// The hand cards in ascending value order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Evaluates the hand and returns its category.
    ///
    /// A seven cards hand is scored through all its twenty-one five cards
    /// sub-hands, keeping the strongest category; among sub-hands tied at
    /// the best category the last one generated wins, and its kicker and
    /// full house values are the ones reported. Each call recomputes the
    /// results, overwriting the previous ones.
    pub fn evaluate(&mut self) -> HandCategory {
        let eval = if self.cards.len() == 5 {
            evaluate_five(&self.cards)
        } else {
            evaluate_seven(&self.cards)
        };

        self.eval = Some(eval);
        eval.category
    }

    /// The category computed by the last [evaluate](Hand::evaluate) call,
    /// or `None` for a hand not yet evaluated.
    pub fn category(&self) -> Option<HandCategory> {
        self.eval.map(|e| e.category)
    }

    /// The tie breaking card for the evaluated category.
    ///
    /// Returns `None` for a hand not yet evaluated and for a full house,
    /// whose rank is fully described by its [top](Hand::full_house_top) and
    /// [bottom](Hand::full_house_bottom) values.
    pub fn kicker(&self) -> Option<Card> {
        self.eval.and_then(|e| e.kicker)
    }

    /// The face value of the triple in an evaluated full house, `None` for
    /// every other category.
    pub fn full_house_top(&self) -> Option<u8> {
        self.eval.and_then(|e| e.full_house).map(|(top, _)| top)
    }

    /// The face value of the pair in an evaluated full house, `None` for
    /// every other category.
    pub fn full_house_bottom(&self) -> Option<u8> {
        self.eval.and_then(|e| e.full_house).map(|(_, bottom)| bottom)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards = self.cards.iter().map(Card::to_string).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}

impl TryFrom<&str> for Hand {
    type Error = HandError;

    /// Parses a hand from whitespace separated card codes, as in
    /// `"2D 4C 3S AC 5S"`.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = s
            .split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cards)
    }
}

/// The outcome of a five cards evaluation.
#[derive(Debug, Clone, Copy)]
struct Evaluation {
    category: HandCategory,
    kicker: Option<Card>,
    full_house: Option<(u8, u8)>,
}

/// Evaluates five cards sorted by ascending value.
///
/// Branches on the number of distinct faces: five distinct faces can only
/// make a high card, straight, flush, or straight flush; four make one
/// pair; three make two pair or three of a kind; two make a full house or
/// four of a kind.
fn evaluate_five(cards: &[Card]) -> Evaluation {
    debug_assert!(cards.len() == 5);
    debug_assert!(cards.windows(2).all(|w| w[0].value() <= w[1].value()));

    let mut counts = [0u8; 13];
    for card in cards {
        counts[card.face().index()] += 1;
    }
    let distinct = counts.iter().filter(|&&n| n > 0).count();

    // Cards on faces that appear exactly once, in ascending value order,
    // are the tie breaker candidates for every category.
    let kickers = cards
        .iter()
        .copied()
        .filter(|c| counts[c.face().index()] == 1)
        .collect::<Vec<_>>();

    let mut full_house = None;
    let category = match distinct {
        5 => match (is_straight(cards), is_flush(cards)) {
            (true, true) => HandCategory::StraightFlush,
            (true, false) => HandCategory::Straight,
            (false, true) => HandCategory::Flush,
            (false, false) => HandCategory::HighCard,
        },
        4 => HandCategory::OnePair,
        3 if counts.contains(&3) => HandCategory::ThreeOfAKind,
        3 => HandCategory::TwoPair,
        2 => match counts.iter().position(|&n| n == 3) {
            Some(top) => {
                let bottom = counts
                    .iter()
                    .position(|&n| n == 2)
                    .expect("a pair under the triple");
                full_house = Some((top as u8 + 1, bottom as u8 + 1));
                HandCategory::FullHouse
            }
            None => HandCategory::FourOfAKind,
        },
        _ => unreachable!("a five cards hand has two to five distinct faces"),
    };

    Evaluation {
        category,
        kicker: find_kicker(&kickers, category),
        full_house,
    }
}

/// Evaluates the best five cards sub-hand of a seven cards hand.
fn evaluate_seven(cards: &[Card]) -> Evaluation {
    let mut best: Option<Evaluation> = None;

    for combo in combos::combinations(cards, 5) {
        let eval = evaluate_five(&combo);

        // Replace on ties so the last generated sub-hand wins; only the
        // category strength takes part in choosing among sub-hands.
        if best.is_none_or(|b| eval.category >= b.category) {
            best = Some(eval);
        }
    }

    best.expect("a seven cards hand has twenty-one sub-hands")
}

/// Checks if five cards sorted by ascending value form a straight.
fn is_straight(cards: &[Card]) -> bool {
    let first = cards[0].value();
    let last = cards[4].value();

    // The Ace sorts first and the King last.
    let has_ace = cards[0].face() == Face::Ace;
    let has_king = cards[4].face() == Face::King;

    if last - first != 4 && !(has_ace && has_king) {
        return false;
    }

    // With an Ace the run is checked above it, so in a broadway hand the
    // Ace plays high; without one every consecutive pair is checked.
    let run = if has_ace { &cards[1..] } else { cards };
    run.windows(2).all(|w| w[1].value() - w[0].value() == 1)
}

/// Checks if all cards share one suit.
fn is_flush(cards: &[Card]) -> bool {
    cards.iter().all(|c| c.suit() == cards[0].suit())
}

/// Picks the tie breaking card from an ascending pool of singleton cards.
///
/// The Ace beats every other kicker; it plays low only in a wheel
/// straight, where the Five is the top card. An ace high straight also
/// holds a King, and a wheel straight flush keeps its Ace kicker.
fn find_kicker(pool: &[Card], category: HandCategory) -> Option<Card> {
    let ace = pool.iter().copied().find(|c| c.face() == Face::Ace);
    let has_king = pool.iter().any(|c| c.face() == Face::King);

    let ace_low = category == HandCategory::Straight && ace.is_some() && !has_king;
    match ace {
        Some(ace) if !ace_low => Some(ace),
        _ => pool
            .iter()
            .copied()
            .filter(|c| c.face() != Face::Ace)
            .next_back(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::Deck;

    #[test]
    fn category_order() {
        use HandCategory::*;

        let categories = HandCategory::categories().collect::<Vec<_>>();
        assert_eq!(
            categories,
            [
                HighCard,
                OnePair,
                TwoPair,
                ThreeOfAKind,
                Straight,
                Flush,
                FullHouse,
                FourOfAKind,
                StraightFlush,
            ]
        );

        for pair in categories.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].ordinal() < pair[1].ordinal());
        }

        assert_eq!(HighCard.ordinal(), 1);
        assert_eq!(StraightFlush.ordinal(), 9);
    }

    #[test]
    fn high_card() {
        let mut hand = Hand::try_from("AC 3H 8C 6C 4C").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::HighCard);
        assert_eq!(hand.kicker().unwrap().face(), Face::Ace);

        // Without an Ace the kicker is the highest card.
        let mut hand = Hand::try_from("2C 3H 8C 6C 4S").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::HighCard);
        assert_eq!(hand.kicker().unwrap().face(), Face::Eight);
    }

    #[test]
    fn one_pair() {
        let mut hand = Hand::try_from("2C 4C 4H 9C JC").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::OnePair);
        assert_eq!(hand.kicker().unwrap().face(), Face::Jack);

        // An Ace in the singletons beats the Jack.
        let mut hand = Hand::try_from("AC 4C 4H 9C JC").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::OnePair);
        assert_eq!(hand.kicker().unwrap().face(), Face::Ace);

        // Paired Aces are not kicker candidates.
        let mut hand = Hand::try_from("AC AH 4H 9C JC").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::OnePair);
        assert_eq!(hand.kicker().unwrap().face(), Face::Jack);

        // The pair may outrank every singleton.
        let mut hand = Hand::try_from("KC KH 4H 9C JC").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::OnePair);
        assert_eq!(hand.kicker().unwrap().face(), Face::Jack);
    }

    #[test]
    fn two_pair() {
        // The singleton is the kicker even as the lowest card.
        let mut hand = Hand::try_from("4C 4H 9C 9H 2S").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::TwoPair);
        assert_eq!(hand.kicker().unwrap().face(), Face::Two);

        let mut hand = Hand::try_from("4C 4H 9C 9H AS").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::TwoPair);
        assert_eq!(hand.kicker().unwrap().face(), Face::Ace);
    }

    #[test]
    fn three_of_a_kind() {
        let mut hand = Hand::try_from("9C 9H 9S 4C KH").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::ThreeOfAKind);
        assert_eq!(hand.kicker().unwrap().face(), Face::King);

        let mut hand = Hand::try_from("9C 9H 9S 4C AH").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::ThreeOfAKind);
        assert_eq!(hand.kicker().unwrap().face(), Face::Ace);

        let mut hand = Hand::try_from("9C 9H 9S 2C 4H").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::ThreeOfAKind);
        assert_eq!(hand.kicker().unwrap().face(), Face::Four);
    }

    #[test]
    fn straight_wheel() {
        let mut hand = Hand::try_from("2D 4C 3S AC 5S").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::Straight);
        // The Ace plays low in the wheel, the Five is the top card.
        assert_eq!(hand.kicker().unwrap().face(), Face::Five);
    }

    #[test]
    fn straight_broadway() {
        let mut hand = Hand::try_from("JD QC TC AS KD").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::Straight);
        assert_eq!(hand.kicker().unwrap().face(), Face::Ace);
    }

    #[test]
    fn straight_middle() {
        let mut hand = Hand::try_from("6C 3H 4S 5D 7C").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::Straight);
        assert_eq!(hand.kicker().unwrap().face(), Face::Seven);
    }

    #[test]
    fn ace_and_king_alone_are_not_a_straight() {
        let mut hand = Hand::try_from("AC 2H 3S 4D KC").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::HighCard);
        assert_eq!(hand.kicker().unwrap().face(), Face::Ace);
    }

    #[test]
    fn flush() {
        let mut hand = Hand::try_from("2H 5H 9H JH KH").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::Flush);
        assert_eq!(hand.kicker().unwrap().face(), Face::King);

        let mut hand = Hand::try_from("2H 5H 9H JH AH").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::Flush);
        assert_eq!(hand.kicker().unwrap().face(), Face::Ace);
    }

    #[test]
    fn full_house() {
        let mut hand = Hand::try_from("AD 9C AH 9H 9S").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::FullHouse);
        assert_eq!(hand.full_house_top(), Some(9));
        assert_eq!(hand.full_house_bottom(), Some(1));
        // A full house has no kicker, the top and bottom values rank it.
        assert_eq!(hand.kicker(), None);
    }

    #[test]
    fn full_house_values_only_for_full_houses() {
        let mut hand = Hand::try_from("AC 3H 8C 6C 4C").unwrap();
        hand.evaluate();
        assert_eq!(hand.full_house_top(), None);
        assert_eq!(hand.full_house_bottom(), None);

        let mut hand = Hand::try_from("9C 9H 9S 9D KH").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::FourOfAKind);
        assert_eq!(hand.full_house_top(), None);
        assert_eq!(hand.full_house_bottom(), None);
    }

    #[test]
    fn four_of_a_kind() {
        let mut hand = Hand::try_from("9C 9H 9S 9D KH").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::FourOfAKind);
        assert_eq!(hand.kicker().unwrap().face(), Face::King);

        // The lone singleton is the kicker even as the lowest card.
        let mut hand = Hand::try_from("9C 9H 9S 9D 2H").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::FourOfAKind);
        assert_eq!(hand.kicker().unwrap().face(), Face::Two);
    }

    #[test]
    fn straight_flush() {
        let mut hand = Hand::try_from("5H 6H 7H 8H 9H").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::StraightFlush);
        assert_eq!(hand.kicker().unwrap().face(), Face::Nine);

        // The steel wheel keeps the Ace kicker, the ace low rule only
        // applies to plain straights.
        let mut hand = Hand::try_from("AH 2H 3H 4H 5H").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::StraightFlush);
        assert_eq!(hand.kicker().unwrap().face(), Face::Ace);
    }

    #[test]
    fn seven_cards_straight_flush() {
        let mut hand = Hand::try_from("9D TD JD QD KD 9S QH").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::StraightFlush);
        assert_eq!(hand.kicker().unwrap().to_string(), "KD");
    }

    #[test]
    fn seven_cards_full_house() {
        let mut hand = Hand::try_from("AD AH 9C 9H 9S 3D 5C").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::FullHouse);
        assert_eq!(hand.full_house_top(), Some(9));
        assert_eq!(hand.full_house_bottom(), Some(1));
        assert_eq!(hand.kicker(), None);
    }

    #[test]
    fn seven_cards_board_straight() {
        // The broadway run wins, the pocket pair never improves on it.
        let mut hand = Hand::try_from("2S 2H TC JD QH KS AC").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::Straight);
        assert_eq!(hand.kicker().unwrap().face(), Face::Ace);
    }

    #[test]
    fn seven_cards_flush_beats_straight() {
        let mut hand = Hand::try_from("4H 6H 7H 8H 9H TS 2D").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::Flush);
        assert_eq!(hand.kicker().unwrap().face(), Face::Nine);
    }

    #[test]
    fn seven_cards_ties_keep_last_sub_hand() {
        // Two pair is the best category here; the tied sub-hands differ
        // only in their singleton and the Queen one is generated last.
        let mut hand = Hand::try_from("AS AH KD KC QS JH 9D").unwrap();
        assert_eq!(hand.evaluate(), HandCategory::TwoPair);
        assert_eq!(hand.kicker().unwrap().face(), Face::Queen);
    }

    #[test]
    fn rejects_invalid_hand_sizes() {
        for size in [0, 1, 4, 6, 8] {
            let cards = Deck::default().into_iter().take(size).collect::<Vec<_>>();
            assert!(matches!(
                Hand::new(cards),
                Err(HandError::InvalidHandSize(n)) if n == size
            ));
        }

        let cards = Deck::default().into_iter().take(5).collect::<Vec<_>>();
        assert!(Hand::new(cards).is_ok());
    }

    #[test]
    fn hand_parse_errors() {
        assert!(matches!(
            Hand::try_from("AC 3H XX 6C 4C"),
            Err(HandError::Card(_))
        ));
        assert!(matches!(
            Hand::try_from("AC 3H"),
            Err(HandError::InvalidHandSize(2))
        ));
    }

    #[test]
    fn evaluate_overwrites_previous_results() {
        let mut hand = Hand::try_from("AD 9C AH 9H 9S").unwrap();
        assert_eq!(hand.category(), None);
        assert_eq!(hand.kicker(), None);

        assert_eq!(hand.evaluate(), HandCategory::FullHouse);
        assert_eq!(hand.category(), Some(HandCategory::FullHouse));

        // Re-evaluating computes the same results.
        assert_eq!(hand.evaluate(), HandCategory::FullHouse);
        assert_eq!(hand.full_house_top(), Some(9));
    }

    #[test]
    fn hand_cards_sorted_and_displayed() {
        let hand = Hand::try_from("KD 2H AC 9S 5C").unwrap();
        assert_eq!(hand.to_string(), "AC 2H 5C 9S KD");

        let values = hand.cards().iter().map(Card::value).collect::<Vec<_>>();
        assert_eq!(values, [1, 2, 5, 9, 13]);
    }

    #[test]
    fn random_seven_cards_invariants() {
        let mut rng = rand::rng();

        for _ in 0..1_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let cards = (0..7).map(|_| deck.deal()).collect::<Vec<_>>();
            let mut hand = Hand::new(cards).unwrap();

            let category = hand.evaluate();
            assert_eq!(hand.category(), Some(category));

            let full_house = category == HandCategory::FullHouse;
            assert_eq!(hand.full_house_top().is_some(), full_house);
            assert_eq!(hand.full_house_bottom().is_some(), full_house);
            assert_eq!(hand.kicker().is_none(), full_house);
        }
    }

    #[test]
    fn all_five_cards_hands_frequencies() {
        let deck = Deck::default().into_iter().collect::<Vec<_>>();
        let mut counts = [0u32; 9];

        for combo in combos::combinations(&deck, 5) {
            let mut hand = Hand::new(combo).unwrap();
            counts[hand.evaluate().ordinal() as usize - 1] += 1;
        }

        // The classic five cards hand frequencies.
        assert_eq!(
            counts,
            [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 40]
        );
        assert_eq!(counts.iter().sum::<u32>(), 2_598_960);
    }
}
