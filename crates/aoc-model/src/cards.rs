//! Camel-cards hands.
//!
//! Card strength depends on the [`RulesetMode`], so `Card` and `Hand` carry no
//! ordering of their own. Ranking lives in `aoc_transform::ranking`, which
//! takes the mode as an argument.

use std::fmt;

use serde::Serialize;

use crate::error::{ModelError, Result};
use crate::options::RulesetMode;

/// Number of cards in every hand.
pub const HAND_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Card {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Card {
    pub fn as_char(self) -> char {
        match self {
            Card::Two => '2',
            Card::Three => '3',
            Card::Four => '4',
            Card::Five => '5',
            Card::Six => '6',
            Card::Seven => '7',
            Card::Eight => '8',
            Card::Nine => '9',
            Card::Ten => 'T',
            Card::Jack => 'J',
            Card::Queen => 'Q',
            Card::King => 'K',
            Card::Ace => 'A',
        }
    }

    /// Strength of the card under the given rules. Higher is stronger.
    pub fn value(self, mode: RulesetMode) -> u8 {
        match (self, mode) {
            (Card::Jack, RulesetMode::Jokers) => 1,
            (Card::Two, _) => 2,
            (Card::Three, _) => 3,
            (Card::Four, _) => 4,
            (Card::Five, _) => 5,
            (Card::Six, _) => 6,
            (Card::Seven, _) => 7,
            (Card::Eight, _) => 8,
            (Card::Nine, _) => 9,
            (Card::Ten, _) => 10,
            (Card::Jack, RulesetMode::Standard) => 11,
            (Card::Queen, _) => 12,
            (Card::King, _) => 13,
            (Card::Ace, _) => 14,
        }
    }

    /// Returns true if the card is a wildcard under the given rules.
    pub fn is_wild(self, mode: RulesetMode) -> bool {
        self == Card::Jack && mode == RulesetMode::Jokers
    }
}

impl TryFrom<char> for Card {
    type Error = ModelError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            '2' => Ok(Card::Two),
            '3' => Ok(Card::Three),
            '4' => Ok(Card::Four),
            '5' => Ok(Card::Five),
            '6' => Ok(Card::Six),
            '7' => Ok(Card::Seven),
            '8' => Ok(Card::Eight),
            '9' => Ok(Card::Nine),
            'T' => Ok(Card::Ten),
            'J' => Ok(Card::Jack),
            'Q' => Ok(Card::Queen),
            'K' => Ok(Card::King),
            'A' => Ok(Card::Ace),
            other => Err(ModelError::InvalidCard(other)),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Hand strength classes, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

/// Five cards and the amount bid on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    bid: u64,
}

impl Hand {
    /// Parses the card string of a hand, e.g. `"32T3K"`.
    pub fn from_cards(cards: &str, bid: u64) -> Result<Self> {
        let parsed = cards
            .chars()
            .map(Card::try_from)
            .collect::<Result<Vec<_>>>()?;
        let found = parsed.len();
        let cards: [Card; HAND_SIZE] =
            parsed.try_into().map_err(|_| ModelError::HandSize {
                expected: HAND_SIZE,
                found,
            })?;
        Ok(Self { cards, bid })
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn bid(&self) -> u64 {
        self.bid
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
