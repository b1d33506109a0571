//! Scratchcards: a set of winning numbers and the numbers on the card.

use std::collections::BTreeSet;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScratchCard {
    pub id: u32,
    pub winning: BTreeSet<u32>,
    pub numbers: Vec<u32>,
}

impl ScratchCard {
    /// How many of the card's numbers are winning numbers.
    pub fn matches(&self) -> usize {
        self.numbers
            .iter()
            .filter(|number| self.winning.contains(number))
            .count()
    }

    /// One point for the first match, doubled for each match after it.
    pub fn points(&self) -> u64 {
        match self.matches() {
            0 => 0,
            matches => {
                let doublings = u32::try_from(matches - 1).unwrap_or(u32::MAX);
                2u64.saturating_pow(doublings)
            }
        }
    }
}
