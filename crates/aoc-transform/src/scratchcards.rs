//! Scratchcard scoring.

use aoc_model::{PuzzlePart, ScratchCard};
use tracing::debug;

/// Part one: sum of every card's points.
pub fn total_points(cards: &[ScratchCard]) -> u64 {
    cards.iter().map(ScratchCard::points).sum()
}

/// Part two: a card with `n` matches wins one copy of each of the next `n`
/// cards, and every copy wins again. Returns the number of cards held at the
/// end, originals included. Copies never extend past the last card.
pub fn total_cards(cards: &[ScratchCard]) -> u64 {
    let mut copies = vec![1u64; cards.len()];
    for (index, card) in cards.iter().enumerate() {
        let held = copies[index];
        let won = (index + 1)..(index + 1 + card.matches()).min(cards.len());
        for count in &mut copies[won] {
            *count = count.saturating_add(held);
        }
    }
    copies.iter().sum()
}

/// Answer for either part.
pub fn scratchcards_answer(cards: &[ScratchCard], part: PuzzlePart) -> u64 {
    let answer = match part {
        PuzzlePart::One => total_points(cards),
        PuzzlePart::Two => total_cards(cards),
    };
    debug!(cards = cards.len(), ?part, answer, "scratchcards scored");
    answer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, winning: &[u32], numbers: &[u32]) -> ScratchCard {
        ScratchCard {
            id,
            winning: winning.iter().copied().collect(),
            numbers: numbers.to_vec(),
        }
    }

    #[test]
    fn copies_cascade() {
        let cards = vec![
            card(1, &[1, 2], &[1, 2]),
            card(2, &[1], &[1]),
            card(3, &[], &[5]),
        ];
        // 1 + 2 copies of card 2 + (1 + 1 + 2) copies of card 3
        assert_eq!(total_cards(&cards), 1 + 2 + 4);
        assert_eq!(total_points(&cards), 2 + 1);
    }

    #[test]
    fn copies_stop_at_last_card() {
        let cards = vec![card(1, &[1], &[1]), card(2, &[1, 2, 3], &[1, 2, 3])];
        assert_eq!(total_cards(&cards), 1 + 2);
        assert_eq!(scratchcards_answer(&cards, PuzzlePart::Two), 3);
    }

    #[test]
    fn no_cards() {
        assert_eq!(total_cards(&[]), 0);
        assert_eq!(total_points(&[]), 0);
    }
}
