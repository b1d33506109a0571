//! Camel-cards hand classification and ranking.

use std::cmp::Ordering;

use aoc_model::{Card, HAND_SIZE, Hand, HandType, RulesetMode};
use tracing::debug;

/// Number of distinct card values, indexed by [`Card::value`].
const VALUE_SLOTS: usize = 15;

/// Classifies a hand under the given rules.
///
/// Under [`RulesetMode::Jokers`] the wildcards join the largest group of
/// natural cards, which always yields the strongest reachable type.
pub fn classify(cards: &[Card; HAND_SIZE], mode: RulesetMode) -> HandType {
    let mut counts = [0u8; VALUE_SLOTS];
    let mut wild = 0u8;
    for card in cards {
        if card.is_wild(mode) {
            wild += 1;
        } else {
            counts[usize::from(card.value(mode))] += 1;
        }
    }
    counts.sort_unstable_by(|a, b| b.cmp(a));

    match (counts[0] + wild, counts[1]) {
        (5, _) => HandType::FiveOfAKind,
        (4, _) => HandType::FourOfAKind,
        (3, 2) => HandType::FullHouse,
        (3, _) => HandType::ThreeOfAKind,
        (2, 2) => HandType::TwoPair,
        (2, _) => HandType::OnePair,
        _ => HandType::HighCard,
    }
}

/// Orders hands by type, then card by card from the left.
pub fn compare_hands(a: &Hand, b: &Hand, mode: RulesetMode) -> Ordering {
    classify(a.cards(), mode)
        .cmp(&classify(b.cards(), mode))
        .then_with(|| {
            let left = a.cards().iter().map(|card| card.value(mode));
            let right = b.cards().iter().map(|card| card.value(mode));
            left.cmp(right)
        })
}

/// Sums `rank * bid` over all hands, weakest hand first with rank 1.
///
/// Hands that compare equal share a rank; the rank only advances when a hand
/// is strictly stronger than the one before it.
pub fn total_winnings(hands: &[Hand], mode: RulesetMode) -> u64 {
    let mut ordered: Vec<&Hand> = hands.iter().collect();
    ordered.sort_by(|a, b| compare_hands(a, b, mode));

    let mut rank = 0u64;
    let mut winnings = 0u64;
    let mut previous: Option<&Hand> = None;
    for hand in ordered {
        let shares_rank =
            previous.is_some_and(|prev| compare_hands(prev, hand, mode) == Ordering::Equal);
        if !shares_rank {
            rank += 1;
        }
        winnings += rank * hand.bid();
        previous = Some(hand);
    }

    debug!(hands = hands.len(), ?mode, ranks = rank, winnings, "hands ranked");
    winnings
}
