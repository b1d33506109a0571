//! Camel-cards input: one `<cards> <bid>` pair per line.

use aoc_model::Hand;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Parses every non-blank line into a [`Hand`].
pub fn parse_hands(text: &str) -> Result<Vec<Hand>> {
    let hands = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_hand(index + 1, line.trim()))
        .collect::<Result<Vec<_>>>()?;
    if hands.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    debug!(hands = hands.len(), "hands parsed");
    Ok(hands)
}

fn parse_hand(line: usize, text: &str) -> Result<Hand> {
    let mut fields = text.split_whitespace();
    let (Some(cards), Some(bid), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(IngestError::Malformed {
            line,
            expected: "'<cards> <bid>'",
            found: text.to_string(),
        });
    };
    let bid = bid.parse::<u64>().map_err(|_| IngestError::InvalidNumber {
        line,
        value: bid.to_string(),
    })?;
    Hand::from_cards(cards, bid).map_err(|source| IngestError::Model { line, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_model::ModelError;

    #[test]
    fn parses_lines() {
        let hands = parse_hands("32T3K 765\nT55J5 684\n").unwrap();
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[0].to_string(), "32T3K");
        assert_eq!(hands[0].bid(), 765);
        assert_eq!(hands[1].bid(), 684);
    }

    #[test]
    fn reports_line_of_bad_card() {
        let err = parse_hands("32T3K 765\n\nT55X5 684").unwrap_err();
        assert!(matches!(
            err,
            IngestError::Model {
                line: 3,
                source: ModelError::InvalidCard('X')
            }
        ));
    }

    #[test]
    fn rejects_missing_or_bad_bid() {
        assert!(matches!(
            parse_hands("32T3K"),
            Err(IngestError::Malformed { line: 1, .. })
        ));
        assert!(matches!(
            parse_hands("32T3K -5"),
            Err(IngestError::InvalidNumber { line: 1, .. })
        ));
        assert!(matches!(
            parse_hands("32T3K 1 2"),
            Err(IngestError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(matches!(parse_hands(" \n"), Err(IngestError::EmptyInput)));
    }
}
