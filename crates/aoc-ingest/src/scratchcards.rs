//! Scratchcards: `Card <id>: <winning numbers> | <card numbers>`.

use aoc_model::ScratchCard;
use tracing::debug;

use crate::error::{IngestError, Result};

const CARD_PREFIX: &str = "Card";

/// Parses every non-blank line into a [`ScratchCard`].
pub fn parse_scratchcards(text: &str) -> Result<Vec<ScratchCard>> {
    let cards = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_scratchcard(index + 1, line.trim()))
        .collect::<Result<Vec<_>>>()?;
    if cards.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    debug!(cards = cards.len(), "scratchcards parsed");
    Ok(cards)
}

fn parse_scratchcard(line: usize, text: &str) -> Result<ScratchCard> {
    let malformed = || IngestError::Malformed {
        line,
        expected: "'Card <id>: <winning> | <numbers>'",
        found: text.to_string(),
    };
    let (label, body) = text.split_once(':').ok_or_else(malformed)?;
    let id = label.strip_prefix(CARD_PREFIX).ok_or_else(malformed)?.trim();
    let id = parse_number(line, id)?;
    let (winning, numbers) = body.split_once('|').ok_or_else(malformed)?;

    Ok(ScratchCard {
        id,
        winning: winning
            .split_whitespace()
            .map(|field| parse_number(line, field))
            .collect::<Result<_>>()?,
        numbers: numbers
            .split_whitespace()
            .map(|field| parse_number(line, field))
            .collect::<Result<_>>()?,
    })
}

fn parse_number(line: usize, field: &str) -> Result<u32> {
    field.parse::<u32>().map_err(|_| IngestError::InvalidNumber {
        line,
        value: field.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn parses_card_with_padding() {
        for text in [
            "Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53",
            "Card  1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53",
        ] {
            let cards = parse_scratchcards(text).unwrap();
            assert_eq!(cards[0].id, 1);
            assert_eq!(cards[0].numbers, vec![83, 86, 6, 31, 17, 9, 48, 53]);
            assert_eq!(
                cards[0].winning,
                BTreeSet::from([41, 48, 83, 86, 17])
            );
        }
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(matches!(
            parse_scratchcards("Card 1: 1 2 3"),
            Err(IngestError::Malformed { line: 1, .. })
        ));
        assert!(matches!(
            parse_scratchcards("Card 1: 1 | 2\nTicket 2: 1 | 2"),
            Err(IngestError::Malformed { line: 2, .. })
        ));
        assert!(matches!(
            parse_scratchcards("Card 1: 1 x | 2"),
            Err(IngestError::InvalidNumber { line: 1, ref value }) if value == "x"
        ));
        assert!(matches!(
            parse_scratchcards("Card: 1 | 2"),
            Err(IngestError::InvalidNumber { line: 1, .. })
        ));
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(matches!(
            parse_scratchcards("  \n"),
            Err(IngestError::EmptyInput)
        ));
    }
}
