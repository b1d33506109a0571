//! Cube game records: `Game <id>: <draw>; <draw>; ...`, where each draw is a
//! comma-separated list of `<count> <color>`.

use aoc_model::{CubeColor, CubeSet, Game};
use tracing::debug;

use crate::error::{IngestError, Result};

const GAME_PREFIX: &str = "Game ";

/// Parses every non-blank line into a [`Game`].
pub fn parse_games(text: &str) -> Result<Vec<Game>> {
    let games = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_game(index + 1, line.trim()))
        .collect::<Result<Vec<_>>>()?;
    if games.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    debug!(games = games.len(), "games parsed");
    Ok(games)
}

fn parse_game(line: usize, text: &str) -> Result<Game> {
    let malformed = || IngestError::Malformed {
        line,
        expected: "'Game <id>: <draws>'",
        found: text.to_string(),
    };
    let (label, draws) = text.split_once(':').ok_or_else(malformed)?;
    let id = label.strip_prefix(GAME_PREFIX).ok_or_else(malformed)?.trim();
    let id = id.parse::<u32>().map_err(|_| IngestError::InvalidNumber {
        line,
        value: id.to_string(),
    })?;
    let draws = draws
        .split(';')
        .map(|draw| parse_draw(line, draw))
        .collect::<Result<Vec<_>>>()?;
    Ok(Game { id, draws })
}

fn parse_draw(line: usize, text: &str) -> Result<CubeSet> {
    let mut draw = CubeSet::default();
    for entry in text.split(',') {
        let mut fields = entry.split_whitespace();
        let (Some(count), Some(color), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(IngestError::Malformed {
                line,
                expected: "'<count> <color>'",
                found: entry.trim().to_string(),
            });
        };
        let count = count.parse::<u32>().map_err(|_| IngestError::InvalidNumber {
            line,
            value: count.to_string(),
        })?;
        let color = color
            .parse::<CubeColor>()
            .map_err(|source| IngestError::Model { line, source })?;
        draw.add(color, count);
    }
    Ok(draw)
}
