//! Race sheets: a `Time:` line and a `Distance:` line.
//!
//! ```text
//! Time:      7  15   30
//! Distance:  9  40  200
//! ```
//!
//! In [`PuzzlePart::One`] each column is a race. In [`PuzzlePart::Two`] the
//! spaces are ignored and each line holds one number, giving a single race.

use aoc_model::{PuzzlePart, Race};
use tracing::debug;

use crate::error::{IngestError, Result};

const TIME_LABEL: &str = "Time:";
const DISTANCE_LABEL: &str = "Distance:";

/// Parses the race sheet for the given part.
pub fn parse_races(text: &str, part: PuzzlePart) -> Result<Vec<Race>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());
    let (time_line, times) = lines.next().ok_or(IngestError::EmptyInput)?;
    let (distance_line, distances) = lines.next().ok_or(IngestError::Malformed {
        line: time_line + 1,
        expected: "a 'Distance:' line",
        found: String::new(),
    })?;
    if let Some((line, extra)) = lines.next() {
        return Err(IngestError::Malformed {
            line,
            expected: "end of input",
            found: extra.to_string(),
        });
    }

    let times = parse_row(time_line, times, TIME_LABEL, part)?;
    let distances = parse_row(distance_line, distances, DISTANCE_LABEL, part)?;
    if times.len() != distances.len() {
        return Err(IngestError::RaceCountMismatch {
            times: times.len(),
            distances: distances.len(),
        });
    }
    if times.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let races: Vec<Race> = times
        .into_iter()
        .zip(distances)
        .map(|(time_limit, record_distance)| Race::new(time_limit, record_distance))
        .collect();
    debug!(?part, races = races.len(), "races parsed");
    Ok(races)
}

fn parse_row(line: usize, text: &str, label: &'static str, part: PuzzlePart) -> Result<Vec<u64>> {
    let values = text
        .strip_prefix(label)
        .ok_or_else(|| IngestError::Malformed {
            line,
            expected: label,
            found: text.to_string(),
        })?;
    let parse = |field: &str| {
        field.parse::<u64>().map_err(|_| IngestError::InvalidNumber {
            line,
            value: field.to_string(),
        })
    };
    match part {
        PuzzlePart::One => values.split_whitespace().map(parse).collect(),
        PuzzlePart::Two => {
            let joined: String = values.split_whitespace().collect();
            if joined.is_empty() {
                Ok(Vec::new())
            } else {
                Ok(vec![parse(&joined)?])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "Time:      7  15   30\nDistance:  9  40  200";

    #[test]
    fn one_race_per_column() {
        assert_eq!(
            parse_races(SHEET, PuzzlePart::One).unwrap(),
            vec![Race::new(7, 9), Race::new(15, 40), Race::new(30, 200)]
        );
    }

    #[test]
    fn part_two_joins_digits() {
        assert_eq!(
            parse_races(SHEET, PuzzlePart::Two).unwrap(),
            vec![Race::new(71530, 940_200)]
        );
    }

    #[test]
    fn column_counts_must_match() {
        assert!(matches!(
            parse_races("Time: 7 15\nDistance: 9", PuzzlePart::One),
            Err(IngestError::RaceCountMismatch {
                times: 2,
                distances: 1
            })
        ));
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(matches!(
            parse_races("Time: 7", PuzzlePart::One),
            Err(IngestError::Malformed { line: 2, .. })
        ));
        assert!(matches!(
            parse_races("Distance: 9\nTime: 7", PuzzlePart::One),
            Err(IngestError::Malformed { line: 1, .. })
        ));
        assert!(matches!(
            parse_races("Time: 7\nDistance: 9\nTime: 8", PuzzlePart::One),
            Err(IngestError::Malformed { line: 3, .. })
        ));
        assert!(matches!(
            parse_races("Time: 7 x\nDistance: 9 1", PuzzlePart::One),
            Err(IngestError::InvalidNumber { line: 1, ref value }) if value == "x"
        ));
        assert!(matches!(
            parse_races("Time:\nDistance:", PuzzlePart::Two),
            Err(IngestError::EmptyInput)
        ));
        assert!(matches!(parse_races("", PuzzlePart::One), Err(IngestError::EmptyInput)));
    }
}
