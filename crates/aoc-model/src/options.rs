//! Caller-selected modes.
//!
//! Each puzzle has two variants. The variant is passed explicitly to the
//! functions that depend on it rather than stored anywhere global.

use serde::{Deserialize, Serialize};

/// How the numbers on the `seeds:` line are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeedMode {
    /// Every number is one seed (a length-1 interval).
    #[default]
    Points,
    /// Numbers come in `(start, length)` pairs.
    Ranges,
}

/// Card rules for camel-cards ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RulesetMode {
    /// `J` is a jack, ranked between `T` and `Q`.
    #[default]
    Standard,
    /// `J` is a joker: the weakest card, and a wildcard when classifying.
    Jokers,
}

/// Which half of a puzzle to solve, for puzzles whose two parts share one
/// input shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PuzzlePart {
    #[default]
    One,
    Two,
}

impl PuzzlePart {
    pub fn from_part_two(part_two: bool) -> Self {
        if part_two { Self::Two } else { Self::One }
    }
}

impl SeedMode {
    pub fn from_part_two(part_two: bool) -> Self {
        if part_two { Self::Ranges } else { Self::Points }
    }
}

impl RulesetMode {
    pub fn from_part_two(part_two: bool) -> Self {
        if part_two {
            Self::Jokers
        } else {
            Self::Standard
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_two_selects_second_variant() {
        assert_eq!(SeedMode::from_part_two(false), SeedMode::Points);
        assert_eq!(SeedMode::from_part_two(true), SeedMode::Ranges);
        assert_eq!(RulesetMode::from_part_two(false), RulesetMode::Standard);
        assert_eq!(RulesetMode::from_part_two(true), RulesetMode::Jokers);
        assert_eq!(PuzzlePart::from_part_two(false), PuzzlePart::One);
        assert_eq!(PuzzlePart::from_part_two(true), PuzzlePart::Two);
    }

    #[test]
    fn modes_serialize_by_name() {
        let json = serde_json::to_string(&RulesetMode::Jokers).expect("serialize mode");
        assert_eq!(json, "\"Jokers\"");
        let mode: SeedMode = serde_json::from_str("\"Ranges\"").expect("deserialize mode");
        assert_eq!(mode, SeedMode::Ranges);
    }
}
