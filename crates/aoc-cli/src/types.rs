use serde::Serialize;

use aoc_model::{Interval, PuzzlePart, RulesetMode, SeedMode};

#[derive(Debug, Serialize)]
pub struct SeedsResult {
    pub mode: SeedMode,
    pub stages: usize,
    pub answer: i64,
    pub locations: Vec<Interval>,
}

#[derive(Debug, Serialize)]
pub struct CardsResult {
    pub mode: RulesetMode,
    pub hands: usize,
    pub answer: u64,
}

/// Result of a puzzle whose two parts share one input shape.
#[derive(Debug, Serialize)]
pub struct PuzzleResult {
    pub puzzle: &'static str,
    pub part: PuzzlePart,
    /// Input records the answer was computed from (lines, games, numbers, ...).
    pub records: usize,
    pub answer: u64,
}
