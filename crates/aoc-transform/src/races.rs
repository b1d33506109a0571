//! Boat race button timing.
//!
//! The distance `t * (limit - t)` rises until `limit / 2` and is symmetric
//! around it, so the winning hold times form one contiguous run centered on
//! the midpoint. The shortest winning hold is found by binary search and the
//! longest mirrors it.

use aoc_model::Race;
use tracing::debug;

/// Shortest hold that beats the record, or `None` when no hold does.
pub fn min_waiting_time(race: &Race) -> Option<u64> {
    let peak = race.time_limit / 2;
    if !race.beats_record(peak) {
        return None;
    }
    // `low` never wins and `high` always does.
    let (mut low, mut high) = (0, peak);
    while high - low > 1 {
        let middle = low + (high - low) / 2;
        if race.beats_record(middle) {
            high = middle;
        } else {
            low = middle;
        }
    }
    Some(high)
}

/// Longest hold that beats the record, or `None` when no hold does.
pub fn max_waiting_time(race: &Race) -> Option<u64> {
    min_waiting_time(race).map(|min| race.time_limit - min)
}

/// Number of whole-millisecond holds that beat the record.
pub fn ways_to_win(race: &Race) -> u64 {
    min_waiting_time(race).map_or(0, |min| race.time_limit - min - min + 1)
}

/// Product of the ways to win each race.
pub fn product_of_ways(races: &[Race]) -> u64 {
    let answer = races
        .iter()
        .map(ways_to_win)
        .fold(1u64, u64::saturating_mul);
    debug!(races = races.len(), answer, "races counted");
    answer
}
