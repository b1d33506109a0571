//! Boat races.

use serde::Serialize;

/// A race lasts `time_limit` milliseconds. Holding the button for `t` of
/// them travels `t * (time_limit - t)` millimetres; the record to beat is
/// `record_distance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Race {
    pub time_limit: u64,
    pub record_distance: u64,
}

impl Race {
    pub const fn new(time_limit: u64, record_distance: u64) -> Self {
        Self {
            time_limit,
            record_distance,
        }
    }

    /// Distance travelled after holding the button for `hold` milliseconds.
    /// Zero when `hold` is past the time limit.
    pub fn distance(&self, hold: u64) -> u128 {
        let moving = self.time_limit.saturating_sub(hold);
        u128::from(hold) * u128::from(moving)
    }

    pub fn beats_record(&self, hold: u64) -> bool {
        self.distance(hold) > u128::from(self.record_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_peaks_in_the_middle() {
        let race = Race::new(7, 9);
        let distances: Vec<u128> = (0..=8).map(|hold| race.distance(hold)).collect();
        assert_eq!(distances, vec![0, 6, 10, 12, 12, 10, 6, 0, 0]);
        assert!(!race.beats_record(1));
        assert!(race.beats_record(2));
    }
}
