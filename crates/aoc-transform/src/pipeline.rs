//! Running a chain of stages and reducing its output.

use std::time::Instant;

use aoc_model::{Interval, Stage};
use tracing::{debug, info, info_span};

use crate::error::{Result, TransformError};
use crate::stage::apply_stage;

/// Threads `initial` through every stage in order and returns the intervals
/// produced by the last one.
pub fn run_pipeline(initial: &[Interval], stages: &[Stage]) -> Vec<Interval> {
    let span = info_span!("pipeline", stages = stages.len(), seeds = initial.len());
    let _guard = span.enter();
    let start = Instant::now();

    let mut current = initial.to_vec();
    for stage in stages {
        let next = apply_stage(&current, stage.rules());
        debug!(
            stage = %stage.name(),
            rules = stage.rules().len(),
            inputs = current.len(),
            outputs = next.len(),
            "stage complete"
        );
        current = next;
    }

    info!(
        intervals = current.len(),
        duration_us = start.elapsed().as_micros(),
        "pipeline complete"
    );
    current
}

/// Returns the smallest start among the non-empty intervals.
///
/// Zero-length intervals hold no values and are skipped.
///
/// # Errors
///
/// Returns [`TransformError::EmptyIntervals`] when there is nothing to pick.
pub fn minimum_start(intervals: &[Interval]) -> Result<i64> {
    intervals
        .iter()
        .filter(|interval| !interval.is_empty())
        .map(Interval::start)
        .min()
        .ok_or(TransformError::EmptyIntervals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_model::TransformRule;

    #[test]
    fn no_stages_returns_initial() {
        let initial = [Interval::new(3, 4)];
        assert_eq!(run_pipeline(&initial, &[]), initial.to_vec());
    }

    #[test]
    fn stages_are_chained() {
        let stages = [
            Stage::new("a", vec![TransformRule::new(Interval::new(0, 10), 10)]),
            Stage::new("b", vec![TransformRule::new(Interval::new(10, 5), -8)]),
        ];
        // [0,10) -> [10,20) -> [2,7) + [15,20)
        let out = run_pipeline(&[Interval::new(0, 10)], &stages);
        assert_eq!(out, vec![Interval::new(2, 5), Interval::new(15, 5)]);
        assert_eq!(minimum_start(&out), Ok(2));
    }

    #[test]
    fn minimum_of_empty_list_is_an_error() {
        assert_eq!(minimum_start(&[]), Err(TransformError::EmptyIntervals));
        assert_eq!(
            minimum_start(&[Interval::new(0, 0)]),
            Err(TransformError::EmptyIntervals)
        );
    }

    #[test]
    fn minimum_ignores_zero_length() {
        let intervals = [Interval::new(9, 1), Interval::new(1, 0), Interval::new(4, 3)];
        assert_eq!(minimum_start(&intervals), Ok(4));
    }
}
