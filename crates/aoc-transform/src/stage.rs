//! Applying an ordered table of rules to a batch of intervals.
//!
//! Rules are consulted in the order given. Each rule only sees the sub-ranges
//! that no earlier rule in the same stage has claimed, so when two source
//! ranges overlap the earlier rule wins.

use aoc_model::{Interval, TransformRule};
use tracing::trace;

use crate::transform::{TransformResult, apply_transform};

/// Maps every input interval through one stage.
///
/// Each value covered by some rule is shifted exactly once, by the first rule
/// whose source range contains it; values covered by no rule pass through.
/// Output order is: intervals claimed by the first rule, then by the second,
/// and so on, followed by the unclaimed intervals.
pub fn apply_stage(inputs: &[Interval], rules: &[TransformRule]) -> Vec<Interval> {
    let mut outputs = Vec::with_capacity(inputs.len());
    let mut current = inputs.to_vec();

    for (index, rule) in rules.iter().enumerate() {
        let mut leftover = Vec::with_capacity(current.len());
        let claimed_before = outputs.len();
        for interval in current {
            match apply_transform(interval, rule) {
                TransformResult::Transformed {
                    transformed,
                    remainders,
                } => {
                    outputs.push(transformed);
                    leftover.extend(remainders);
                }
                TransformResult::Unchanged(interval) => leftover.push(interval),
            }
        }
        trace!(
            rule = index,
            source = %rule.source(),
            offset = rule.offset(),
            claimed = outputs.len() - claimed_before,
            leftover = leftover.len(),
            "rule applied"
        );
        current = leftover;
    }

    outputs.extend(current);
    outputs
}

/// Maps a single value through one stage with the same first-match policy.
pub fn map_value(value: i64, rules: &[TransformRule]) -> i64 {
    rules
        .iter()
        .find_map(|rule| rule.map_value(value))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(start: i64, length: i64, offset: i64) -> TransformRule {
        TransformRule::new(Interval::new(start, length), offset)
    }

    #[test]
    fn seed_to_soil_example() {
        let inputs = [Interval::new(79, 14), Interval::new(55, 13)];
        let rules = [rule(98, 2, -48), rule(50, 48, 2)];
        assert_eq!(
            apply_stage(&inputs, &rules),
            vec![Interval::new(81, 14), Interval::new(57, 13)]
        );
    }

    #[test]
    fn unclaimed_intervals_pass_through() {
        let inputs = [Interval::new(81, 14), Interval::new(57, 13)];
        let rules = [rule(15, 37, -15), rule(52, 2, -15), rule(0, 15, 39)];
        assert_eq!(
            apply_stage(&inputs, &rules),
            vec![Interval::new(81, 14), Interval::new(57, 13)]
        );
    }

    #[test]
    fn remainders_are_offered_to_later_rules() {
        let inputs = [Interval::new(81, 14), Interval::new(57, 13)];
        let rules = [
            rule(53, 8, -4),
            rule(11, 42, -11),
            rule(0, 7, 42),
            rule(7, 4, 50),
        ];
        assert_eq!(
            apply_stage(&inputs, &rules),
            vec![Interval::new(53, 4), Interval::new(81, 14), Interval::new(61, 9)]
        );
    }

    #[test]
    fn earlier_rule_wins_on_overlap() {
        let inputs = [Interval::new(0, 10)];
        let rules = [rule(0, 6, 100), rule(4, 6, 1000)];
        assert_eq!(
            apply_stage(&inputs, &rules),
            vec![Interval::new(100, 6), Interval::new(1006, 4)]
        );
    }

    #[test]
    fn empty_rules_return_inputs() {
        let inputs = [Interval::new(5, 5), Interval::new(0, 1)];
        assert_eq!(apply_stage(&inputs, &[]), inputs.to_vec());
    }

    #[test]
    fn map_value_first_match() {
        assert_eq!(map_value(1, &[rule(0, 3, 5)]), 6);
        assert_eq!(map_value(6, &[rule(6, 3, -6)]), 0);
        assert_eq!(map_value(6, &[rule(1, 3, 69), rule(5, 10, 95)]), 101);
        assert_eq!(map_value(14, &[rule(98, 2, -48), rule(50, 48, 2)]), 14);
    }
}
