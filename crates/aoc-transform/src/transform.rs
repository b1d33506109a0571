//! Splitting one interval against one offset rule.

use aoc_model::{Interval, TransformRule};

/// Outcome of applying a single rule to a single interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformResult {
    /// The interval does not touch the rule's source range.
    Unchanged(Interval),
    /// The overlapping part was shifted. `remainders` holds the parts of the
    /// input outside the source range, lower part first, at most two.
    Transformed {
        transformed: Interval,
        remainders: Vec<Interval>,
    },
}

impl TransformResult {
    pub fn is_transformed(&self) -> bool {
        matches!(self, TransformResult::Transformed { .. })
    }
}

/// Applies `rule` to `input`.
///
/// The part of `input` inside the rule's source range is shifted by the rule
/// offset; the parts below and above it are returned untouched as remainders.
/// The transformed length plus the remainder lengths always equals the input
/// length.
pub fn apply_transform(input: Interval, rule: &TransformRule) -> TransformResult {
    let source = rule.source();
    if !input.overlaps(&source) {
        return TransformResult::Unchanged(input);
    }

    let core = input.intersect(&source);
    let mut remainders = Vec::with_capacity(2);

    let lower_length = core.start() - input.start();
    if lower_length > 0 {
        remainders.push(Interval::new(input.start(), lower_length));
    }
    let upper_length = input.end() - core.end();
    if upper_length > 0 {
        remainders.push(Interval::new(core.end(), upper_length));
    }

    // core lies inside the rule's source range, whose shift was validated
    // when the rule was built.
    let transformed = Interval::new(core.start() + rule.offset(), core.length());

    TransformResult::Transformed {
        transformed,
        remainders,
    }
}
