//! Offset rules and the stages that group them.

use serde::Serialize;

use crate::error::{ModelError, Result};
use crate::interval::Interval;

/// Maps every value `v` inside `source` to `v + offset`.
///
/// The shifted source range is checked at construction, so applying the rule
/// to any sub-range of `source` cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransformRule {
    source: Interval,
    offset: i64,
}

impl TransformRule {
    pub fn try_new(source: Interval, offset: i64) -> Result<Self> {
        source.shifted(offset)?;
        Ok(Self { source, offset })
    }

    /// Creates a rule from trusted values.
    ///
    /// # Panics
    ///
    /// Panics if shifting `source` by `offset` overflows.
    #[must_use]
    pub fn new(source: Interval, offset: i64) -> Self {
        match Self::try_new(source, offset) {
            Ok(rule) => rule,
            Err(error) => panic!("invalid rule: {error}"),
        }
    }

    /// Builds a rule from a `<dest_start> <source_start> <length>` table row.
    pub fn from_mapping(dest_start: i64, source_start: i64, length: i64) -> Result<Self> {
        let source = Interval::try_new(source_start, length)?;
        let offset = dest_start
            .checked_sub(source_start)
            .ok_or(ModelError::DestinationOverflow {
                dest_start,
                source_start,
            })?;
        Self::try_new(source, offset)
    }

    pub const fn source(&self) -> Interval {
        self.source
    }

    pub const fn offset(&self) -> i64 {
        self.offset
    }

    /// Maps a single value, or returns `None` when it lies outside `source`.
    pub fn map_value(&self, value: i64) -> Option<i64> {
        self.source
            .contains(value)
            .then(|| value + self.offset)
    }
}

/// One named table of rules, consulted in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stage {
    name: String,
    rules: Vec<TransformRule>,
}

impl Stage {
    pub fn new(name: impl Into<String>, rules: Vec<TransformRule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    /// Stage label, e.g. `seed-to-soil`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[TransformRule] {
        &self.rules
    }
}
