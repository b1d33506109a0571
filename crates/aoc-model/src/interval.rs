//! Half-open integer intervals.

use std::fmt;

use serde::Serialize;

use crate::error::{ModelError, Result};

/// A half-open range `[start, start + length)`.
///
/// Construction rejects negative lengths and ranges whose end does not fit in
/// an `i64`, so every accessor below is overflow-free. Zero-length intervals
/// are allowed; they hold no values and never overlap anything.
///
/// Ordering is by `start`, then by `length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Interval {
    start: i64,
    length: i64,
}

impl Interval {
    /// Creates an interval, validating the length and the end bound.
    pub fn try_new(start: i64, length: i64) -> Result<Self> {
        if length < 0 {
            return Err(ModelError::NegativeLength { start, length });
        }
        if start.checked_add(length).is_none() {
            return Err(ModelError::Overflow { start, length });
        }
        Ok(Self { start, length })
    }

    /// Creates an interval from trusted values.
    ///
    /// # Panics
    ///
    /// Panics if `length` is negative or `start + length` overflows.
    #[must_use]
    pub fn new(start: i64, length: i64) -> Self {
        match Self::try_new(start, length) {
            Ok(interval) => interval,
            Err(error) => panic!("invalid interval: {error}"),
        }
    }

    pub const fn start(&self) -> i64 {
        self.start
    }

    pub const fn length(&self) -> i64 {
        self.length
    }

    /// Exclusive upper bound.
    pub const fn end(&self) -> i64 {
        self.start + self.length
    }

    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub const fn contains(&self, value: i64) -> bool {
        self.start <= value && value < self.end()
    }

    /// Returns true when the two ranges share at least one value.
    pub const fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// Returns the shared part of two overlapping intervals.
    ///
    /// Callers must check [`Interval::overlaps`] first; the result is
    /// meaningless for disjoint inputs.
    #[must_use]
    pub fn intersect(&self, other: &Interval) -> Interval {
        debug_assert!(
            self.overlaps(other),
            "intersect called on disjoint intervals {self} and {other}"
        );
        let start = self.start.max(other.start);
        let end = self.end().min(other.end());
        Interval {
            start,
            length: end - start,
        }
    }

    /// Returns the interval moved by `offset`, keeping its length.
    pub fn shifted(&self, offset: i64) -> Result<Interval> {
        let overflow = || ModelError::OffsetOverflow {
            start: self.start,
            length: self.length,
            offset,
        };
        let start = self.start.checked_add(offset).ok_or_else(overflow)?;
        Interval::try_new(start, self.length).map_err(|_| overflow())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}
