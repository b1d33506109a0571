//! Error types for pipeline reductions.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The reduction was given no non-empty interval to pick from.
    #[error("no intervals to reduce")]
    EmptyIntervals,
}

pub type Result<T> = std::result::Result<T, TransformError>;
