use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("interval starting at {start} has negative length {length}")]
    NegativeLength { start: i64, length: i64 },
    #[error("interval starting at {start} with length {length} overflows i64")]
    Overflow { start: i64, length: i64 },
    #[error("offset {offset} moves interval {start}+{length} outside i64")]
    OffsetOverflow { start: i64, length: i64, offset: i64 },
    #[error("destination {dest_start} minus source {source_start} does not fit in i64")]
    DestinationOverflow { dest_start: i64, source_start: i64 },
    #[error("invalid card '{0}'")]
    InvalidCard(char),
    #[error("hand has {found} cards, expected {expected}")]
    HandSize { expected: usize, found: usize },
    #[error("unknown cube color '{0}'")]
    UnknownColor(String),
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("number at row {row}, column {col} does not fit in u64")]
    NumberOverflow { row: usize, col: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
