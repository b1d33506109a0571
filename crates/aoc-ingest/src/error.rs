//! Error types for puzzle input loading.

use std::path::PathBuf;

use aoc_model::ModelError;
use thiserror::Error;

/// Errors that can occur while reading or parsing puzzle input.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Failed to read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// Input contained nothing to parse.
    #[error("input is empty")]
    EmptyInput,

    /// A line did not have the expected shape.
    #[error("line {line}: expected {expected}, found '{found}'")]
    Malformed {
        line: usize,
        expected: &'static str,
        found: String,
    },

    /// A field could not be parsed as an integer.
    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },

    /// Seed ranges must come in `(start, length)` pairs.
    #[error("line {line}: seed ranges need an even count of numbers, found {count}")]
    OddSeedCount { line: usize, count: usize },

    /// A race sheet needs one distance per time.
    #[error("race sheet has {times} times but {distances} distances")]
    RaceCountMismatch { times: usize, distances: usize },

    /// A value was rejected by the model types.
    #[error("line {line}: {source}")]
    Model {
        line: usize,
        #[source]
        source: ModelError,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
