//! CLI library components for the puzzle runner.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
