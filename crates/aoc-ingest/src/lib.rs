//! Puzzle input loading.
//!
//! Turns the fixed-format puzzle text into model values. Nothing here runs a
//! computation; see `aoc-transform` for that.

pub mod almanac;
pub mod error;
pub mod games;
pub mod hands;
pub mod input;
pub mod races;
pub mod samples;
pub mod schematic;
pub mod scratchcards;

pub use almanac::{Almanac, parse_almanac, parse_seed_line, parse_stage};
pub use error::{IngestError, Result};
pub use games::parse_games;
pub use hands::parse_hands;
pub use input::read_input;
pub use races::parse_races;
pub use samples::{
    EXAMPLE_ALMANAC, EXAMPLE_CALIBRATION, EXAMPLE_GAMES, EXAMPLE_HANDS, EXAMPLE_RACES,
    EXAMPLE_SCHEMATIC, EXAMPLE_SCRATCHCARDS,
};
pub use schematic::parse_schematic;
pub use scratchcards::parse_scratchcards;
