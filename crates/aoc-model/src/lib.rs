//! Value types shared by the puzzle crates.
//!
//! - **interval**: half-open integer ranges
//! - **rule**: offset rules and named stages for the range pipeline
//! - **options**: mode values selected by the caller (seed layout, card rules, part)
//! - **cards**: camel-cards hands and hand types
//! - **games**: cube draws and game records
//! - **schematic**: engine schematic grids and the numbers on them
//! - **scratchcards**: winning numbers against card numbers
//! - **races**: boat race time limits and records

pub mod cards;
pub mod error;
pub mod games;
pub mod interval;
pub mod options;
pub mod races;
pub mod rule;
pub mod schematic;
pub mod scratchcards;

pub use cards::{Card, HAND_SIZE, Hand, HandType};
pub use error::{ModelError, Result};
pub use games::{CubeColor, CubeSet, Game};
pub use interval::Interval;
pub use options::{PuzzlePart, RulesetMode, SeedMode};
pub use races::Race;
pub use rule::{Stage, TransformRule};
pub use schematic::{PartNumber, Schematic, is_symbol};
pub use scratchcards::ScratchCard;
