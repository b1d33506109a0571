//! Computation for the daily puzzles.
//!
//! - **transform**: one interval against one offset rule
//! - **stage**: a batch of intervals against an ordered table of rules
//! - **pipeline**: a chain of stages and the minimum-start reduction
//! - **ranking**: camel-cards classification, ordering and winnings
//! - **calibration**, **cubes**, **parts**, **scratchcards**, **races**: the
//!   smaller puzzles, one module each

pub mod calibration;
pub mod cubes;
pub mod error;
pub mod parts;
pub mod pipeline;
pub mod races;
pub mod ranking;
pub mod scratchcards;
pub mod stage;
pub mod transform;

pub use calibration::{calibration_total, calibration_value};
pub use cubes::{cube_games_answer, minimum_bag_power, possible_game_ids};
pub use error::{Result, TransformError};
pub use parts::{gear_ratio_sum, is_part_number, part_number_sum, schematic_answer};
pub use pipeline::{minimum_start, run_pipeline};
pub use races::{max_waiting_time, min_waiting_time, product_of_ways, ways_to_win};
pub use ranking::{classify, compare_hands, total_winnings};
pub use scratchcards::{scratchcards_answer, total_cards, total_points};
pub use stage::{apply_stage, map_value};
pub use transform::{TransformResult, apply_transform};
