//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "aoc",
    version,
    about = "Daily puzzle solvers",
    long_about = "Solve the daily puzzles, one subcommand per day.\n\n\
                  Each command reads its input from --filename, or uses the\n\
                  worked example from the puzzle text when no file is given."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sum the calibration values (first and last digit of each line).
    #[command(visible_alias = "day1")]
    Calibration(CalibrationArgs),

    /// Check cube games against the bag, or sum their minimum-bag powers.
    #[command(visible_alias = "day2")]
    Cubes(PuzzleArgs),

    /// Sum engine part numbers, or gear ratios.
    #[command(visible_alias = "day3")]
    Parts(PuzzleArgs),

    /// Score scratchcards, or count the cards won.
    #[command(visible_alias = "day4")]
    Scratchcards(PuzzleArgs),

    /// Find the lowest location reachable from the almanac seeds.
    #[command(visible_alias = "day5")]
    Seeds(SeedsArgs),

    /// Multiply the ways to beat each race record.
    #[command(visible_alias = "day6")]
    Races(PuzzleArgs),

    /// Compute total camel-cards winnings.
    #[command(visible_alias = "day7")]
    Cards(CardsArgs),
}

#[derive(Parser)]
pub struct CalibrationArgs {
    /// File containing the calibration document (default: the puzzle example).
    #[arg(short = 'f', long = "filename", value_name = "FILE")]
    pub filename: Option<PathBuf>,

    /// Output format for the result.
    #[arg(long = "output", value_enum, default_value = "text")]
    pub output: OutputFormatArg,
}

/// Arguments shared by puzzles whose two parts read the same input.
#[derive(Parser)]
pub struct PuzzleArgs {
    /// File containing the puzzle input (default: the puzzle example).
    #[arg(short = 'f', long = "filename", value_name = "FILE")]
    pub filename: Option<PathBuf>,

    /// Solve part two.
    #[arg(long = "part-two")]
    pub part_two: bool,

    /// Output format for the result.
    #[arg(long = "output", value_enum, default_value = "text")]
    pub output: OutputFormatArg,
}

#[derive(Parser)]
pub struct SeedsArgs {
    /// File containing the almanac (default: the puzzle example).
    #[arg(short = 'f', long = "filename", value_name = "FILE")]
    pub filename: Option<PathBuf>,

    /// Read the seeds line as (start, length) pairs.
    #[arg(long = "part-two")]
    pub part_two: bool,

    /// Output format for the result.
    #[arg(long = "output", value_enum, default_value = "text")]
    pub output: OutputFormatArg,
}

#[derive(Parser)]
pub struct CardsArgs {
    /// File containing one `<cards> <bid>` pair per line (default: the puzzle example).
    #[arg(short = 'f', long = "filename", value_name = "FILE")]
    pub filename: Option<PathBuf>,

    /// Treat J as a joker.
    #[arg(long = "part-two")]
    pub part_two: bool,

    /// Output format for the result.
    #[arg(long = "output", value_enum, default_value = "text")]
    pub output: OutputFormatArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
