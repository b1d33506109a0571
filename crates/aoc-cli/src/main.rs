//! Daily puzzle solver CLI.

use aoc_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use aoc_cli::commands::{
    run_calibration, run_cards, run_cubes, run_parts, run_races, run_scratchcards, run_seeds,
};
use aoc_cli::logging::{LogConfig, LogFormat, init_logging};
use aoc_cli::summary::{render_cards, render_puzzle, render_seeds};
use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let rendered = match &cli.command {
        Command::Calibration(args) => {
            run_calibration(args).and_then(|result| render_puzzle(&result, args.output))
        }
        Command::Cubes(args) => {
            run_cubes(args).and_then(|result| render_puzzle(&result, args.output))
        }
        Command::Parts(args) => {
            run_parts(args).and_then(|result| render_puzzle(&result, args.output))
        }
        Command::Scratchcards(args) => {
            run_scratchcards(args).and_then(|result| render_puzzle(&result, args.output))
        }
        Command::Races(args) => {
            run_races(args).and_then(|result| render_puzzle(&result, args.output))
        }
        Command::Seeds(args) => {
            run_seeds(args).and_then(|result| render_seeds(&result, args.output))
        }
        Command::Cards(args) => {
            run_cards(args).and_then(|result| render_cards(&result, args.output))
        }
    };
    let exit_code = match rendered {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
