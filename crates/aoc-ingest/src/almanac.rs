//! Almanac parsing.
//!
//! An almanac is a `seeds:` line followed by blank-line separated stage
//! blocks:
//!
//! ```text
//! seeds: 79 14 55 13
//!
//! seed-to-soil map:
//! 50 98 2
//! 52 50 48
//! ```
//!
//! Each stage row is `<dest_start> <source_start> <length>` and becomes a
//! rule with `offset = dest_start - source_start`. Line numbers in errors are
//! 1-based and refer to the whole input.

use aoc_model::{Interval, SeedMode, Stage, TransformRule};
use tracing::debug;

use crate::error::{IngestError, Result};

const SEEDS_PREFIX: &str = "seeds:";
const MAP_SUFFIX: &str = "map:";

/// Seeds and the ordered stages to run them through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    pub seeds: Vec<Interval>,
    pub stages: Vec<Stage>,
}

type Block<'a> = Vec<(usize, &'a str)>;

/// Parses a complete almanac.
pub fn parse_almanac(text: &str, mode: SeedMode) -> Result<Almanac> {
    let mut blocks = split_blocks(text).into_iter();
    let seed_block = blocks.next().ok_or(IngestError::EmptyInput)?;

    let (line, seed_line) = seed_block[0];
    if let Some(&(extra, found)) = seed_block.get(1) {
        return Err(IngestError::Malformed {
            line: extra,
            expected: "a blank line after the seeds",
            found: found.to_string(),
        });
    }
    let seeds = parse_seeds(line, seed_line, mode)?;
    let stages = blocks
        .map(|block| parse_stage_lines(&block))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        ?mode,
        seeds = seeds.len(),
        stages = stages.len(),
        rules = stages.iter().map(|stage| stage.rules().len()).sum::<usize>(),
        "almanac parsed"
    );
    Ok(Almanac { seeds, stages })
}

/// Parses a `seeds:` line on its own.
pub fn parse_seed_line(line: &str, mode: SeedMode) -> Result<Vec<Interval>> {
    parse_seeds(1, line.trim(), mode)
}

/// Parses one `<name> map:` block on its own.
pub fn parse_stage(block: &str) -> Result<Stage> {
    let lines: Block<'_> = block
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    parse_stage_lines(&lines)
}

fn split_blocks(text: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push((index + 1, line));
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn parse_seeds(line: usize, text: &str, mode: SeedMode) -> Result<Vec<Interval>> {
    let numbers = text
        .strip_prefix(SEEDS_PREFIX)
        .ok_or_else(|| IngestError::Malformed {
            line,
            expected: "'seeds: <numbers>'",
            found: text.to_string(),
        })?;
    let values = parse_numbers(line, numbers)?;
    if values.is_empty() {
        return Err(IngestError::Malformed {
            line,
            expected: "at least one seed",
            found: text.to_string(),
        });
    }

    let model = |source| IngestError::Model { line, source };
    match mode {
        SeedMode::Points => values
            .into_iter()
            .map(|value| Interval::try_new(value, 1).map_err(model))
            .collect(),
        SeedMode::Ranges => {
            if values.len() % 2 != 0 {
                return Err(IngestError::OddSeedCount {
                    line,
                    count: values.len(),
                });
            }
            values
                .chunks_exact(2)
                .map(|pair| Interval::try_new(pair[0], pair[1]).map_err(model))
                .collect()
        }
    }
}

fn parse_stage_lines(block: &[(usize, &str)]) -> Result<Stage> {
    let (header_line, header) = block[0];
    let name = header
        .strip_suffix(MAP_SUFFIX)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| IngestError::Malformed {
            line: header_line,
            expected: "'<name> map:'",
            found: header.to_string(),
        })?;

    let rules = block[1..]
        .iter()
        .map(|&(line, row)| parse_rule(line, row))
        .collect::<Result<Vec<_>>>()?;
    Ok(Stage::new(name, rules))
}

fn parse_rule(line: usize, row: &str) -> Result<TransformRule> {
    let values = parse_numbers(line, row)?;
    let &[dest_start, source_start, length] = values.as_slice() else {
        return Err(IngestError::Malformed {
            line,
            expected: "'<dest_start> <source_start> <length>'",
            found: row.to_string(),
        });
    };
    TransformRule::from_mapping(dest_start, source_start, length)
        .map_err(|source| IngestError::Model { line, source })
}

fn parse_numbers(line: usize, text: &str) -> Result<Vec<i64>> {
    text.split_whitespace()
        .map(|field| {
            field.parse::<i64>().map_err(|_| IngestError::InvalidNumber {
                line,
                value: field.to_string(),
            })
        })
        .collect()
}
