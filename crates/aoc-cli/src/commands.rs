use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use aoc_ingest::{
    EXAMPLE_ALMANAC, EXAMPLE_CALIBRATION, EXAMPLE_GAMES, EXAMPLE_HANDS, EXAMPLE_RACES,
    EXAMPLE_SCHEMATIC, EXAMPLE_SCRATCHCARDS, parse_almanac, parse_games, parse_hands, parse_races,
    parse_schematic, parse_scratchcards, read_input,
};
use aoc_model::{PuzzlePart, RulesetMode, SeedMode};
use aoc_transform::{
    calibration_total, cube_games_answer, minimum_start, product_of_ways, run_pipeline,
    schematic_answer, scratchcards_answer, total_winnings,
};

use crate::cli::{CalibrationArgs, CardsArgs, PuzzleArgs, SeedsArgs};
use crate::types::{CardsResult, PuzzleResult, SeedsResult};

pub fn run_calibration(args: &CalibrationArgs) -> Result<PuzzleResult> {
    let span = info_span!("calibration");
    let _guard = span.enter();

    let text = load_text(args.filename.as_deref(), EXAMPLE_CALIBRATION)?;
    let answer = calibration_total(text.lines());
    info!(answer, "calibration total computed");

    Ok(PuzzleResult {
        puzzle: "calibration",
        part: PuzzlePart::One,
        records: text.lines().count(),
        answer,
    })
}

pub fn run_cubes(args: &PuzzleArgs) -> Result<PuzzleResult> {
    let part = PuzzlePart::from_part_two(args.part_two);
    let span = info_span!("cubes", ?part);
    let _guard = span.enter();

    let text = load_text(args.filename.as_deref(), EXAMPLE_GAMES)?;
    let games = parse_games(&text).context("parse cube games")?;
    let answer = cube_games_answer(&games, part);
    info!(answer, games = games.len(), "cube games checked");

    Ok(PuzzleResult {
        puzzle: "cubes",
        part,
        records: games.len(),
        answer,
    })
}

pub fn run_parts(args: &PuzzleArgs) -> Result<PuzzleResult> {
    let part = PuzzlePart::from_part_two(args.part_two);
    let span = info_span!("parts", ?part);
    let _guard = span.enter();

    let text = load_text(args.filename.as_deref(), EXAMPLE_SCHEMATIC)?;
    let schematic = parse_schematic(&text).context("parse engine schematic")?;
    let answer = schematic_answer(&schematic, part);
    info!(answer, numbers = schematic.numbers().len(), "schematic scanned");

    Ok(PuzzleResult {
        puzzle: "parts",
        part,
        records: schematic.numbers().len(),
        answer,
    })
}

pub fn run_scratchcards(args: &PuzzleArgs) -> Result<PuzzleResult> {
    let part = PuzzlePart::from_part_two(args.part_two);
    let span = info_span!("scratchcards", ?part);
    let _guard = span.enter();

    let text = load_text(args.filename.as_deref(), EXAMPLE_SCRATCHCARDS)?;
    let cards = parse_scratchcards(&text).context("parse scratchcards")?;
    let answer = scratchcards_answer(&cards, part);
    info!(answer, cards = cards.len(), "scratchcards scored");

    Ok(PuzzleResult {
        puzzle: "scratchcards",
        part,
        records: cards.len(),
        answer,
    })
}

pub fn run_seeds(args: &SeedsArgs) -> Result<SeedsResult> {
    let mode = SeedMode::from_part_two(args.part_two);
    let span = info_span!("seeds", ?mode);
    let _guard = span.enter();

    let text = load_text(args.filename.as_deref(), EXAMPLE_ALMANAC)?;
    let almanac = parse_almanac(&text, mode).context("parse almanac")?;
    let locations = run_pipeline(&almanac.seeds, &almanac.stages);
    let answer = minimum_start(&locations).context("reduce locations")?;
    info!(answer, locations = locations.len(), "lowest location found");

    Ok(SeedsResult {
        mode,
        stages: almanac.stages.len(),
        answer,
        locations,
    })
}

pub fn run_races(args: &PuzzleArgs) -> Result<PuzzleResult> {
    let part = PuzzlePart::from_part_two(args.part_two);
    let span = info_span!("races", ?part);
    let _guard = span.enter();

    let text = load_text(args.filename.as_deref(), EXAMPLE_RACES)?;
    let races = parse_races(&text, part).context("parse race sheet")?;
    let answer = product_of_ways(&races);
    info!(answer, races = races.len(), "race records counted");

    Ok(PuzzleResult {
        puzzle: "races",
        part,
        records: races.len(),
        answer,
    })
}

pub fn run_cards(args: &CardsArgs) -> Result<CardsResult> {
    let mode = RulesetMode::from_part_two(args.part_two);
    let span = info_span!("cards", ?mode);
    let _guard = span.enter();

    let text = load_text(args.filename.as_deref(), EXAMPLE_HANDS)?;
    let hands = parse_hands(&text).context("parse hands")?;
    let answer = total_winnings(&hands, mode);
    info!(answer, hands = hands.len(), "winnings computed");

    Ok(CardsResult {
        mode,
        hands: hands.len(),
        answer,
    })
}

/// Reads `path`, or falls back to the built-in example.
fn load_text(path: Option<&Path>, example: &'static str) -> Result<Cow<'static, str>> {
    match path {
        Some(path) => {
            let text = read_input(path).with_context(|| format!("load {}", path.display()))?;
            Ok(Cow::Owned(text))
        }
        None => {
            info!("no input file given, using the worked example");
            Ok(Cow::Borrowed(example))
        }
    }
}
