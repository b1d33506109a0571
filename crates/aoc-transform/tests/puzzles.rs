//! Worked examples for the smaller puzzles, parsed from the embedded inputs.

use aoc_ingest::{
    EXAMPLE_CALIBRATION, EXAMPLE_GAMES, EXAMPLE_RACES, EXAMPLE_SCHEMATIC, EXAMPLE_SCRATCHCARDS,
    parse_games, parse_races, parse_schematic, parse_scratchcards,
};
use aoc_model::{PuzzlePart, ScratchCard};
use aoc_transform::{
    calibration_total, cube_games_answer, product_of_ways, schematic_answer, scratchcards_answer,
};

#[test]
fn calibration_example() {
    assert_eq!(calibration_total(EXAMPLE_CALIBRATION.lines()), 142);
}

#[test]
fn cube_games_example() {
    let games = parse_games(EXAMPLE_GAMES).unwrap();
    assert_eq!(cube_games_answer(&games, PuzzlePart::One), 8);
    assert_eq!(cube_games_answer(&games, PuzzlePart::Two), 2286);

    let powers: Vec<u64> = games.iter().map(|game| game.minimum_bag().power()).collect();
    assert_eq!(powers, vec![48, 12, 1560, 630, 36]);
}

#[test]
fn schematic_example() {
    let schematic = parse_schematic(EXAMPLE_SCHEMATIC).unwrap();
    assert_eq!(schematic_answer(&schematic, PuzzlePart::One), 4361);
    assert_eq!(schematic_answer(&schematic, PuzzlePart::Two), 467_835);
}

#[test]
fn scratchcards_example() {
    let cards = parse_scratchcards(EXAMPLE_SCRATCHCARDS).unwrap();
    let points: Vec<u64> = cards.iter().map(ScratchCard::points).collect();
    assert_eq!(points, vec![8, 2, 2, 1, 0, 0]);
    assert_eq!(scratchcards_answer(&cards, PuzzlePart::One), 13);
    assert_eq!(scratchcards_answer(&cards, PuzzlePart::Two), 30);
}

#[test]
fn races_example() {
    let races = parse_races(EXAMPLE_RACES, PuzzlePart::One).unwrap();
    assert_eq!(product_of_ways(&races), 288);
    let race = parse_races(EXAMPLE_RACES, PuzzlePart::Two).unwrap();
    assert_eq!(product_of_ways(&race), 71503);
}
