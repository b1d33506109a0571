//! Integration tests for the range pipeline.

use aoc_model::{Interval, Stage, TransformRule};
use aoc_transform::{TransformError, map_value, minimum_start, run_pipeline};

fn stage(name: &str, rows: &[(i64, i64, i64)]) -> Stage {
    let rules = rows
        .iter()
        .map(|&(dest, source, length)| TransformRule::from_mapping(dest, source, length).unwrap())
        .collect();
    Stage::new(name, rules)
}

fn example_stages() -> Vec<Stage> {
    vec![
        stage("seed-to-soil", &[(50, 98, 2), (52, 50, 48)]),
        stage("soil-to-fertilizer", &[(0, 15, 37), (37, 52, 2), (39, 0, 15)]),
        stage(
            "fertilizer-to-water",
            &[(49, 53, 8), (0, 11, 42), (42, 0, 7), (57, 7, 4)],
        ),
        stage("water-to-light", &[(88, 18, 7), (18, 25, 70)]),
        stage(
            "light-to-temperature",
            &[(45, 77, 23), (81, 45, 19), (68, 64, 13)],
        ),
        stage("temperature-to-humidity", &[(0, 69, 1), (1, 0, 69)]),
        stage("humidity-to-location", &[(60, 56, 37), (56, 93, 4)]),
    ]
}

#[test]
fn example_seed_ranges_reach_location_46() {
    let seeds = [Interval::new(79, 14), Interval::new(55, 13)];
    let locations = run_pipeline(&seeds, &example_stages());

    let total: i64 = locations.iter().map(Interval::length).sum();
    assert_eq!(total, 27);
    assert_eq!(minimum_start(&locations), Ok(46));
}

#[test]
fn example_single_seeds_reach_location_35() {
    let seeds: Vec<Interval> = [79, 14, 55, 13]
        .into_iter()
        .map(|seed| Interval::new(seed, 1))
        .collect();
    let locations = run_pipeline(&seeds, &example_stages());

    let mut starts: Vec<i64> = locations.iter().map(Interval::start).collect();
    starts.sort_unstable();
    assert_eq!(starts, vec![35, 43, 82, 86]);
    assert_eq!(minimum_start(&locations), Ok(35));
}

#[test]
fn point_mapping_agrees_with_range_mapping() {
    let stages = example_stages();
    for seed in 0..120 {
        let by_value = stages
            .iter()
            .fold(seed, |value, stage| map_value(value, stage.rules()));
        let by_range = run_pipeline(&[Interval::new(seed, 1)], &stages);
        assert_eq!(by_range, vec![Interval::new(by_value, 1)], "seed {seed}");
    }
}

#[test]
fn pipeline_is_deterministic() {
    let seeds = [Interval::new(79, 14), Interval::new(55, 13)];
    let stages = example_stages();
    assert_eq!(run_pipeline(&seeds, &stages), run_pipeline(&seeds, &stages));
}

#[test]
fn empty_seed_list_has_no_minimum() {
    let locations = run_pipeline(&[], &example_stages());
    assert!(locations.is_empty());
    assert_eq!(minimum_start(&locations), Err(TransformError::EmptyIntervals));
}
