//! Engine schematic part numbers and gear ratios.

use aoc_model::{PartNumber, PuzzlePart, Schematic, is_symbol};
use tracing::debug;

const GEAR: u8 = b'*';

/// Returns true when a symbol touches `number`, diagonals included.
pub fn is_part_number(schematic: &Schematic, number: &PartNumber) -> bool {
    let rows = number.row.saturating_sub(1)..=number.row + 1;
    rows.flat_map(|row| {
        (number.start_col.saturating_sub(1)..=number.end_col + 1).map(move |col| (row, col))
    })
    .filter_map(|(row, col)| schematic.cell(row, col))
    .any(is_symbol)
}

/// Part one: sum of every number that touches a symbol.
pub fn part_number_sum(schematic: &Schematic) -> u64 {
    schematic
        .numbers()
        .iter()
        .filter(|number| is_part_number(schematic, number))
        .map(|number| number.value)
        .sum()
}

/// Part two: a gear is a `*` touching exactly two numbers; sums the product of
/// each gear's two numbers.
pub fn gear_ratio_sum(schematic: &Schematic) -> u64 {
    schematic
        .symbols()
        .filter(|&(_, _, symbol)| symbol == GEAR)
        .filter_map(|(row, col, _)| {
            let mut touching = schematic
                .numbers()
                .iter()
                .filter(|number| number.touches(row, col));
            match (touching.next(), touching.next(), touching.next()) {
                (Some(a), Some(b), None) => Some(a.value.saturating_mul(b.value)),
                _ => None,
            }
        })
        .sum()
}

/// Answer for either part.
pub fn schematic_answer(schematic: &Schematic, part: PuzzlePart) -> u64 {
    let answer = match part {
        PuzzlePart::One => part_number_sum(schematic),
        PuzzlePart::Two => gear_ratio_sum(schematic),
    };
    debug!(numbers = schematic.numbers().len(), ?part, answer, "schematic scanned");
    answer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Schematic {
        Schematic::new(rows.iter().map(|row| row.as_bytes().to_vec()).collect()).unwrap()
    }

    fn flags(schematic: &Schematic) -> Vec<bool> {
        schematic
            .numbers()
            .iter()
            .map(|number| is_part_number(schematic, number))
            .collect()
    }

    #[test]
    fn diagonal_symbols() {
        let schematic = grid(&["1.2", ".*.", "3.4"]);
        assert_eq!(flags(&schematic), vec![true; 4]);
    }

    #[test]
    fn direct_neighbor_symbols() {
        let schematic = grid(&[".1.", "2*3", ".4."]);
        assert_eq!(flags(&schematic), vec![true; 4]);
    }

    #[test]
    fn no_neighbors() {
        let schematic = grid(&[".....", ".123.", "....."]);
        assert_eq!(flags(&schematic), vec![false]);
        assert_eq!(part_number_sum(&schematic), 0);
    }

    #[test]
    fn gear_needs_exactly_two_numbers() {
        let schematic = grid(&["1.2", ".*.", "3.4"]);
        assert_eq!(gear_ratio_sum(&schematic), 0);

        let schematic = grid(&["12.", ".*.", "..3"]);
        assert_eq!(gear_ratio_sum(&schematic), 36);

        let schematic = grid(&["12.", ".+.", "..3"]);
        assert_eq!(gear_ratio_sum(&schematic), 0);
        assert_eq!(schematic_answer(&schematic, PuzzlePart::One), 15);
    }
}
