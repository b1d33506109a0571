//! Engine schematics: a rectangular grid of digits, symbols and `.` cells.

use serde::Serialize;

use crate::error::{ModelError, Result};

/// Any cell that is neither a digit nor `.` is a symbol.
pub fn is_symbol(cell: u8) -> bool {
    !(cell.is_ascii_digit() || cell == b'.')
}

/// A run of digits on one row. `end_col` is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartNumber {
    pub row: usize,
    pub start_col: usize,
    pub end_col: usize,
    pub value: u64,
}

impl PartNumber {
    /// Finds every digit run on one row, left to right.
    pub fn scan_row(row: usize, cells: &[u8]) -> Result<Vec<PartNumber>> {
        let mut numbers = Vec::new();
        let mut current: Option<PartNumber> = None;
        for (col, &cell) in cells.iter().enumerate() {
            if let Some(digit) = char::from(cell).to_digit(10) {
                let number = current.get_or_insert(PartNumber {
                    row,
                    start_col: col,
                    end_col: col,
                    value: 0,
                });
                number.end_col = col;
                number.value = number
                    .value
                    .checked_mul(10)
                    .and_then(|value| value.checked_add(u64::from(digit)))
                    .ok_or(ModelError::NumberOverflow {
                        row,
                        col: number.start_col,
                    })?;
            } else if let Some(number) = current.take() {
                numbers.push(number);
            }
        }
        numbers.extend(current);
        Ok(numbers)
    }

    /// Returns true when the cell at `(row, col)` is on or next to this
    /// number, diagonals included.
    pub fn touches(&self, row: usize, col: usize) -> bool {
        row + 1 >= self.row
            && row <= self.row + 1
            && col + 1 >= self.start_col
            && col <= self.end_col + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schematic {
    rows: Vec<Vec<u8>>,
    width: usize,
    numbers: Vec<PartNumber>,
}

impl Schematic {
    /// Builds a schematic from its rows, which must all have the same width.
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        let mut numbers = Vec::new();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(ModelError::RaggedRow {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            numbers.extend(PartNumber::scan_row(row, cells)?);
        }
        Ok(Self {
            rows,
            width,
            numbers,
        })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<u8> {
        self.rows.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Every digit run in the grid, top to bottom then left to right.
    pub fn numbers(&self) -> &[PartNumber] {
        &self.numbers
    }

    /// Every symbol cell as `(row, col, symbol)`.
    pub fn symbols(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &cell)| is_symbol(cell))
                .map(move |(col, &cell)| (row, col, cell))
        })
    }
}
