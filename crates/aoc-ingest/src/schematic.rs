//! Engine schematic grids.

use aoc_model::{ModelError, Schematic};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Parses the grid. Blank lines are skipped; every other line is one row and
/// all rows must have the same width.
pub fn parse_schematic(text: &str) -> Result<Schematic> {
    let mut rows = Vec::new();
    let mut lines = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let row = raw.trim();
        if row.is_empty() {
            continue;
        }
        if !row.is_ascii() {
            return Err(IngestError::Malformed {
                line: index + 1,
                expected: "an ASCII grid row",
                found: row.to_string(),
            });
        }
        rows.push(row.as_bytes().to_vec());
        lines.push(index + 1);
    }
    if rows.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let schematic = Schematic::new(rows).map_err(|source| {
        let row = match &source {
            ModelError::RaggedRow { row, .. } | ModelError::NumberOverflow { row, .. } => *row,
            _ => 0,
        };
        IngestError::Model {
            line: lines.get(row).copied().unwrap_or(1),
            source,
        }
    })?;
    debug!(
        height = schematic.height(),
        width = schematic.width(),
        numbers = schematic.numbers().len(),
        "schematic parsed"
    );
    Ok(schematic)
}
