use anyhow::Result;

use crate::cli::OutputFormatArg;
use crate::types::{CardsResult, PuzzleResult, SeedsResult};

pub fn render_seeds(result: &SeedsResult, format: OutputFormatArg) -> Result<String> {
    match format {
        OutputFormatArg::Text => Ok(format!("Solution: {}", result.answer)),
        OutputFormatArg::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

pub fn render_cards(result: &CardsResult, format: OutputFormatArg) -> Result<String> {
    match format {
        OutputFormatArg::Text => Ok(format!("Solution: {}", result.answer)),
        OutputFormatArg::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

pub fn render_puzzle(result: &PuzzleResult, format: OutputFormatArg) -> Result<String> {
    match format {
        OutputFormatArg::Text => Ok(format!("Solution: {}", result.answer)),
        OutputFormatArg::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}
