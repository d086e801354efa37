use crate::cell::{Cell, ChordPolicy};
use crate::config::AutocorrectConfig;
use crate::ranker::{Ranker, Suggestion};
use serde::Serialize;

pub use crate::cell::normalize_chord;
pub use crate::ranker::rank;

/// Marker shown for input cells that match no letter.
pub const UNDECODED: char = '?';

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionReport {
    pub tokens: Vec<String>,
    pub cells: Vec<Cell>,
    pub decoded: String,
    pub suggestions: Vec<Suggestion>,
}

/// Splits a line of chord tokens on whitespace and canonicalizes each one.
pub fn parse_input(line: &str, policy: ChordPolicy) -> Vec<Cell> {
    line.split_whitespace()
        .map(|tok| Cell::normalize(tok, policy))
        .collect()
}

/// One full request: parse, rank, and decode the input for display.
pub fn suggest(line: &str, ranker: &Ranker, config: &AutocorrectConfig) -> SuggestionReport {
    let cells = parse_input(line, config.chord_policy);
    let decoded = cells
        .iter()
        .map(|c| c.letter().unwrap_or(UNDECODED))
        .collect();
    let suggestions = ranker.rank(&cells, config.top_k);

    SuggestionReport {
        tokens: line.split_whitespace().map(str::to_string).collect(),
        cells,
        decoded,
        suggestions,
    }
}
