use crate::symbols::{letter_for_dots, DotPosition, Key};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// How repeated keys inside one chord are treated.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    EnumString,
    Display,
    ValueEnum,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ChordPolicy {
    /// Keep every character. "DD" stays "DD" and never matches a letter.
    Multiset,
    /// Collapse repeats before sorting. "DD" becomes "D".
    #[default]
    Deduplicate,
}

/// Canonical form of one chord: upper-cased characters sorted by code point.
///
/// Characters outside the six keys are kept as opaque symbols, so such a
/// cell compares unequal to every letter cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Cell(String);

impl Cell {
    pub fn empty() -> Self {
        Cell(String::new())
    }

    pub fn normalize(raw: &str, policy: ChordPolicy) -> Self {
        let mut chars: Vec<char> = raw.chars().flat_map(char::to_uppercase).collect();
        chars.sort_unstable();
        if policy == ChordPolicy::Deduplicate {
            chars.dedup();
        }
        Cell(chars.into_iter().collect())
    }

    pub fn from_keys(keys: &[Key]) -> Self {
        let raw: String = keys.iter().map(Key::as_char).collect();
        Self::normalize(&raw, ChordPolicy::Multiset)
    }

    pub fn from_dots(dots: &[DotPosition]) -> Self {
        let raw: String = dots.iter().map(|d| d.key().as_char()).collect();
        Self::normalize(&raw, ChordPolicy::Multiset)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Dot positions of this cell, or `None` if it holds a non-key symbol.
    pub fn dots(&self) -> Option<Vec<DotPosition>> {
        let mut dots = self
            .0
            .chars()
            .map(|c| Key::from_char(c).map(|k| k.dot()))
            .collect::<Option<Vec<_>>>()?;
        dots.sort();
        Some(dots)
    }

    /// The letter whose table row equals this cell exactly.
    pub fn letter(&self) -> Option<char> {
        let dots = self.dots()?;
        // Repeated keys never match a table row.
        if dots.windows(2).any(|w| w[0] == w[1]) {
            return None;
        }
        letter_for_dots(&dots)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonicalize one chord token with the default [`ChordPolicy`].
pub fn normalize_chord(raw: &str) -> Cell {
    Cell::normalize(raw, ChordPolicy::default())
}
