use crate::error::{BaResult, BrailleError};
use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use self::DotPosition::*;

/// The six physical keys of the chorded QWERTY layout.
/// Left hand `D W Q` drive the left column, right hand `K O P` the right.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[strum(ascii_case_insensitive)]
pub enum Key {
    D,
    W,
    Q,
    K,
    O,
    P,
}

/// Positions in a 2x3 braille cell, numbered 1-3 down the left column
/// and 4-6 down the right column.
#[derive(Debug, Clone, Copy, EnumIter, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DotPosition {
    Dot1,
    Dot2,
    Dot3,
    Dot4,
    Dot5,
    Dot6,
}

impl Key {
    pub fn from_char(c: char) -> Option<Key> {
        match c.to_ascii_uppercase() {
            'D' => Some(Key::D),
            'W' => Some(Key::W),
            'Q' => Some(Key::Q),
            'K' => Some(Key::K),
            'O' => Some(Key::O),
            'P' => Some(Key::P),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Key::D => 'D',
            Key::W => 'W',
            Key::Q => 'Q',
            Key::K => 'K',
            Key::O => 'O',
            Key::P => 'P',
        }
    }

    pub fn dot(&self) -> DotPosition {
        match self {
            Key::D => Dot1,
            Key::W => Dot2,
            Key::Q => Dot3,
            Key::K => Dot4,
            Key::O => Dot5,
            Key::P => Dot6,
        }
    }
}

impl DotPosition {
    pub fn number(&self) -> u8 {
        match self {
            Dot1 => 1,
            Dot2 => 2,
            Dot3 => 3,
            Dot4 => 4,
            Dot5 => 5,
            Dot6 => 6,
        }
    }

    pub fn from_number(n: u8) -> Option<DotPosition> {
        DotPosition::iter().find(|d| d.number() == n)
    }

    pub fn key(&self) -> Key {
        match self {
            Dot1 => Key::D,
            Dot2 => Key::W,
            Dot3 => Key::Q,
            Dot4 => Key::K,
            Dot5 => Key::O,
            Dot6 => Key::P,
        }
    }

    fn bit(&self) -> u8 {
        1 << (self.number() - 1)
    }
}

pub const ALPHABET_SIZE: usize = 26;

// Indexed by `letter - 'a'`.
static LETTER_DOTS: [&[DotPosition]; ALPHABET_SIZE] = [
    &[Dot1],                         // a
    &[Dot1, Dot2],                   // b
    &[Dot1, Dot3],                   // c
    &[Dot1, Dot3, Dot4],             // d
    &[Dot1, Dot4],                   // e
    &[Dot1, Dot2, Dot3],             // f
    &[Dot1, Dot2, Dot3, Dot4],       // g
    &[Dot1, Dot2, Dot4],             // h
    &[Dot2, Dot3],                   // i
    &[Dot2, Dot3, Dot4],             // j
    &[Dot1, Dot5],                   // k
    &[Dot1, Dot2, Dot5],             // l
    &[Dot1, Dot3, Dot5],             // m
    &[Dot1, Dot3, Dot4, Dot5],       // n
    &[Dot1, Dot4, Dot5],             // o
    &[Dot1, Dot2, Dot3, Dot5],       // p
    &[Dot1, Dot2, Dot3, Dot4, Dot5], // q
    &[Dot1, Dot2, Dot4, Dot5],       // r
    &[Dot2, Dot3, Dot5],             // s
    &[Dot2, Dot3, Dot4, Dot5],       // t
    &[Dot1, Dot5, Dot6],             // u
    &[Dot1, Dot2, Dot5, Dot6],       // v
    &[Dot2, Dot3, Dot4, Dot6],       // w
    &[Dot1, Dot3, Dot5, Dot6],       // x
    &[Dot1, Dot3, Dot4, Dot5, Dot6], // y
    &[Dot1, Dot4, Dot5, Dot6],       // z
];

fn letter_index(letter: char) -> Option<usize> {
    let lower = letter.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some((lower as u8 - b'a') as usize)
    } else {
        None
    }
}

fn dot_mask(dots: &[DotPosition]) -> u8 {
    dots.iter().fold(0, |mask, d| mask | d.bit())
}

/// Dot set of a letter (case-insensitive). Fails for anything outside a-z.
pub fn letter_dots(letter: char) -> BaResult<&'static [DotPosition]> {
    letter_index(letter)
        .map(|i| LETTER_DOTS[i])
        .ok_or(BrailleError::UnknownLetter(letter))
}

/// Same row as [`letter_dots`], expressed as the keys that type it.
pub fn letter_keys(letter: char) -> BaResult<Vec<Key>> {
    Ok(letter_dots(letter)?.iter().map(DotPosition::key).collect())
}

/// Reverse lookup, independent of the order of `dots`.
pub fn letter_for_dots(dots: &[DotPosition]) -> Option<char> {
    if dots.is_empty() {
        return None;
    }
    let mask = dot_mask(dots);
    LETTER_DOTS
        .iter()
        .position(|row| dot_mask(row) == mask)
        .map(|i| (b'a' + i as u8) as char)
}

pub fn letters() -> impl Iterator<Item = char> {
    (b'a'..=b'z').map(|b| b as char)
}

/// Checks the letter table: rows non-empty, no repeated dot within a row,
/// and no two letters sharing a dot set.
pub fn verify_letter_table() -> BaResult<()> {
    verify_table(&LETTER_DOTS)
}

/// Checks a letter table whose row `i` spells letter `'a' + i`.
pub fn verify_table(rows: &[&[DotPosition]]) -> BaResult<()> {
    if rows.len() > ALPHABET_SIZE {
        return Err(BrailleError::Validation(format!(
            "table has {} rows, alphabet has {}",
            rows.len(),
            ALPHABET_SIZE
        )));
    }

    let mut seen: HashMap<u8, char> = HashMap::with_capacity(rows.len());

    for (letter, dots) in letters().zip(rows.iter()) {
        if dots.is_empty() {
            return Err(BrailleError::Validation(format!(
                "letter '{}' has an empty dot set",
                letter
            )));
        }

        let mask = dot_mask(dots);
        if mask.count_ones() as usize != dots.len() {
            return Err(BrailleError::Validation(format!(
                "letter '{}' repeats a dot position",
                letter
            )));
        }

        if let Some(&first) = seen.get(&mask) {
            return Err(BrailleError::TableCollision {
                first,
                second: letter,
            });
        }
        seen.insert(mask, letter);
    }

    Ok(())
}
