#![allow(dead_code)]

use braille_autocorrect::cell::Cell;
use braille_autocorrect::lexicon::Dictionary;
use braille_autocorrect::symbols::letter_keys;

/// The key chord a typist presses for `letter`, e.g. `'c'` -> `"DQ"`.
pub fn chord_for(letter: char) -> String {
    letter_keys(letter)
        .expect("test letters are a-z")
        .iter()
        .map(|k| k.as_char())
        .collect()
}

/// Space separated chords spelling `word` exactly.
pub fn chords_for(word: &str) -> String {
    word.chars().map(chord_for).collect::<Vec<_>>().join(" ")
}

pub fn cells(raw: &[&str]) -> Vec<Cell> {
    raw.iter().map(|r| braille_autocorrect::api::normalize_chord(r)).collect()
}

pub fn reference_dictionary() -> Dictionary {
    Dictionary::from_words(["cat", "cab", "bat", "car", "bar", "dog", "rat"])
}
