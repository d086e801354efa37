use crate::cell::Cell;
use crate::error::{BaResult, BrailleError};
use crate::symbols::letter_dots;
use std::fs::File;
use std::path::Path;
use tracing::{info, warn};

/// Word list shipped with the reference autocorrect demo.
pub const DEFAULT_WORDS: [&str; 7] = ["cat", "cab", "bat", "car", "bar", "dog", "rat"];

pub type EncodedWord = Vec<Cell>;

/// Encodes a word letter by letter. The first character outside a-z fails
/// the whole word; there is no partial encoding.
pub fn encode(word: &str) -> BaResult<EncodedWord> {
    if word.is_empty() {
        return Err(BrailleError::EmptyWord);
    }
    word.chars()
        .map(|c| letter_dots(c).map(Cell::from_dots))
        .collect()
}

/// Ordered, immutable word list. Insertion order is the ranking tie-break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::from_words(DEFAULT_WORDS)
    }
}

impl Dictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads a word list. `.json` files hold an array of strings; anything
    /// else is read as delimited text where the first column is the word
    /// (`,` for `.csv`, tab otherwise). `#` lines are comments.
    ///
    /// Text columns are trimmed; JSON strings are taken verbatim, so an
    /// entry like `" cat"` stays unencodable. Empty entries are dropped.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BaResult<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let words: Vec<String> = match ext.as_deref() {
            Some("json") => {
                let file = File::open(path)?;
                serde_json::from_reader(file)?
            }
            Some("csv") => read_word_column(File::open(path)?, b',')?,
            _ => read_word_column(File::open(path)?, b'\t')?,
        };

        let dict = Self::from_words(words.into_iter().filter(|w| !w.is_empty()));

        if dict.is_empty() {
            warn!("Dictionary '{}' contains no words", path.display());
        } else {
            info!("📖 Loaded {} words from '{}'", dict.len(), path.display());
        }
        Ok(dict)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Every word paired with its encoding attempt, in dictionary order.
    pub fn encode_all(&self) -> Vec<(&str, BaResult<EncodedWord>)> {
        self.iter().map(|w| (w, encode(w))).collect()
    }
}

fn read_word_column<R: std::io::Read>(reader: R, delimiter: u8) -> BaResult<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut words = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        if let Some(word) = rec.get(0) {
            words.push(word.trim().to_string());
        }
    }
    Ok(words)
}
