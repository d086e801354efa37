use crate::cell::Cell;
use crate::distance::distance;
use crate::lexicon::{encode, Dictionary, EncodedWord};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub const DEFAULT_TOP_K: usize = 3;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (score {})", self.word, self.distance)
    }
}

/// Scores every encodable word, keeps the `k` closest.
///
/// Words that fail to encode are left out rather than scored. Ties keep
/// dictionary order.
pub fn rank(input: &[Cell], dictionary: &Dictionary, k: usize) -> Vec<Suggestion> {
    let scored = dictionary.iter().filter_map(|word| match encode(word) {
        Ok(cells) => Some((word, cells)),
        Err(e) => {
            debug!("Skipping '{}': {}", word, e);
            None
        }
    });
    top_k(input, scored, k)
}

fn top_k<'a, I, C>(input: &[Cell], entries: I, k: usize) -> Vec<Suggestion>
where
    I: Iterator<Item = (&'a str, C)>,
    C: AsRef<[Cell]>,
{
    if k == 0 {
        return Vec::new();
    }

    let mut results: Vec<Suggestion> = entries
        .map(|(word, cells)| Suggestion {
            word: word.to_string(),
            distance: distance(input, cells.as_ref()),
        })
        .collect();

    // Stable: equal distances stay in dictionary order.
    results.sort_by_key(|s| s.distance);
    results.truncate(k);
    results
}

/// A dictionary with its encodings computed once up front.
#[derive(Debug, Clone)]
pub struct Ranker {
    dictionary: Dictionary,
    encoded: Vec<(String, EncodedWord)>,
}

impl Ranker {
    pub fn new(dictionary: Dictionary) -> Self {
        let encoded: Vec<(String, EncodedWord)> = dictionary
            .encode_all()
            .into_iter()
            .filter_map(|(word, res)| match res {
                Ok(cells) => Some((word.to_string(), cells)),
                Err(e) => {
                    debug!("Excluding '{}' from ranking: {}", word, e);
                    None
                }
            })
            .collect();

        debug!(
            "Encoded {} of {} dictionary words",
            encoded.len(),
            dictionary.len()
        );

        Self {
            dictionary,
            encoded,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn encoded_len(&self) -> usize {
        self.encoded.len()
    }

    pub fn rank(&self, input: &[Cell], k: usize) -> Vec<Suggestion> {
        top_k(
            input,
            self.encoded.iter().map(|(w, cells)| (w.as_str(), cells)),
            k,
        )
    }
}
