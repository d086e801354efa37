use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrailleError {
    #[error("Unknown letter '{0}': no braille cell for this character")]
    UnknownLetter(char),

    #[error("Empty word cannot be encoded")]
    EmptyWord,

    #[error("Letter table collision: '{first}' and '{second}' share the same dot set")]
    TableCollision { first: char, second: char },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type BaResult<T> = Result<T, BrailleError>;
