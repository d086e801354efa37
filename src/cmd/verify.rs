use crate::reports;
use braille_autocorrect::symbols::{verify_letter_table, ALPHABET_SIZE};
use std::process;
use tracing::{error, info};

pub fn run() {
    if let Err(e) = verify_letter_table().and_then(|_| reports::print_letter_table()) {
        error!("❌ {}", e);
        process::exit(1);
    }
    info!("✅ Letter table verified: {} distinct cells", ALPHABET_SIZE);
}
