use crate::reports;
use braille_autocorrect::api::suggest;
use braille_autocorrect::config::AutocorrectConfig;
use braille_autocorrect::ranker::Ranker;
use clap::Args;
use std::process;
use tracing::{debug, error};

#[derive(Args, Debug, Clone)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub config: AutocorrectConfig,

    /// Chord tokens, e.g. `DQ D KOQW`. Tokens may also be passed as one quoted string.
    pub chords: Vec<String>,

    /// Print the report as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &SuggestArgs, ranker: &Ranker, config: &AutocorrectConfig) {
    let line = args.chords.join(" ");
    debug!(
        "Ranking '{}' against {} of {} words (top {}, {})",
        line,
        ranker.encoded_len(),
        ranker.dictionary().len(),
        config.top_k,
        config.chord_policy
    );

    let report = suggest(&line, ranker, config);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("❌ Failed to serialize report: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    reports::print_input_summary(&report);
    reports::print_suggestions(&report);
}
