use crate::reports;
use braille_autocorrect::lexicon::encode;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct EncodeArgs {
    #[arg(required = true)]
    pub words: Vec<String>,
}

pub fn run(args: &EncodeArgs) {
    let rows: Vec<_> = args
        .words
        .iter()
        .map(|w| (w.clone(), encode(w)))
        .collect();
    reports::print_encodings(&rows);
}
