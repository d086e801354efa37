use braille_autocorrect::config::AutocorrectConfig;
use braille_autocorrect::lexicon::Dictionary;
use braille_autocorrect::ranker::Ranker;
use braille_autocorrect::symbols::verify_letter_table;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list (one word per line, .csv/.tsv first column, or a JSON array)
    #[arg(global = true, short, long)]
    dictionary: Option<String>,

    /// JSON file with ranking settings; explicit flags override it
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank dictionary words against a sequence of chords
    Suggest(cmd::suggest::SuggestArgs),
    /// Show the braille cells of dictionary words
    Encode(cmd::encode::EncodeArgs),
    /// Check the letter table and print it
    Verify,
}

fn main() {
    // 1. Parse raw matches (to distinguish user input from defaults)
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // 2. The symbol table must be collision free before anything is encoded
    if let Err(e) = verify_letter_table() {
        error!("❌ Letter table is invalid: {}", e);
        process::exit(1);
    }

    match cli.command {
        Commands::Suggest(args) => {
            // 3. Load dictionary
            let dictionary = match &cli.dictionary {
                Some(path) => {
                    info!("📂 Loading Dictionary: {}", path);
                    Dictionary::load_from_file(path).unwrap_or_else(|e| {
                        error!("{}", e);
                        process::exit(1);
                    })
                }
                None => Dictionary::default(),
            };

            // 4. Resolve config: JSON file as the base, explicit flags on top
            let config = match &cli.config {
                Some(path) => {
                    info!("⚙️  Loading Config from: {}", path);
                    let mut file_config =
                        AutocorrectConfig::load_from_file(path).unwrap_or_else(|e| {
                            error!("{}", e);
                            process::exit(1);
                        });
                    if let Some(sub_matches) = matches.subcommand_matches("suggest") {
                        file_config.merge_from_cli(&args.config, sub_matches);
                    }
                    file_config
                }
                None => args.config.clone(),
            };

            if let Err(e) = config.validate() {
                error!("{}", e);
                process::exit(1);
            }

            let ranker = Ranker::new(dictionary);
            cmd::suggest::run(&args, &ranker, &config);
        }
        Commands::Encode(args) => {
            warn_unused_globals(&cli.dictionary, &cli.config, "encode");
            cmd::encode::run(&args)
        }
        Commands::Verify => {
            warn_unused_globals(&cli.dictionary, &cli.config, "verify");
            cmd::verify::run()
        }
    }
}

fn warn_unused_globals(dictionary: &Option<String>, config: &Option<String>, command: &str) {
    if dictionary.is_some() {
        warn!("--dictionary has no effect on '{}'", command);
    }
    if config.is_some() {
        warn!("--config has no effect on '{}'", command);
    }
}
