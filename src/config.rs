use crate::cell::ChordPolicy;
use crate::error::{BaResult, BrailleError};
use crate::ranker::DEFAULT_TOP_K;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocorrectConfig {
    /// Number of suggestions returned per request
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    pub top_k: usize,

    /// Treatment of repeated keys inside one chord
    #[arg(long, value_enum, default_value_t = ChordPolicy::Deduplicate)]
    pub chord_policy: ChordPolicy,
}

impl Default for AutocorrectConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            chord_policy: ChordPolicy::default(),
        }
    }
}

impl AutocorrectConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BaResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Copies over only the flags the user actually typed, so a config file
    /// keeps its values for everything left at the CLI default.
    pub fn merge_from_cli(&mut self, cli: &AutocorrectConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(top_k, "top_k");
        update_if_present!(chord_policy, "chord_policy");
    }

    pub fn validate(&self) -> BaResult<()> {
        if self.top_k == 0 {
            return Err(BrailleError::Config(
                "top_k must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
