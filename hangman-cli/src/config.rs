use config::{Config, ConfigError};
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

#[derive(Debug, Deserialize)]
pub struct HangmanConfig {
    pub store_path: PathBuf,
    pub dictionary_url: String,
    pub request_timeout_secs: u64,
    pub word_list: Option<PathBuf>,
}

impl HangmanConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub fn load_config(file: Option<PathBuf>) -> Result<HangmanConfig, ConfigError> {
    let file = match file {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("Hangman").required(false),
    };
    Config::builder()
        .set_default("store_path", "hangman-state.json")?
        .set_default("dictionary_url", "https://api.dicionario-aberto.net")?
        .set_default("request_timeout_secs", 10)?
        .add_source(file)
        .add_source(config::Environment::with_prefix("HANGMAN"))
        .build()?
        .try_deserialize()
}
