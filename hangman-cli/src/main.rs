use crate::{
    command::{parse_command, Command, HELP},
    config::load_config,
    terminal::TerminalRenderer,
};
use chrono::{Local, NaiveDate};
use clap::Parser;
use hangman_data::{Category, UiEvent};
use hangman_game::{
    word_list::daily_category, DictionaryClient, FileStorage, SessionController, Storage, WordList,
    WordSource,
};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

mod command;
mod config;
mod terminal;

/// Guess the hidden word one letter at a time
#[derive(Parser)]
#[command(name = "hangman", version)]
struct Args {
    /// Play random words instead of the word of the day
    #[arg(long)]
    infinite: bool,
    /// Category of the daily word, derived from the date if omitted
    #[arg(long)]
    category: Option<Category>,
    /// Config file, `Hangman.toml` in the working directory by default
    #[arg(long)]
    config: Option<PathBuf>,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(args.config)?;

    info!("starting hangman");
    let words = match &config.word_list {
        Some(path) => WordList::load(path)?,
        None => WordList::builtin(),
    };
    let storage = FileStorage::open(&config.store_path)?;
    let client = DictionaryClient::new(&config.dictionary_url, config.request_timeout())?;
    let renderer = TerminalRenderer::new(storage.theme()?);

    let category = args.category.unwrap_or_else(|| daily_category(today()));
    let mut controller = SessionController::new(storage, WordSource::new(words, client), renderer)
        .with_category(category);

    println!("{HELP}");
    let first = if args.infinite {
        UiEvent::StartInfinite
    } else {
        UiEvent::StartDaily
    };
    controller.handle(first, today()).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(Some(Command::Event(event))) => controller.handle(event, today()).await?,
            Ok(Some(Command::Help)) => println!("{HELP}"),
            Ok(Some(Command::Quit)) => break,
            Ok(None) => {}
            Err(e) => println!("{e}"),
        }
    }
    Ok(())
}
