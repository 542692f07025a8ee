use hangman_data::{Letter, ParseLetterError, UiEvent};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, PartialEq)]
pub enum Command {
    Event(UiEvent),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command: {0} (type :help)")]
    Unknown(String),
    #[error("{0}")]
    Letter(#[from] ParseLetterError),
}

pub const HELP: &str = "\
Type a letter to guess it.
  :daily     play the word of the day
  :infinite  play random words
  :next      skip to the next random word
  :define    look up the current word
  :theme     switch between dark and light
  :help      show this message
  :quit      leave";

pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let Some(name) = line.strip_prefix(':') else {
        return Ok(Some(Command::Event(UiEvent::Guess(Letter::from_str(line)?))));
    };
    let command = match name.to_lowercase().as_str() {
        "daily" | "d" => Command::Event(UiEvent::StartDaily),
        "infinite" | "i" => Command::Event(UiEvent::StartInfinite),
        "next" | "n" => Command::Event(UiEvent::NextInfiniteWord),
        "define" => Command::Event(UiEvent::Define),
        "theme" | "t" => Command::Event(UiEvent::ToggleTheme),
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(line.to_string())),
    };
    Ok(Some(command))
}
