//! Game logic

use crate::{normalize::normalize_letter, word::Word};
use hangman_data::{GameMode, GameState, GuessResult, Letter, MAX_ERRORS};
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct Session {
    mode: GameMode,
    word: Word,
    revealed: BTreeSet<Letter>,
    guessed: BTreeSet<String>,
    errors: u32,
    state: GameState,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Guess {
    pub result: GuessResult,
    pub state: GameState,
    pub errors: u32,
    /// Whether this guess moved the game into a terminal state
    pub finished: bool,
}

impl Session {
    pub fn new(mode: GameMode, word: Word) -> Self {
        Self {
            mode,
            word,
            revealed: BTreeSet::new(),
            guessed: BTreeSet::new(),
            errors: 0,
            state: GameState::InProgress,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn revealed(&self) -> &BTreeSet<Letter> {
        &self.revealed
    }

    pub fn errors(&self) -> u32 {
        self.errors
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn guess(&mut self, letter: Letter) -> Guess {
        if self.state.is_terminal() {
            return self.report(GuessResult::AlreadyTerminal, false);
        }
        // Accented and plain forms of a letter count as the same guess
        if !self.guessed.insert(normalize_letter(letter)) {
            return self.report(GuessResult::AlreadyGuessed, false);
        }

        let result = if self.word.reveal(letter) {
            self.revealed.insert(letter);
            GuessResult::Correct
        } else {
            self.errors += 1;
            GuessResult::Incorrect
        };
        debug!("guessed {letter}: {result:?}, {} errors", self.errors);

        if self.word.is_solved() {
            self.state = GameState::Won;
        } else if self.errors >= MAX_ERRORS {
            self.state = GameState::Lost;
        }
        self.report(result, self.state.is_terminal())
    }

    fn report(&self, result: GuessResult, finished: bool) -> Guess {
        Guess {
            result,
            state: self.state,
            errors: self.errors,
            finished,
        }
    }
}
