use crate::normalize::{normalize, normalize_letter};
use hangman_data::Letter;
use std::fmt::{Display, Formatter};
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Clone, Debug)]
pub struct Word {
    target: Vec<String>,
    normalized: Vec<String>,
    current: Vec<Character>,
}

#[derive(Debug, Error, PartialEq)]
#[error("word contains no letters")]
pub struct EmptyWord;

#[derive(Clone, Debug, PartialEq)]
enum Character {
    Unknown,
    Guessed(String),
}

impl Display for Character {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Character::Unknown => write!(f, "_"),
            Character::Guessed(s) => write!(f, "{}", s),
        }
    }
}

impl Word {
    /// Uppercases `word`. Anything that isn't a letter (hyphens, spaces) is visible from the start.
    pub fn new(word: &str) -> Result<Self, EmptyWord> {
        let target: Vec<String> = word
            .trim()
            .to_uppercase()
            .graphemes(true)
            .map(|s| s.to_string())
            .collect();
        let normalized: Vec<String> = target.iter().map(|g| normalize(g)).collect();
        if !normalized.iter().any(|g| is_letter(g)) {
            return Err(EmptyWord);
        }
        let current = target
            .iter()
            .zip(&normalized)
            .map(|(t, n)| {
                if is_letter(n) {
                    Character::Unknown
                } else {
                    Character::Guessed(t.clone())
                }
            })
            .collect();
        Ok(Self {
            target,
            normalized,
            current,
        })
    }

    pub fn target(&self) -> String {
        self.target.join("")
    }

    pub fn mask(&self) -> String {
        self.current
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(" ")
    }

    pub fn contains(&self, letter: Letter) -> bool {
        let letter = normalize_letter(letter);
        self.normalized.iter().any(|n| *n == letter)
    }

    pub fn reveal(&mut self, letter: Letter) -> bool {
        let letter = normalize_letter(letter);
        let mut found = false;
        for (i, _) in self
            .normalized
            .iter()
            .enumerate()
            .filter(|(_, n)| **n == letter)
        {
            self.current[i] = Character::Guessed(self.target[i].clone());
            found = true;
        }
        found
    }

    pub fn is_solved(&self) -> bool {
        self.current
            .iter()
            .all(|c| matches!(c, Character::Guessed(_)))
    }

    pub fn solve(&mut self) {
        self.current = self
            .target
            .iter()
            .map(|s| Character::Guessed(s.clone()))
            .collect();
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mask())
    }
}

fn is_letter(normalized: &str) -> bool {
    normalized.chars().any(char::is_alphabetic)
}
