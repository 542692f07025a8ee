use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};
use thiserror::Error;

#[derive(Copy, Clone, Debug, DeserializeFromStr, Eq, Hash, Ord, PartialEq, PartialOrd, SerializeDisplay)]
pub struct Letter(char);

#[derive(Debug, Error, PartialEq)]
pub enum ParseLetterError {
    #[error("a guess must be exactly one character")]
    InvalidLength,
    #[error("'{0}' is not a letter")]
    NotAlphabetic(char),
}

impl Letter {
    pub fn new(c: char) -> Result<Self, ParseLetterError> {
        if !c.is_alphabetic() {
            return Err(ParseLetterError::NotAlphabetic(c));
        }
        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => Ok(Self(u)),
            // e.g. 'ß' uppercases to "SS"
            _ => Err(ParseLetterError::InvalidLength),
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = ParseLetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl FromStr for Letter {
    type Err = ParseLetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(ParseLetterError::InvalidLength),
        }
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
