use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};
use thiserror::Error;

pub const MAX_ERRORS: u32 = 6;

#[derive(Copy, Clone, Debug, DeserializeFromStr, Eq, Hash, Ord, PartialEq, PartialOrd, SerializeDisplay)]
pub enum Category {
    Fruits,
    Animals,
    Countries,
    Objects,
}

impl Category {
    /// All categories, in the order used to derive the category of the day.
    pub fn all() -> Vec<Self> {
        vec![Self::Fruits, Self::Animals, Self::Countries, Self::Objects]
    }

    pub fn random() -> Self {
        *Self::all()
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Self::Fruits)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Fruits => "Frutas",
            Category::Animals => "Animais",
            Category::Countries => "Países",
            Category::Objects => "Objetos",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "frutas" | "fruits" => Ok(Self::Fruits),
            "animais" | "animals" => Ok(Self::Animals),
            "países" | "paises" | "countries" => Ok(Self::Countries),
            "objetos" | "objects" => Ok(Self::Objects),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Copy, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "data")]
pub enum GameMode {
    Daily(Category),
    Infinite,
}

impl Display for GameMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Daily(category) => write!(f, "Category: {category}"),
            GameMode::Infinite => write!(f, "Infinite mode"),
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameState::InProgress => None,
            GameState::Won => Some(Outcome::Won),
            GameState::Lost => Some(Outcome::Lost),
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessResult {
    Correct,
    Incorrect,
    AlreadyGuessed,
    AlreadyTerminal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_category() {
        assert_eq!(Category::from_str("Frutas"), Ok(Category::Fruits));
        assert_eq!(Category::from_str("PAÍSES"), Ok(Category::Countries));
        assert_eq!(Category::from_str("paises"), Ok(Category::Countries));
        assert_eq!(Category::from_str(" objects "), Ok(Category::Objects));
        assert!(Category::from_str("Cores").is_err());

        for category in Category::all() {
            assert_eq!(Category::from_str(&category.to_string()), Ok(category));
        }
    }

    #[test]
    fn category_serializes_as_name() {
        let json = serde_json::to_string(&Category::Countries).unwrap();
        assert_eq!(json, "\"Países\"");
        let category: Category = serde_json::from_str("\"Animais\"").unwrap();
        assert_eq!(category, Category::Animals);
    }

    #[test]
    fn theme_toggle() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn terminal_states() {
        assert!(!GameState::InProgress.is_terminal());
        assert_eq!(GameState::Won.outcome(), Some(Outcome::Won));
        assert_eq!(GameState::Lost.outcome(), Some(Outcome::Lost));
        assert_eq!(GameState::InProgress.outcome(), None);
    }
}
