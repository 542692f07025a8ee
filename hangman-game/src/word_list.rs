use chrono::{Datelike, NaiveDate};
use hangman_data::Category;
use std::{collections::BTreeMap, fs, io, path::Path};
use thiserror::Error;
use tracing::debug;

const FRUITS: [&str; 15] = [
    "ABACAXI", "BANANA", "CEREJA", "DAMASCO", "FRAMBOESA", "GOIABA", "LARANJA", "MELANCIA",
    "MORANGO", "PESSEGO", "UVA", "KIWI", "MANGA", "PERA", "LIMAO",
];
const ANIMALS: [&str; 15] = [
    "CACHORRO", "GATO", "ELEFANTE", "GIRAFA", "LEAO", "TIGRE", "COBRA", "MACACO", "RAPOSA",
    "CAMELO", "CAVALO", "PORCO", "PATO", "ZEBRA", "LOBO",
];
const COUNTRIES: [&str; 15] = [
    "BRASIL", "PORTUGAL", "ANGOLA", "MOZAMBIQUE", "JAPAO", "CHINA", "ARGENTINA", "MEXICO",
    "CANADA", "ALEMANHA", "FRANCA", "ITALIA", "ESPANHA", "NIGERIA", "INDIA",
];
const OBJECTS: [&str; 15] = [
    "CADEIRA", "MESA", "COMPUTADOR", "CELULAR", "GARRAFA", "LIVRO", "MOCHILA", "CANETA",
    "TECLADO", "VENTILADOR", "RELOGIO", "TELEVISAO", "SOFA", "PRATO", "JANELA",
];

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse word list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no words for category {0}")]
    MissingCategory(Category),
}

#[derive(Clone, Debug)]
pub struct WordList {
    words: BTreeMap<Category, Vec<String>>,
}

impl WordList {
    pub fn builtin() -> Self {
        let words: BTreeMap<Category, Vec<String>> = Category::all()
            .into_iter()
            .map(|c| {
                let list = match c {
                    Category::Fruits => &FRUITS,
                    Category::Animals => &ANIMALS,
                    Category::Countries => &COUNTRIES,
                    Category::Objects => &OBJECTS,
                };
                (c, list.iter().map(|w| w.to_string()).collect())
            })
            .collect();
        Self { words }
    }

    /// Every category needs at least one word. Blank entries are dropped.
    pub fn new(words: BTreeMap<Category, Vec<String>>) -> Result<Self, WordListError> {
        let mut cleaned = BTreeMap::new();
        for category in Category::all() {
            let list: Vec<String> = words
                .get(&category)
                .into_iter()
                .flatten()
                .map(|w| w.trim().to_uppercase())
                .filter(|w| !w.is_empty())
                .collect();
            if list.is_empty() {
                return Err(WordListError::MissingCategory(category));
            }
            cleaned.insert(category, list);
        }
        Ok(Self { words: cleaned })
    }

    pub fn load(path: &Path) -> Result<Self, WordListError> {
        debug!("loading word list from {}", path.display());
        let file = fs::read_to_string(path)?;
        Self::new(serde_json::from_str(&file)?)
    }

    pub fn words(&self, category: Category) -> &[String] {
        self.words.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn daily_word(&self, category: Category, date: NaiveDate) -> String {
        let words = self.words(category);
        if words.is_empty() {
            return String::new();
        }
        let index = daily_key(date) % words.len() as u64;
        words[index as usize].to_uppercase()
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Year, month and day written one after another as a decimal number, without padding.
/// 2024-03-07 gives `202437`, 2024-11-07 and 2024-01-17 both give `2024117`.
pub fn daily_key(date: NaiveDate) -> u64 {
    let year = u64::from(date.year().unsigned_abs());
    let month = u64::from(date.month());
    let day = u64::from(date.day());
    concat_digits(concat_digits(year, month), day)
}

pub fn daily_category(date: NaiveDate) -> Category {
    let categories = Category::all();
    categories[(daily_key(date) % categories.len() as u64) as usize]
}

fn concat_digits(head: u64, tail: u64) -> u64 {
    let mut shift = 10;
    while shift <= tail {
        shift *= 10;
    }
    head * shift + tail
}
