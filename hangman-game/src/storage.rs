use chrono::NaiveDate;
use hangman_data::{Category, Theme};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    collections::{BTreeMap, HashMap},
    fs, io,
    path::PathBuf,
};
use thiserror::Error;
use tracing::debug;

pub const LAST_PLAYED_DATE: &str = "lastPlayedDate";
pub const INFINITE_WIN_STREAK: &str = "infiniteWinStreak";
pub const THEME_PREFERENCE: &str = "themePreference";

pub fn daily_word_key(category: Category, date: NaiveDate) -> String {
    format!("dailyWord:{category}:{date}")
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize data: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn store<S: Serialize + ?Sized>(&mut self, key: &str, data: &S) -> Result<(), StorageError> {
        self.set_item(key, &serde_json::to_string(data)?)
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        if let Some(data) = self.get_item(key)? {
            Ok(Some(serde_json::from_str(&data)?))
        } else {
            Ok(None)
        }
    }

    fn last_played_date(&self) -> Result<Option<NaiveDate>, StorageError> {
        self.load(LAST_PLAYED_DATE)
    }

    fn set_last_played_date(&mut self, date: NaiveDate) -> Result<(), StorageError> {
        self.store(LAST_PLAYED_DATE, &date)
    }

    fn cached_daily_word(
        &self,
        category: Category,
        date: NaiveDate,
    ) -> Result<Option<String>, StorageError> {
        self.load(&daily_word_key(category, date))
    }

    fn cache_daily_word(
        &mut self,
        category: Category,
        date: NaiveDate,
        word: &str,
    ) -> Result<(), StorageError> {
        self.store(&daily_word_key(category, date), word)
    }

    fn streak(&self) -> Result<u32, StorageError> {
        Ok(self.load(INFINITE_WIN_STREAK)?.unwrap_or(0))
    }

    fn set_streak(&mut self, streak: u32) -> Result<(), StorageError> {
        self.store(INFINITE_WIN_STREAK, &streak)
    }

    fn theme(&self) -> Result<Theme, StorageError> {
        Ok(self.load(THEME_PREFERENCE)?.unwrap_or_default())
    }

    fn set_theme(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.store(THEME_PREFERENCE, &theme)
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage(HashMap<String, String>);

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.0.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// A missing file starts out empty
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no state file at {}, starting fresh", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, items })
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.clone();
        items.insert(key.to_string(), value.to_string());
        fs::write(&self.path, serde_json::to_string_pretty(&items)?)?;
        self.items = items;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hangman-{name}-{}.json", std::process::id()))
    }

    #[test]
    fn typed_items() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.last_played_date().unwrap(), None);
        assert_eq!(storage.streak().unwrap(), 0);
        assert_eq!(storage.theme().unwrap(), Theme::Dark);

        storage.set_last_played_date(date(2024, 3, 7)).unwrap();
        storage.set_streak(4).unwrap();
        storage.set_theme(Theme::Light).unwrap();
        storage
            .cache_daily_word(Category::Countries, date(2024, 3, 7), "JAPÃO")
            .unwrap();

        assert_eq!(storage.last_played_date().unwrap(), Some(date(2024, 3, 7)));
        assert_eq!(storage.streak().unwrap(), 4);
        assert_eq!(storage.theme().unwrap(), Theme::Light);
        assert_eq!(
            storage
                .cached_daily_word(Category::Countries, date(2024, 3, 7))
                .unwrap()
                .as_deref(),
            Some("JAPÃO")
        );
        assert_eq!(
            storage.cached_daily_word(Category::Countries, date(2024, 3, 8)).unwrap(),
            None
        );
    }

    #[test]
    fn conceptual_keys() {
        let mut storage = MemoryStorage::new();
        storage.set_last_played_date(date(2024, 3, 7)).unwrap();
        storage.set_streak(2).unwrap();
        storage
            .cache_daily_word(Category::Fruits, date(2024, 3, 7), "MANGA")
            .unwrap();

        assert_eq!(
            storage.get_item("lastPlayedDate").unwrap().as_deref(),
            Some("\"2024-03-07\"")
        );
        assert_eq!(storage.get_item("infiniteWinStreak").unwrap().as_deref(), Some("2"));
        assert!(storage
            .get_item("dailyWord:Frutas:2024-03-07")
            .unwrap()
            .is_some());
    }

    #[test]
    fn file_storage_persists() {
        let path = temp_path("persist");
        let _ = fs::remove_file(&path);

        let mut storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.streak().unwrap(), 0);
        storage.set_streak(3).unwrap();
        storage.set_theme(Theme::Light).unwrap();
        drop(storage);

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.streak().unwrap(), 3);
        assert_eq!(storage.theme().unwrap(), Theme::Light);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn failed_write_keeps_previous_state() {
        let dir = std::env::temp_dir().join(format!("hangman-missing-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let mut storage = FileStorage::open(dir.join("state.json")).unwrap();
        assert!(matches!(
            storage.set_last_played_date(date(2024, 3, 7)),
            Err(StorageError::Io(_))
        ));
        assert_eq!(storage.last_played_date().unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            FileStorage::open(&path),
            Err(StorageError::SerdeError(_))
        ));
        fs::remove_file(&path).unwrap();
    }
}
