pub mod game;
pub mod normalize;
pub mod render;
pub mod session;
pub mod storage;
pub mod word;
pub mod word_list;
pub mod word_source;

#[cfg(test)]
mod testing;

pub use game::{Guess, Session};
pub use render::{Feedback, Notice, Renderer};
pub use session::{DailyStart, SessionController, SessionError};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use word::Word;
pub use word_list::WordList;
pub use word_source::{DictionaryClient, SourceError, WordService, WordSource};
