use crate::{
    game::{Guess, Session},
    render::{Feedback, Notice, Renderer},
    storage::{Storage, StorageError},
    word::{EmptyWord, Word},
    word_source::{SourceError, WordService, WordSource},
};
use chrono::NaiveDate;
use hangman_data::{Category, GameMode, GuessResult, Letter, Outcome, Theme, UiEvent};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("failed to access storage: {0}")]
    Storage(#[from] StorageError),
    #[error("invalid word: {0}")]
    Word(#[from] EmptyWord),
    #[error("can't skip a word outside of infinite mode")]
    NotInfinite,
}

#[derive(Debug)]
pub enum DailyStart<'a> {
    Started(&'a Session),
    /// The daily game was already started today
    Blocked,
}

pub struct SessionController<S, W, R> {
    storage: S,
    source: WordSource<W>,
    renderer: R,
    category: Category,
    infinite: bool,
    session: Option<Session>,
}

impl<S: Storage, W: WordService, R: Renderer> SessionController<S, W, R> {
    pub fn new(storage: S, source: WordSource<W>, renderer: R) -> Self {
        Self {
            storage,
            source,
            renderer,
            category: Category::random(),
            infinite: false,
            session: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// At most one daily game may be started per day, whatever its category
    pub fn start_daily_session(&mut self, today: NaiveDate) -> Result<DailyStart<'_>, SessionError> {
        if self.storage.last_played_date()? == Some(today) {
            info!("daily game of {today} was already played");
            return Ok(DailyStart::Blocked);
        }
        self.storage.set_last_played_date(today)?;

        let category = self.category;
        let word = Word::new(&self.daily_word(category, today)?)?;
        info!("starting daily game of {today} ({category})");
        self.infinite = false;
        Ok(DailyStart::Started(
            self.begin(Session::new(GameMode::Daily(category), word)),
        ))
    }

    /// The first lookup of a day stores the word, later lookups return the stored word even if the
    /// word list changed in between.
    pub fn daily_word(&mut self, category: Category, date: NaiveDate) -> Result<String, StorageError> {
        if let Some(word) = self.storage.cached_daily_word(category, date)? {
            debug!("using stored daily word for {category} on {date}");
            return Ok(word);
        }
        let word = self.source.daily_word(category, date);
        self.storage.cache_daily_word(category, date, &word)?;
        Ok(word)
    }

    /// Drops whatever game is running, even when no new word can be fetched
    pub async fn start_infinite_session(&mut self) -> Result<&Session, SessionError> {
        info!("starting infinite mode");
        self.session = None;
        self.infinite = true;
        let streak = self.storage.streak()?;
        self.renderer.render_streak(streak);
        self.next_infinite_word().await
    }

    /// If no word can be fetched the current game stays.
    pub async fn advance_infinite_session(&mut self) -> Result<&Session, SessionError> {
        if !self.infinite {
            return Err(SessionError::NotInfinite);
        }
        self.next_infinite_word().await
    }

    async fn next_infinite_word(&mut self) -> Result<&Session, SessionError> {
        let word = Word::new(&self.source.random_word().await?)?;
        Ok(self.begin(Session::new(GameMode::Infinite, word)))
    }

    fn begin(&mut self, session: Session) -> &Session {
        self.renderer.render_mode(session.mode());
        self.renderer.render_figure_stage(0);
        self.renderer.render_word_mask(session.word());
        self.session.insert(session)
    }

    pub fn on_infinite_outcome(&mut self, outcome: Outcome) -> Result<u32, StorageError> {
        let streak = match outcome {
            Outcome::Won => self.storage.streak()?.saturating_add(1),
            Outcome::Lost => 0,
        };
        self.storage.set_streak(streak)?;
        info!("infinite mode streak is now {streak}");
        self.renderer.render_streak(streak);
        Ok(streak)
    }

    /// `None` if no game was started yet
    pub fn guess(&mut self, letter: Letter) -> Option<Guess> {
        let session = self.session.as_mut()?;
        let guess = session.guess(letter);
        let renderer = &mut self.renderer;

        match guess.result {
            GuessResult::Correct => {
                renderer.play_feedback(Feedback::Positive);
                renderer.render_word_mask(session.word());
            }
            GuessResult::Incorrect => {
                renderer.play_feedback(Feedback::Negative);
                renderer.render_figure_stage(guess.errors);
                renderer.render_word_mask(session.word());
            }
            GuessResult::AlreadyGuessed | GuessResult::AlreadyTerminal => {
                debug!("ignoring guess {letter}: {:?}", guess.result);
            }
        }

        let mode = session.mode();
        if let (true, Some(outcome)) = (guess.finished, guess.state.outcome()) {
            let target = session.word().target();
            info!("game over: {outcome:?}, the word was {target}");
            if outcome == Outcome::Won {
                renderer.celebrate();
            }
            renderer.render_outcome(outcome, &target);

            if mode == GameMode::Infinite {
                if let Err(e) = self.on_infinite_outcome(outcome) {
                    warn!("failed to update streak: {e}");
                }
            }
        }
        Some(guess)
    }

    pub fn streak(&self) -> Result<u32, StorageError> {
        self.storage.streak()
    }

    pub fn theme(&self) -> Result<Theme, StorageError> {
        self.storage.theme()
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, StorageError> {
        let theme = self.storage.theme()?.toggled();
        self.storage.set_theme(theme)?;
        self.renderer.render_theme(theme);
        Ok(theme)
    }

    pub async fn definition(&mut self) -> Option<String> {
        let word = self.session.as_ref()?.word().target();
        let definition = self.source.definition_for(&word).await;
        self.renderer.render_definition(&word, &definition);
        Some(definition)
    }

    /// A blocked daily game or a missing word is shown as a notice, only storage failures are errors.
    pub async fn handle(&mut self, event: UiEvent, today: NaiveDate) -> Result<(), SessionError> {
        debug!("handling {event:?}");
        let result = match event {
            UiEvent::Guess(letter) => {
                if self.guess(letter).is_none() {
                    self.renderer.render_notice(Notice::NoGameInProgress);
                }
                Ok(())
            }
            UiEvent::StartDaily => match self
                .start_daily_session(today)
                .map(|start| matches!(start, DailyStart::Blocked))
            {
                Ok(true) => {
                    self.renderer.render_notice(Notice::AlreadyPlayedToday);
                    Ok(())
                }
                Ok(false) => Ok(()),
                Err(e) => Err(e),
            },
            UiEvent::StartInfinite => self.start_infinite_session().await.map(|_| ()),
            UiEvent::NextInfiniteWord => self.advance_infinite_session().await.map(|_| ()),
            UiEvent::ToggleTheme => self.toggle_theme().map(|_| ()).map_err(SessionError::from),
            UiEvent::Define => {
                if self.definition().await.is_none() {
                    self.renderer.render_notice(Notice::NoGameInProgress);
                }
                Ok(())
            }
        };

        match result {
            Err(SessionError::Source(e)) => {
                warn!("no word available: {e}");
                self.renderer.render_notice(Notice::WordUnavailable);
                Ok(())
            }
            Err(SessionError::NotInfinite) => {
                self.renderer.render_notice(Notice::NotInInfiniteMode);
                Ok(())
            }
            other => other,
        }
    }
}
