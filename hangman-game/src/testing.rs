use crate::{
    render::{Feedback, Notice, Renderer},
    word::Word,
    word_source::{SourceError, WordService},
};
use async_trait::async_trait;
use hangman_data::{GameMode, Outcome, Theme};
use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

#[derive(Debug, Default)]
pub struct ScriptedService {
    words: Mutex<VecDeque<String>>,
    definitions: HashMap<String, String>,
    lookups: Mutex<Vec<String>>,
}

impl ScriptedService {
    pub fn with_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            words: Mutex::new(words.into_iter().map(|w| w.to_string()).collect()),
            ..Default::default()
        }
    }

    pub fn with_definition(mut self, word: &str, definition: &str) -> Self {
        self.definitions
            .insert(word.to_string(), definition.to_string());
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl WordService for ScriptedService {
    async fn random_word(&self) -> Result<String, SourceError> {
        self.words
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| SourceError::Unavailable("no words left".to_string()))
    }

    async fn definition(&self, word: &str) -> Result<Option<String>, SourceError> {
        self.lookups.lock().unwrap().push(word.to_string());
        Ok(self.definitions.get(word).cloned())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderEvent {
    Mode(GameMode),
    Mask(String),
    Figure(u32),
    Outcome(Outcome, String),
    Streak(u32),
    Notice(Notice),
    Feedback(Feedback),
    Celebrate,
    Theme(Theme),
    Definition(String, String),
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    pub fn take(&mut self) -> Vec<RenderEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Renderer for RecordingRenderer {
    fn render_mode(&mut self, mode: GameMode) {
        self.events.push(RenderEvent::Mode(mode));
    }

    fn render_word_mask(&mut self, word: &Word) {
        self.events.push(RenderEvent::Mask(word.mask()));
    }

    fn render_figure_stage(&mut self, stage: u32) {
        self.events.push(RenderEvent::Figure(stage));
    }

    fn render_outcome(&mut self, outcome: Outcome, word: &str) {
        self.events
            .push(RenderEvent::Outcome(outcome, word.to_string()));
    }

    fn render_streak(&mut self, streak: u32) {
        self.events.push(RenderEvent::Streak(streak));
    }

    fn render_notice(&mut self, notice: Notice) {
        self.events.push(RenderEvent::Notice(notice));
    }

    fn play_feedback(&mut self, feedback: Feedback) {
        self.events.push(RenderEvent::Feedback(feedback));
    }

    fn celebrate(&mut self) {
        self.events.push(RenderEvent::Celebrate);
    }

    fn render_theme(&mut self, theme: Theme) {
        self.events.push(RenderEvent::Theme(theme));
    }

    fn render_definition(&mut self, word: &str, definition: &str) {
        self.events.push(RenderEvent::Definition(
            word.to_string(),
            definition.to_string(),
        ));
    }
}
