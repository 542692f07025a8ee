use crate::word::Word;
use hangman_data::{GameMode, Outcome, Theme};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Feedback {
    Positive,
    Negative,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Notice {
    /// The daily game was already started today
    AlreadyPlayedToday,
    WordUnavailable,
    NotInInfiniteMode,
    NoGameInProgress,
}

/// The figure has [`hangman_data::MAX_ERRORS`] stages, stage `n` is drawn when the `n`th wrong guess happens.
/// Stage 0 is the empty gallows of a new game.
pub trait Renderer {
    fn render_mode(&mut self, mode: GameMode);

    fn render_word_mask(&mut self, word: &Word);

    fn render_figure_stage(&mut self, stage: u32);

    /// `word` is the full target word
    fn render_outcome(&mut self, outcome: Outcome, word: &str);

    fn render_streak(&mut self, streak: u32);

    fn render_notice(&mut self, notice: Notice);

    fn play_feedback(&mut self, _feedback: Feedback) {}

    fn celebrate(&mut self) {}

    fn render_theme(&mut self, _theme: Theme) {}

    fn render_definition(&mut self, _word: &str, _definition: &str) {}
}
