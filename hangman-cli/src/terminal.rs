use colored::{ColoredString, Colorize};
use hangman_data::{GameMode, Outcome, Theme, MAX_ERRORS};
use hangman_game::{Feedback, Notice, Renderer, Word};

pub struct TerminalRenderer {
    theme: Theme,
}

impl TerminalRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn paint(&self, s: &str) -> ColoredString {
        match self.theme {
            Theme::Dark => s.bright_white(),
            Theme::Light => s.black(),
        }
    }
}

fn figure(stage: u32) -> Vec<String> {
    let part = |n: u32, s: &'static str| if stage >= n { s } else { " " };
    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        // Head
        format!("  {}   |", part(1, "O")),
        // Body and arms
        format!(" {}{}{}  |", part(3, "/"), part(2, "|"), part(4, "\\")),
        // Legs
        format!(" {} {}  |", part(5, "/"), part(6, "\\")),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

impl Renderer for TerminalRenderer {
    fn render_mode(&mut self, mode: GameMode) {
        println!();
        println!("{}", mode.to_string().bold());
    }

    fn render_word_mask(&mut self, word: &Word) {
        println!("\n    {}\n", word.mask().bold());
    }

    fn render_figure_stage(&mut self, stage: u32) {
        for line in figure(stage.min(MAX_ERRORS)) {
            println!("{}", self.paint(&line));
        }
    }

    fn render_outcome(&mut self, outcome: Outcome, word: &str) {
        match outcome {
            Outcome::Won => println!("{}", "You won!".green().bold()),
            Outcome::Lost => println!("{} {}", "You lost! The word was".red().bold(), word.bold()),
        }
    }

    fn render_streak(&mut self, streak: u32) {
        println!("Win streak: {}", streak.to_string().yellow());
    }

    fn render_notice(&mut self, notice: Notice) {
        let message = match notice {
            Notice::AlreadyPlayedToday => "You already played today, come back tomorrow!",
            Notice::WordUnavailable => "Couldn't get a word right now, try again with :next",
            Notice::NotInInfiniteMode => "Skipping words only works in infinite mode (:infinite)",
            Notice::NoGameInProgress => "No game in progress, start one with :daily or :infinite",
        };
        println!("{}", message.italic());
    }

    fn play_feedback(&mut self, feedback: Feedback) {
        if feedback == Feedback::Negative {
            // Terminal bell
            print!("\x07");
        }
    }

    fn celebrate(&mut self) {
        println!("{}", "* . * . * . * . * . *".magenta());
    }

    fn render_theme(&mut self, theme: Theme) {
        self.theme = theme;
        println!("Theme: {theme}");
    }

    fn render_definition(&mut self, word: &str, definition: &str) {
        println!("{}: {definition}", word.bold());
    }
}
