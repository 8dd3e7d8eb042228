//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).
//! The joke list is owned here and only ever replaced through
//! `libjokebox::apply`.

use libjokebox::config::UiConfig;
use libjokebox::validation::EMPTY_JOKE;
use libjokebox::{ranked, Config, Joke, JokeList};

use super::actions::Focus;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub should_quit: bool,

    /// Widget receiving keystrokes
    pub focus: Focus,

    pub help_visible: bool,

    /// Authoritative joke collection
    pub jokes: JokeList,

    /// Index of the selected joke in the ranked view
    pub selected: usize,

    pub composer: ComposerState,

    pub status: StatusBarState,

    pub config: UiConfig,
}

/// Composer ("Add a joke") state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerState {
    /// Current input content
    pub content: String,

    /// Is content submittable?
    pub valid: bool,

    /// Validation errors
    pub errors: Vec<String>,

    pub char_count: usize,

    /// A submit was refused; show `errors` until the next edit
    pub show_errors: bool,
}

/// Status bar state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBarState {
    pub message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Default for ComposerState {
    fn default() -> Self {
        Self {
            content: String::new(),
            valid: false, // Empty content is invalid
            errors: vec![EMPTY_JOKE.to_string()],
            char_count: 0,
            show_errors: false,
        }
    }
}

impl AppState {
    /// Seeded state with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state for a loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            should_quit: false,
            focus: Focus::default(),
            help_visible: false,
            jokes: config.initial_list(),
            selected: 0,
            composer: ComposerState::default(),
            status: StatusBarState::default(),
            config: config.ui.clone(),
        }
    }

    /// Ranked view of the joke list, as displayed
    pub fn ranked(&self) -> Vec<&Joke> {
        ranked(&self.jokes)
    }

    pub fn selected_joke(&self) -> Option<&Joke> {
        self.ranked().get(self.selected).copied()
    }

    /// Composer content may be submitted
    pub fn can_submit(&self) -> bool {
        self.composer.valid
    }

    /// The help overlay is capturing keystrokes
    pub fn overlay_visible(&self) -> bool {
        self.help_visible
    }
}
