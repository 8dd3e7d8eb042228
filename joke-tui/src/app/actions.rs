//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Actions that change the
//! joke list itself end up as `Action::Store`, which carries a
//! `libjokebox::JokeAction`.

use crossterm::event::KeyEvent;
use libjokebox::JokeAction;

/// Actions that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Quit the application
    Quit,

    ShowHelp,
    HideHelp,

    /// Move keyboard focus to the composer
    FocusComposer,

    /// Move keyboard focus to the joke list
    FocusList,

    /// Move the selection one joke down the ranking
    SelectNext,

    /// Move the selection one joke up the ranking
    SelectPrevious,

    // === Joke list ===
    /// Rate the selected joke one step up
    RateSelectedUp,

    /// Rate the selected joke one step down
    RateSelectedDown,

    /// Delete the selected joke
    DeleteSelected,

    /// Apply a store action to the joke list
    Store(JokeAction),

    // === Composer Actions ===
    /// Input content changed in composer
    ComposerInputChanged(String),

    /// Validation completed with results
    ComposerValidationResult {
        valid: bool,
        errors: Vec<String>,
        char_count: usize,
    },

    /// User pressed Enter in the composer
    ComposerSubmit,

    /// Reset the composer to empty
    ComposerClear,

    // === Status Bar ===
    SetStatus(String),
}

/// Which widget receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The ranked joke list
    #[default]
    List,

    /// The "Add a joke" input
    Composer,
}
