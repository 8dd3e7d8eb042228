//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`, with no side effects. Joke list changes are
//! forwarded to `libjokebox::apply`; everything else here is selection,
//! focus and overlay bookkeeping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libjokebox::validation::{submit_action, validate_joke_text};
use libjokebox::view::{rank_of, rank_of_newest};
use libjokebox::{apply, JokeAction, JokeId};

use super::actions::{Action, Focus};
use super::state::{AppState, ComposerState, StatusBarState};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => match key_to_action(&state, key) {
            Some(action) => reduce(state, action),
            None => state,
        },
        Action::Tick => state,
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Navigation ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::FocusComposer => AppState {
            focus: Focus::Composer,
            ..state
        },

        Action::FocusList => AppState {
            focus: Focus::List,
            ..state
        },

        Action::SelectNext => {
            let selected = (state.selected + 1).min(state.jokes.len().saturating_sub(1));
            AppState { selected, ..state }
        }

        Action::SelectPrevious => AppState {
            selected: state.selected.saturating_sub(1),
            ..state
        },

        // === Joke list ===
        Action::RateSelectedUp => match state.selected_joke().map(|j| (j.id, j.rated_up())) {
            Some((id, rating)) => rate(state, id, rating),
            None => state,
        },

        Action::RateSelectedDown => match state.selected_joke().map(|j| (j.id, j.rated_down())) {
            Some((id, rating)) => rate(state, id, rating),
            None => state,
        },

        Action::DeleteSelected => match state.selected_joke().map(|j| j.id) {
            Some(id) => {
                let state = reduce(state, Action::Store(JokeAction::DeleteJoke { id }));
                reduce(state, Action::SetStatus(format!("Deleted joke #{}", id)))
            }
            None => state,
        },

        Action::Store(action) => {
            let jokes = apply(state.jokes, action);
            clamp_selection(AppState { jokes, ..state })
        }

        // === Composer Actions ===
        Action::ComposerInputChanged(content) => {
            let char_count = content.chars().count();
            AppState {
                composer: ComposerState {
                    content,
                    char_count,
                    show_errors: false,
                    // Validation result arrives separately
                    ..state.composer
                },
                ..state
            }
        }

        Action::ComposerValidationResult {
            valid,
            errors,
            char_count,
        } => AppState {
            composer: ComposerState {
                valid,
                errors,
                char_count,
                ..state.composer
            },
            ..state
        },

        Action::ComposerSubmit => match submit_action(&state.composer.content) {
            Some(action) => {
                let state = reduce(state, Action::Store(action));
                let state = reduce(state, Action::ComposerClear);
                let state = select_newest(state);
                reduce(state, Action::SetStatus("Joke added".to_string()))
            }
            None => {
                let validation = validate_joke_text(&state.composer.content);
                let state = reduce(
                    state,
                    Action::ComposerValidationResult {
                        valid: validation.valid,
                        errors: validation.errors,
                        char_count: validation.char_count,
                    },
                );
                AppState {
                    composer: ComposerState {
                        show_errors: true,
                        ..state.composer
                    },
                    ..state
                }
            }
        },

        Action::ComposerClear => AppState {
            composer: ComposerState::default(),
            ..state
        },

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },
    }
}

/// Map a key press to the action it triggers, if any
///
/// This is where keybindings are defined. Keys typed into the composer are
/// routed to the textarea by the event loop before they get here; see
/// `event::is_composer_command`.
pub fn key_to_action(state: &AppState, key: KeyEvent) -> Option<Action> {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Some(Action::Quit),

        (KeyCode::F(1), _) => {
            return Some(if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            });
        }

        (KeyCode::Esc, _) if state.help_visible => return Some(Action::HideHelp),
        (KeyCode::Esc, _) if state.focus == Focus::Composer => return Some(Action::FocusList),

        _ => {}
    }

    if state.overlay_visible() {
        return None;
    }

    match state.focus {
        Focus::List => list_key(key),
        Focus::Composer => composer_key(key),
    }
}

/// Joke list keybindings
fn list_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPrevious),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::RateSelectedUp),
        KeyCode::Char('-') => Some(Action::RateSelectedDown),
        KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteSelected),
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => Some(Action::FocusComposer),
        _ => None,
    }
}

/// Composer keybindings
fn composer_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::ComposerSubmit),
        KeyCode::Tab => Some(Action::FocusList),
        _ => None,
    }
}

/// Store a new rating and keep the cursor on the rated joke
fn rate(state: AppState, id: JokeId, rating: i64) -> AppState {
    let state = reduce(state, Action::Store(JokeAction::UpdateRate { id, rating }));
    let state = select_id(state, id);
    reduce(state, Action::SetStatus(format!("Rated joke #{} at {}", id, rating)))
}

fn select_id(state: AppState, id: JokeId) -> AppState {
    match rank_of(&state.jokes, id) {
        Some(selected) => AppState { selected, ..state },
        None => state,
    }
}

fn select_newest(state: AppState) -> AppState {
    match rank_of_newest(&state.jokes) {
        Some(selected) => AppState { selected, ..state },
        None => state,
    }
}

fn clamp_selection(state: AppState) -> AppState {
    let selected = state.selected.min(state.jokes.len().saturating_sub(1));
    AppState { selected, ..state }
}
