//! Event handling infrastructure
//!
//! Polls crossterm for terminal events with a tick timeout and decides
//! which key presses belong to the composer's textarea.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::actions::{Action, Focus};
use super::state::AppState;

/// Terminal events the loop reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// No input within the tick rate
    Tick,
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Resize(w, h) => Action::Resize(w, h),
            TuiEvent::Tick => Action::Tick,
        }
    }
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event, blocking up to tick_rate duration
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(TuiEvent::Tick);
        }

        match event::read()? {
            // Windows reports releases too; only presses act
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(TuiEvent::Key(key)),
            CrosstermEvent::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
            _ => Ok(TuiEvent::Tick),
        }
    }
}

/// Keys the composer never types: they submit, switch focus, toggle help or
/// quit.
pub fn is_composer_command(key: &KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::Enter, _)
            | (KeyCode::Tab, _)
            | (KeyCode::Esc, _)
            | (KeyCode::F(_), _)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL)
    )
}

/// Whether this key press should be typed into the composer
pub fn routes_to_composer(state: &AppState, key: &KeyEvent) -> bool {
    state.focus == Focus::Composer && !state.overlay_visible() && !is_composer_command(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_event_handler_creation() {
        let handler = EventHandler::new(100);
        assert_eq!(handler.tick_rate, Duration::from_millis(100));
    }

    #[test]
    fn test_custom_tick_rate() {
        let handler = EventHandler::new(250);
        assert_eq!(handler.tick_rate, Duration::from_millis(250));
    }

    #[test]
    fn test_event_into_action() {
        assert_eq!(Action::from(TuiEvent::Tick), Action::Tick);
        assert_eq!(Action::from(TuiEvent::Resize(80, 24)), Action::Resize(80, 24));
    }

    #[test]
    fn test_letters_route_to_composer_when_focused() {
        let mut state = AppState::new();
        assert!(!routes_to_composer(&state, &key(KeyCode::Char('q'))));

        state.focus = Focus::Composer;
        assert!(routes_to_composer(&state, &key(KeyCode::Char('q'))));
        assert!(routes_to_composer(&state, &key(KeyCode::Backspace)));
    }

    #[test]
    fn test_commands_never_route_to_composer() {
        let mut state = AppState::new();
        state.focus = Focus::Composer;

        assert!(!routes_to_composer(&state, &key(KeyCode::Enter)));
        assert!(!routes_to_composer(&state, &key(KeyCode::Tab)));
        assert!(!routes_to_composer(&state, &key(KeyCode::Esc)));
        assert!(!routes_to_composer(&state, &key(KeyCode::F(1))));
        assert!(!routes_to_composer(
            &state,
            &KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_overlay_blocks_composer_input() {
        let mut state = AppState::new();
        state.focus = Focus::Composer;
        state.help_visible = true;

        assert!(!routes_to_composer(&state, &key(KeyCode::Char('x'))));
    }
}
