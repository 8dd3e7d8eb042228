//! Application module
//!
//! - Actions: what can happen
//! - State: what is true right now, including the joke list
//! - Reducer: pure function (State, Action) -> State
//!
//! Joke list changes are delegated to `libjokebox::apply`; this layer adds
//! selection, focus, the composer and overlays on top.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, Focus};
pub use reducer::{key_to_action, reduce};
pub use state::{AppState, ComposerState, StatusBarState};
