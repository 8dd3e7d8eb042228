//! Submission guard for new jokes
//!
//! The store accepts any text. Front ends call into this module before
//! dispatching `AddJoke` so that empty jokes never reach the list. Any
//! other text, whitespace included, passes through untouched.

use crate::action::JokeAction;
use crate::error::{JokeboxError, Result};

pub const EMPTY_JOKE: &str = "Joke cannot be empty";

/// Result of checking composer text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeValidation {
    /// Whether the text may be submitted
    pub valid: bool,
    /// Reasons the text was rejected
    pub errors: Vec<String>,
    /// Character count, for display
    pub char_count: usize,
}

/// Check joke text without dispatching anything
pub fn validate_joke_text(text: &str) -> JokeValidation {
    let mut errors = Vec::new();
    if text.is_empty() {
        errors.push(EMPTY_JOKE.to_string());
    }

    JokeValidation {
        valid: errors.is_empty(),
        errors,
        char_count: text.chars().count(),
    }
}

/// The `AddJoke` action for this text, or `None` when it must be suppressed
pub fn submit_action(text: &str) -> Option<JokeAction> {
    if validate_joke_text(text).valid {
        Some(JokeAction::AddJoke(text.to_string()))
    } else {
        None
    }
}

/// Reject an `AddJoke` carrying empty text; every other action passes.
pub fn guard(action: JokeAction) -> Result<JokeAction> {
    match action {
        JokeAction::AddJoke(ref text) if !validate_joke_text(text).valid => {
            Err(JokeboxError::InvalidInput(EMPTY_JOKE.to_string()))
        }
        other => Ok(other),
    }
}
