//! Error types for joke-tui
//!
//! Wraps library errors (configuration, logging setup) and terminal I/O
//! errors for unified handling in `main`.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Library error (configuration)
    #[error("{0}")]
    Library(#[from] libjokebox::JokeboxError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl TuiError {
    pub fn exit_code(&self) -> i32 {
        match self {
            TuiError::Library(e) => e.exit_code(),
            TuiError::Terminal(_) => 1,
        }
    }
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
