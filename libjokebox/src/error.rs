//! Error types for Jokebox
//!
//! The store itself never fails. These errors cover the edges around it:
//! reading configuration, parsing serialized actions and rejecting input
//! before it reaches the store.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, JokeboxError>;

#[derive(Error, Debug)]
pub enum JokeboxError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Action error: {0}")]
    Action(#[from] ActionError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl JokeboxError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JokeboxError::InvalidInput(_) => 3,
            JokeboxError::Config(_) => 1,
            JokeboxError::Action(_) => 1,
            JokeboxError::Io(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Malformed action: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Malformed payload for {kind}: {source}")]
    Payload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing payload for {0}")]
    MissingPayload(String),
}
