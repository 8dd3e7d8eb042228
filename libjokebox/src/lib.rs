//! Jokebox - a ranked joke list
//!
//! This library holds the joke list store and everything the front ends
//! share: the action wire format, the ranked view, the submission guard,
//! configuration and logging.

pub mod action;
pub mod config;
pub mod error;
pub mod logging;
pub mod seed;
pub mod store;
pub mod types;
pub mod validation;
pub mod view;

// Re-export commonly used types
pub use action::JokeAction;
pub use config::Config;
pub use error::{JokeboxError, Result};
pub use store::{apply, IdPolicy, JokeList};
pub use types::{Joke, JokeId, Rating};
pub use view::ranked;
