//! Joke list store
//!
//! The list is a plain value. Every change goes through [`apply`], a pure
//! function `(JokeList, JokeAction) -> JokeList`:
//!
//! - No I/O, no logging, no hidden state
//! - Total: an id that matches nothing, or an unrecognized action, returns
//!   the list unchanged
//! - Deterministic (same inputs -> same output)
//!
//! The store does not validate joke text. Callers run user input through
//! [`crate::validation`] before dispatching `AddJoke`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::action::JokeAction;
use crate::seed::seed_jokes;
use crate::types::{Joke, JokeId};

/// How ids are minted for added jokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPolicy {
    /// Current list length plus one. Can hand out an id that is still live
    /// once a joke has been deleted.
    Positional,

    /// A counter that only ever moves forward; ids are never reused until the
    /// counter saturates at `JokeId::MAX`.
    #[default]
    Monotonic,
}

impl FromStr for IdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positional" => Ok(IdPolicy::Positional),
            "monotonic" => Ok(IdPolicy::Monotonic),
            _ => Err(format!(
                "Invalid id policy: '{}'. Valid options: positional, monotonic",
                s
            )),
        }
    }
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdPolicy::Positional => write!(f, "positional"),
            IdPolicy::Monotonic => write!(f, "monotonic"),
        }
    }
}

/// The authoritative joke collection, in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeList {
    jokes: Vec<Joke>,
    next_id: JokeId,
    policy: IdPolicy,
}

impl JokeList {
    /// An empty list
    pub fn new(policy: IdPolicy) -> Self {
        Self::from_jokes(Vec::new(), policy)
    }

    /// The five seed jokes
    pub fn seeded(policy: IdPolicy) -> Self {
        Self::from_jokes(seed_jokes(), policy)
    }

    /// Wrap existing jokes; the counter resumes after the highest id present.
    pub fn from_jokes(jokes: Vec<Joke>, policy: IdPolicy) -> Self {
        let next_id = jokes
            .iter()
            .map(|j| j.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        Self {
            jokes,
            next_id,
            policy,
        }
    }

    pub fn jokes(&self) -> &[Joke] {
        &self.jokes
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// First joke carrying this id
    pub fn get(&self, id: JokeId) -> Option<&Joke> {
        self.jokes.iter().find(|j| j.id == id)
    }

    /// Id the next `AddJoke` will receive
    pub fn peek_next_id(&self) -> JokeId {
        match self.policy {
            IdPolicy::Positional => (self.jokes.len() as JokeId).saturating_add(1),
            IdPolicy::Monotonic => self.next_id,
        }
    }
}

impl Default for JokeList {
    fn default() -> Self {
        Self::seeded(IdPolicy::default())
    }
}

/// Pure transition function
///
/// `UpdateRate` and `DeleteJoke` act on every joke whose id matches, so a
/// positional-policy collision is rated or removed as a group. The id counter
/// saturates at `JokeId::MAX`; past that point every add reuses it.
pub fn apply(list: JokeList, action: JokeAction) -> JokeList {
    match action {
        JokeAction::AddJoke(text) => {
            let id = list.peek_next_id();
            let mut jokes = list.jokes;
            jokes.push(Joke::new(id, text));
            JokeList {
                jokes,
                next_id: list.next_id.max(id.saturating_add(1)),
                policy: list.policy,
            }
        }

        JokeAction::UpdateRate { id, rating } => {
            if list.get(id).is_none() {
                return list;
            }
            let jokes = list
                .jokes
                .into_iter()
                .map(|joke| if joke.id == id { Joke { rating, ..joke } } else { joke })
                .collect();
            JokeList { jokes, ..list }
        }

        JokeAction::DeleteJoke { id } => {
            let mut jokes = list.jokes;
            jokes.retain(|joke| joke.id != id);
            JokeList { jokes, ..list }
        }

        JokeAction::Unrecognized { .. } => list,
    }
}
