//! Core types for Jokebox

use serde::{Deserialize, Serialize};

/// Identifier of a joke within a list
pub type JokeId = u64;

/// Signed, unbounded score of a joke
pub type Rating = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub id: JokeId,
    pub text: String,
    pub rating: Rating,
}

impl Joke {
    /// A freshly added joke starts unrated.
    pub fn new(id: JokeId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            rating: 0,
        }
    }

    /// Rating one step up, saturating at `Rating::MAX`
    pub fn rated_up(&self) -> Rating {
        self.rating.saturating_add(1)
    }

    /// Rating one step down, saturating at `Rating::MIN`
    pub fn rated_down(&self) -> Rating {
        self.rating.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_joke_is_unrated() {
        let joke = Joke::new(7, "Knock knock");
        assert_eq!(joke.id, 7);
        assert_eq!(joke.text, "Knock knock");
        assert_eq!(joke.rating, 0);
    }

    #[test]
    fn test_rating_steps() {
        let joke = Joke { id: 1, text: "x".to_string(), rating: -2 };
        assert_eq!(joke.rated_up(), -1);
        assert_eq!(joke.rated_down(), -3);
    }

    #[test]
    fn test_rating_steps_saturate() {
        let top = Joke { id: 1, text: "x".to_string(), rating: Rating::MAX };
        assert_eq!(top.rated_up(), Rating::MAX);

        let bottom = Joke { id: 2, text: "y".to_string(), rating: Rating::MIN };
        assert_eq!(bottom.rated_down(), Rating::MIN);
    }

    #[test]
    fn test_serialized_field_names() {
        let joke = Joke { id: 3, text: "pun".to_string(), rating: 4 };
        let json = serde_json::to_value(&joke).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "text": "pun", "rating": 4}));
    }
}
