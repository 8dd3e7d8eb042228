//! Actions accepted by the joke list store
//!
//! Actions travel as tagged JSON objects, one per line in replay scripts:
//!
//! ```text
//! {"type": "ADD_JOKE", "payload": "Why did the chicken cross the road?"}
//! {"type": "UPDATE_RATE", "payload": {"id": 3, "rate": 5}}
//! {"type": "DELETE_JOKE", "payload": {"id": 1}}
//! ```
//!
//! A `type` the store does not know becomes [`JokeAction::Unrecognized`],
//! which the store applies as a no-op.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ActionError;
use crate::types::{JokeId, Rating};

const ADD_JOKE: &str = "ADD_JOKE";
const UPDATE_RATE: &str = "UPDATE_RATE";
const DELETE_JOKE: &str = "DELETE_JOKE";

/// A state transition request for the joke list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ActionEnvelope", into = "ActionEnvelope")]
pub enum JokeAction {
    /// Append a new unrated joke
    AddJoke(String),

    /// Replace the rating of the joke with this id
    UpdateRate { id: JokeId, rating: Rating },

    /// Remove the joke with this id
    DeleteJoke { id: JokeId },

    /// An action type this store does not handle
    Unrecognized { kind: String },
}

impl JokeAction {
    /// Parse one serialized action
    ///
    /// Unknown `type` tags are accepted and mapped to `Unrecognized`; a known
    /// tag with a missing or malformed payload is an error.
    pub fn from_json(input: &str) -> Result<Self, ActionError> {
        let envelope: ActionEnvelope = serde_json::from_str(input)?;
        Self::try_from(envelope)
    }

    /// Wire tag of this action
    pub fn kind(&self) -> &str {
        match self {
            JokeAction::AddJoke(_) => ADD_JOKE,
            JokeAction::UpdateRate { .. } => UPDATE_RATE,
            JokeAction::DeleteJoke { .. } => DELETE_JOKE,
            JokeAction::Unrecognized { kind } => kind,
        }
    }
}

/// Serialized shape of an action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionEnvelope {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RatePayload {
    id: JokeId,
    rate: Rating,
}

#[derive(Debug, Serialize, Deserialize)]
struct IdPayload {
    id: JokeId,
}

fn decode_payload<T>(kind: &str, payload: Option<Value>) -> Result<T, ActionError>
where
    T: serde::de::DeserializeOwned,
{
    let payload = payload.ok_or_else(|| ActionError::MissingPayload(kind.to_string()))?;
    serde_json::from_value(payload).map_err(|source| ActionError::Payload {
        kind: kind.to_string(),
        source,
    })
}

impl TryFrom<ActionEnvelope> for JokeAction {
    type Error = ActionError;

    fn try_from(envelope: ActionEnvelope) -> Result<Self, Self::Error> {
        let ActionEnvelope { kind, payload } = envelope;
        match kind.as_str() {
            ADD_JOKE => Ok(JokeAction::AddJoke(decode_payload(&kind, payload)?)),
            UPDATE_RATE => {
                let RatePayload { id, rate } = decode_payload(&kind, payload)?;
                Ok(JokeAction::UpdateRate { id, rating: rate })
            }
            DELETE_JOKE => {
                let IdPayload { id } = decode_payload(&kind, payload)?;
                Ok(JokeAction::DeleteJoke { id })
            }
            _ => Ok(JokeAction::Unrecognized { kind }),
        }
    }
}

impl From<JokeAction> for ActionEnvelope {
    fn from(action: JokeAction) -> Self {
        match action {
            JokeAction::AddJoke(text) => ActionEnvelope {
                kind: ADD_JOKE.to_string(),
                payload: Some(Value::String(text)),
            },
            JokeAction::UpdateRate { id, rating } => ActionEnvelope {
                kind: UPDATE_RATE.to_string(),
                payload: Some(serde_json::json!({ "id": id, "rate": rating })),
            },
            JokeAction::DeleteJoke { id } => ActionEnvelope {
                kind: DELETE_JOKE.to_string(),
                payload: Some(serde_json::json!({ "id": id })),
            },
            JokeAction::Unrecognized { kind } => ActionEnvelope { kind, payload: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_joke() {
        let action = JokeAction::from_json(r#"{"type":"ADD_JOKE","payload":"test"}"#).unwrap();
        assert_eq!(action, JokeAction::AddJoke("test".to_string()));
    }

    #[test]
    fn test_parse_update_rate() {
        let action =
            JokeAction::from_json(r#"{"type":"UPDATE_RATE","payload":{"id":3,"rate":-5}}"#).unwrap();
        assert_eq!(action, JokeAction::UpdateRate { id: 3, rating: -5 });
    }

    #[test]
    fn test_parse_delete_joke() {
        let action = JokeAction::from_json(r#"{"type":"DELETE_JOKE","payload":{"id":1}}"#).unwrap();
        assert_eq!(action, JokeAction::DeleteJoke { id: 1 });
    }

    #[test]
    fn test_unknown_type_is_unrecognized() {
        let action =
            JokeAction::from_json(r#"{"type":"SHUFFLE","payload":{"seed":42}}"#).unwrap();
        assert_eq!(action, JokeAction::Unrecognized { kind: "SHUFFLE".to_string() });
        assert_eq!(action.kind(), "SHUFFLE");
    }

    #[test]
    fn test_missing_payload_is_error() {
        let err = JokeAction::from_json(r#"{"type":"DELETE_JOKE"}"#).unwrap_err();
        assert!(matches!(err, ActionError::MissingPayload(kind) if kind == "DELETE_JOKE"));
    }

    #[test]
    fn test_malformed_payload_is_error() {
        let err =
            JokeAction::from_json(r#"{"type":"UPDATE_RATE","payload":{"id":"three","rate":1}}"#)
                .unwrap_err();
        assert!(matches!(err, ActionError::Payload { ref kind, .. } if kind == "UPDATE_RATE"));
    }

    #[test]
    fn test_not_json_is_error() {
        let err = JokeAction::from_json("ADD_JOKE hello").unwrap_err();
        assert!(matches!(err, ActionError::Malformed(_)));
    }

    #[test]
    fn test_serializes_to_wire_shape() {
        let value = serde_json::to_value(JokeAction::UpdateRate { id: 2, rating: 7 }).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type": "UPDATE_RATE", "payload": {"id": 2, "rate": 7}})
        );
    }

    #[test]
    fn test_serde_deserialize_goes_through_envelope() {
        let action: JokeAction =
            serde_json::from_str(r#"{"type":"ADD_JOKE","payload":"via serde"}"#).unwrap();
        assert_eq!(action, JokeAction::AddJoke("via serde".to_string()));
    }
}
