//! Terminal response outcomes and the early-exit signal.
//!
//! Every handled action produces exactly one [`Outcome`]. Emit functions
//! return [`Halt`], an error type carrying the decided outcome, so a
//! handler aborts its remaining logic with `?` or `return Err(...)` and
//! the dispatcher at the scope boundary unwraps the outcome. This makes
//! the "already responded" state unrepresentable: control flow cannot
//! continue past an emit.

use crate::status::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A human-readable error message: a single string or an ordered list.
///
/// A list is serialized as-is unless the caller explicitly asks for
/// sentence mode via [`Message::into_sentence`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    One(String),
    Many(Vec<String>),
}

impl Message {
    /// Collapse a message list into a single natural-language sentence.
    ///
    /// A single-string message is returned unchanged.
    pub fn into_sentence(self) -> Message {
        match self {
            Message::One(s) => Message::One(s),
            Message::Many(parts) => Message::One(to_sentence(&parts)),
        }
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Message::One(s)
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Message::One(s.to_string())
    }
}

impl From<Vec<String>> for Message {
    fn from(parts: Vec<String>) -> Self {
        Message::Many(parts)
    }
}

/// Join strings into one sentence: `"x"`, `"x and y"`, `"x, y, and z"`.
pub fn to_sentence(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

/// The single terminal result of one handled action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Success: an optional JSON payload plus a non-fatal warning list
    /// (partial bulk failures ride along here).
    Success {
        payload: Option<Value>,
        warnings: Vec<String>,
    },
    /// Error: one of the catalog status codes and a message.
    Error {
        status: StatusCode,
        message: Message,
    },
}

impl Outcome {
    /// A success outcome with no warnings.
    pub fn success(payload: Option<Value>) -> Self {
        Outcome::Success {
            payload,
            warnings: Vec::new(),
        }
    }

    /// An error outcome.
    pub fn error(status: StatusCode, message: impl Into<Message>) -> Self {
        Outcome::Error {
            status,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error { .. })
    }

    /// The wire body for an error outcome, `None` for success.
    pub fn error_body(&self) -> Option<ErrorBody> {
        match self {
            Outcome::Error { status, message } => Some(ErrorBody {
                message: message.clone(),
                status: status.code(),
            }),
            Outcome::Success { .. } => None,
        }
    }
}

/// JSON body emitted for error outcomes: `{message, status}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: Message,
    pub status: u16,
}

/// The early-exit signal: a decided outcome propagating to the nearest
/// scope boundary.
///
/// Emit functions return `Halt` and handlers pass it upward with `?`.
/// It is not an error in the operational sense; it is the action's
/// response leaving the handler.
#[derive(Debug)]
pub struct Halt(pub Outcome);

impl Halt {
    pub fn into_outcome(self) -> Outcome {
        self.0
    }
}

/// What an action body returns: `Ok(())` means the handler fell through
/// without responding, which the dispatcher treats as a programmer error.
pub type ActionResult = Result<(), Halt>;

impl From<anyhow::Error> for Halt {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!(error = %err, "unexpected failure while handling action");
        Halt(Outcome::error(
            StatusCode::InternalServerError,
            "internal error",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sentence_mode_joins_message_list() {
        let message = Message::Many(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(
            message.into_sentence(),
            Message::One("x and y".to_string())
        );
    }

    #[test]
    fn test_without_sentence_mode_list_is_unchanged() {
        let message = Message::Many(vec!["x".to_string(), "y".to_string()]);
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json, json!(["x", "y"]));
    }

    #[test]
    fn test_to_sentence_three_parts_uses_serial_comma() {
        let parts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(to_sentence(&parts), "a, b, and c");
    }

    #[test]
    fn test_error_body_carries_numeric_status() {
        let outcome = Outcome::error(StatusCode::Forbidden, "nope");
        let body = outcome.error_body().unwrap();
        assert_eq!(body.status, 403);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"message": "nope", "status": 403})
        );
    }

    #[test]
    fn test_success_outcome_has_no_error_body() {
        assert!(Outcome::success(Some(json!({"id": 1}))).error_body().is_none());
    }

    #[test]
    fn test_unexpected_failure_becomes_internal_error() {
        let halt = Halt::from(anyhow::anyhow!("database unreachable"));
        match halt.into_outcome() {
            Outcome::Error { status, .. } => {
                assert_eq!(status, StatusCode::InternalServerError)
            }
            other => panic!("expected error outcome, got {:?}", other),
        }
    }
}
