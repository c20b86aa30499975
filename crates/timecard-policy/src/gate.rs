//! Authorization gates for mutating actions.
//!
//! A gate either falls through (the action may continue) or produces a
//! terminal forbidden response as a [`Halt`]. Gates have no other side
//! effects and return no value the caller consumes; handlers invoke them
//! with `?` so a denial aborts the rest of the action.

use crate::evaluator::PermissionEvaluator;
use serde_json::Value;
use timecard_core::{Halt, Outcome, ScopedMessages, StatusCode};

/// Permission required to set or change a time boundary on a record.
pub const UPDATE_TIME_PERMISSION: &str = "update_time";
/// Permission required to book time, scoped to the time-log resource.
pub const BOOK_PERMISSION: &str = "book";
/// Resource scope for the booking permission.
pub const TIME_LOGS_SCOPE: &str = "time_logs";

/// Gates an action against an injected permission evaluator.
pub struct AuthGate<'a> {
    evaluator: &'a dyn PermissionEvaluator,
    messages: &'a ScopedMessages,
}

impl<'a> AuthGate<'a> {
    pub fn new(evaluator: &'a dyn PermissionEvaluator, messages: &'a ScopedMessages) -> Self {
        Self {
            evaluator,
            messages,
        }
    }

    /// Deny acting on another user's record.
    ///
    /// `own_record` is the caller-evaluated predicate; the gate only turns
    /// a failed predicate into the terminal forbidden response.
    pub fn authorize_foreign(&self, own_record: bool) -> Result<(), Halt> {
        if own_record {
            return Ok(());
        }
        tracing::debug!(resource = self.messages.resource(), "foreign record denied");
        Err(self.forbidden("change_others_forbidden"))
    }

    /// Require `update_time` when the parameters touch a time boundary.
    ///
    /// If `params` contains neither a `start` nor a `stop` key the check
    /// is vacuously allowed, whatever the evaluator would say.
    pub fn authorize_update_time(&self, params: Option<&Value>) -> Result<(), Halt> {
        let has_boundary = params
            .and_then(Value::as_object)
            .map(|obj| obj.contains_key("start") || obj.contains_key("stop"))
            .unwrap_or(false);

        if !has_boundary || self.evaluator.allowed_to(UPDATE_TIME_PERMISSION, None) {
            return Ok(());
        }
        tracing::debug!(
            resource = self.messages.resource(),
            permission = UPDATE_TIME_PERMISSION,
            "time boundary change denied"
        );
        Err(self.forbidden("update_time_forbidden"))
    }

    /// Require the `book` permission on the time-log resource.
    pub fn authorize_book(&self) -> Result<(), Halt> {
        if self
            .evaluator
            .allowed_to(BOOK_PERMISSION, Some(TIME_LOGS_SCOPE))
        {
            return Ok(());
        }
        tracing::debug!(
            resource = self.messages.resource(),
            permission = BOOK_PERMISSION,
            "booking denied"
        );
        Err(self.forbidden("booking_forbidden"))
    }

    fn forbidden(&self, message_key: &str) -> Halt {
        Halt(Outcome::error(
            StatusCode::Forbidden,
            self.messages.text(message_key, &[]),
        ))
    }
}
