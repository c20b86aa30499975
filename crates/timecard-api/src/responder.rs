//! The response controller: builds terminal responses for one action.
//!
//! A [`Responder`] is created per inbound action and owns that action's
//! resource-scoped message view. Emit functions return [`Halt`] so the
//! handler's remaining logic is skipped by propagating it with `?`; the
//! one deliberate exception is [`Responder::error_outcome`], the
//! non-terminating form used by framework-level error translators that
//! are already unwinding.

use serde_json::Value;
use timecard_core::{Halt, Message, Outcome, ScopedMessages, StatusCode};

/// Builds and emits the single terminal response of one action.
pub struct Responder {
    messages: ScopedMessages,
}

impl Responder {
    pub fn new(messages: ScopedMessages) -> Self {
        Self { messages }
    }

    /// A responder for the named resource backed by the default catalog.
    pub fn for_resource(resource: impl Into<String>) -> Self {
        Self::new(ScopedMessages::with_defaults(resource))
    }

    pub fn messages(&self) -> &ScopedMessages {
        &self.messages
    }

    /// Emit a terminal error. A message list is carried as-is (emitted as
    /// a JSON array); use [`Responder::error_sentence`] to join it.
    pub fn error(&self, status: StatusCode, message: impl Into<Message>) -> Halt {
        Halt(self.error_outcome(status, message))
    }

    /// Emit a terminal error with a message list joined into a single
    /// natural-language sentence.
    pub fn error_sentence(&self, status: StatusCode, message: impl Into<Message>) -> Halt {
        Halt(Outcome::Error {
            status,
            message: message.into().into_sentence(),
        })
    }

    /// Build an error outcome without triggering early exit.
    ///
    /// For callers that are themselves top-level error translators and
    /// must not re-enter exit handling already in progress.
    pub fn error_outcome(&self, status: StatusCode, message: impl Into<Message>) -> Outcome {
        Outcome::error(status, message)
    }

    /// Emit a terminal success: a payload responds with it at 200, no
    /// payload responds with an empty 204 body.
    pub fn success(&self, payload: Option<Value>) -> Halt {
        Halt(Outcome::success(payload))
    }

    /// Terminal forbidden response, defaulting to the catalog text.
    pub fn forbidden(&self, message: Option<String>) -> Halt {
        let text = message.unwrap_or_else(|| self.messages.text("forbidden", &[]));
        self.error(StatusCode::Forbidden, text)
    }

    /// Terminal not-found response, defaulting to the resource-scoped
    /// catalog text.
    pub fn not_found(&self, message: Option<String>) -> Halt {
        let text = message.unwrap_or_else(|| self.messages.text("not_found", &[]));
        self.error(StatusCode::NotFound, text)
    }

    /// Translation for a missing required parameter signaled by the
    /// surrounding framework. Non-terminating: the framework's own
    /// rejection handling is already unwinding.
    pub fn missing_parameters(&self) -> Outcome {
        self.error_outcome(
            StatusCode::BadRequest,
            self.messages.text("missing_parameters", &[]),
        )
    }
}
