//! Bulk operation processing.
//!
//! A bulk request carries several independent keyed sub-operations. Each
//! is run in input order and classified; one malformed or forbidden item
//! must not invalidate the items that succeeded. Classification is a
//! pure function of the per-item results ([`classify_bulk`]); turning the
//! aggregate into a terminal response happens in
//! [`Responder::process_bulk`].
//!
//! Caller discipline, not enforced here: the per-item operation must not
//! emit terminal responses of its own, since that would abort the
//! remaining items.

use crate::responder::Responder;
use std::fmt;
use timecard_core::{to_sentence, Halt, Outcome, ScopedMessages, StatusCode};

/// What a per-item operation may report back.
pub enum BulkReply<E> {
    /// The operation produced an entity; its validation state decides
    /// whether the item counts as a success.
    Entity(E),
    /// The operation failed with an explicit message.
    Fail(String),
    /// The addressed record does not exist.
    NotFound,
}

/// Entities carry their own validation state: no errors means valid.
pub trait Validated {
    fn validation_errors(&self) -> Vec<String>;
}

/// Aggregate over all per-item results, in input order.
#[derive(Debug)]
pub struct BulkOutcome<E> {
    /// Entities whose operation succeeded.
    pub success: Vec<E>,
    /// One formatted line per failed item, prefixed with its preface.
    pub errors: Vec<String>,
}

/// Run the per-item operation over every `(key, params)` pair and
/// classify the results. Deterministic for a fixed input order.
pub fn classify_bulk<K, P, E, I, F>(
    messages: &ScopedMessages,
    items: I,
    mut operation: F,
) -> BulkOutcome<E>
where
    K: fmt::Display,
    I: IntoIterator<Item = (K, P)>,
    E: Validated,
    F: FnMut(&K, &P) -> BulkReply<E>,
{
    let mut success = Vec::new();
    let mut errors = Vec::new();

    for (key, params) in items {
        let preface = format!(
            "[{}:]",
            messages.text("bulk_error_preface", &[("id", &key.to_string())])
        );
        match operation(&key, &params) {
            BulkReply::Entity(entity) => {
                let validation = entity.validation_errors();
                if validation.is_empty() {
                    success.push(entity);
                } else {
                    errors.push(format!("{} {}", preface, to_sentence(&validation)));
                }
            }
            BulkReply::Fail(message) => {
                errors.push(format!("{} {}", preface, message));
            }
            BulkReply::NotFound => {
                errors.push(format!("{} {}", preface, messages.text("not_found", &[])));
            }
        }
    }

    BulkOutcome { success, errors }
}

impl Responder {
    /// Process a bulk request and emit the aggregate response.
    ///
    /// Success-dominant: if at least one item succeeded the response is a
    /// payload-less success and the error lines ride along as warnings;
    /// only when every item failed does the request become a 400 with the
    /// error lines as the message array.
    pub fn process_bulk<K, P, E, I, F>(&self, items: I, operation: F) -> Halt
    where
        K: fmt::Display,
        I: IntoIterator<Item = (K, P)>,
        E: Validated,
        F: FnMut(&K, &P) -> BulkReply<E>,
    {
        let outcome = classify_bulk(self.messages(), items, operation);
        tracing::debug!(
            resource = self.messages().resource(),
            succeeded = outcome.success.len(),
            failed = outcome.errors.len(),
            "bulk request processed"
        );

        if outcome.success.is_empty() {
            self.error(StatusCode::BadRequest, outcome.errors)
        } else {
            Halt(Outcome::Success {
                payload: None,
                warnings: outcome.errors,
            })
        }
    }
}
