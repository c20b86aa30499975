//! The scope boundary around one action.
//!
//! [`dispatch`] runs an action body and converts its early-exit signal
//! into the action's [`Outcome`]. Exactly one boundary is active per
//! inbound action; a nested `dispatch` absorbs its own halts and is not
//! observable from the outer one.

use timecard_core::{ActionResult, Halt, Outcome, StatusCode};

/// Run an action inside an early-exit boundary and return its outcome.
///
/// An action that returns `Ok(())` never emitted a response; that is a
/// programmer error, reported here as an internal server error rather
/// than a panic so the request still gets a well-formed reply.
pub fn dispatch<F>(action: F) -> Outcome
where
    F: FnOnce() -> ActionResult,
{
    match action() {
        Err(Halt(outcome)) => outcome,
        Ok(()) => {
            tracing::error!("action completed without emitting a response");
            Outcome::error(StatusCode::InternalServerError, "internal error")
        }
    }
}
