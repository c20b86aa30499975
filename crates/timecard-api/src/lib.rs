//! Timecard request-handling layer.
//!
//! This crate standardizes how handlers for a time-logging JSON API
//! produce responses:
//!
//! - [`Responder`] builds the single terminal response of an action
//! - [`dispatch`] is the scope boundary that turns the early-exit signal
//!   into the action's [`Outcome`](timecard_core::Outcome)
//! - [`Responder::process_bulk`] runs keyed independent sub-operations
//!   and reports partial failures without discarding partial successes
//! - [`ApiResponse`] maps outcomes onto axum responses
//!
//! Routing, persistence, and the permission model live elsewhere; this
//! layer only consumes them as collaborators.

pub mod bulk;
pub mod dispatch;
pub mod http;
pub mod params;
pub mod responder;

pub use bulk::{classify_bulk, BulkOutcome, BulkReply, Validated};
pub use dispatch::dispatch;
pub use http::{reject_missing_parameters, ApiResponse};
pub use params::parse_boolean;
pub use responder::Responder;
