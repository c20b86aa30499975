//! Core types for the Timecard request-handling layer.
//!
//! This crate holds the leaf vocabulary shared by the policy and API
//! crates:
//! - [`StatusCode`] - the closed catalog of response codes
//! - [`Outcome`] / [`Halt`] - the terminal response and early-exit signal
//! - [`MessageCatalog`] / [`ScopedMessages`] - localized message lookup

pub mod messages;
pub mod outcome;
pub mod status;

pub use messages::{CatalogError, MessageCatalog, ScopedMessages, StaticCatalog};
pub use outcome::{to_sentence, ActionResult, ErrorBody, Halt, Message, Outcome};
pub use status::StatusCode;
