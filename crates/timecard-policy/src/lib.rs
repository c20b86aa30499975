//! Timecard authorization layer.
//!
//! Permission checks are modeled as a small injected capability
//! ([`PermissionEvaluator`]) rather than ambient authorization state, so
//! gate logic is deterministic under test. The [`AuthGate`] turns a
//! denied check into a terminal forbidden response; a passed check simply
//! falls through.

pub mod evaluator;
pub mod gate;

pub use evaluator::{AllowAll, PermissionEvaluator, StaticPermissions};
pub use gate::{AuthGate, BOOK_PERMISSION, TIME_LOGS_SCOPE, UPDATE_TIME_PERMISSION};
