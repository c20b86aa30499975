//! Permission evaluator capability.
//!
//! Authorization gates never consult ambient global state; they ask an
//! injected [`PermissionEvaluator`] whether a named permission is
//! granted, optionally scoped to a resource. The surrounding system
//! supplies the real implementation; this crate ships two small ones for
//! tests and fixtures.

use std::collections::HashSet;

/// Answers whether the current principal holds a permission.
///
/// `scope` narrows the permission to a resource kind (for example `book`
/// scoped to `time_logs`); `None` means the permission is global.
pub trait PermissionEvaluator: Send + Sync {
    fn allowed_to(&self, permission: &str, scope: Option<&str>) -> bool;
}

/// Evaluator that grants everything. Useful as a fixture default.
pub struct AllowAll;

impl PermissionEvaluator for AllowAll {
    fn allowed_to(&self, _permission: &str, _scope: Option<&str>) -> bool {
        true
    }
}

/// Set-backed evaluator: grants exactly the (permission, scope) pairs it
/// was given.
#[derive(Debug, Default)]
pub struct StaticPermissions {
    grants: HashSet<(String, Option<String>)>,
}

impl StaticPermissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a permission, optionally scoped to a resource kind.
    pub fn grant(mut self, permission: impl Into<String>, scope: Option<&str>) -> Self {
        self.grants
            .insert((permission.into(), scope.map(str::to_string)));
        self
    }
}

impl PermissionEvaluator for StaticPermissions {
    fn allowed_to(&self, permission: &str, scope: Option<&str>) -> bool {
        self.grants
            .contains(&(permission.to_string(), scope.map(str::to_string)))
    }
}
