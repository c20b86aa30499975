//! Localized message lookup.
//!
//! The API layer never hardcodes user-visible text at call sites; it asks
//! a [`MessageCatalog`] for a template by key and interpolates `%{name}`
//! arguments. [`ScopedMessages`] adds the resource-scoped resolution the
//! handlers rely on: `<resource>.errors.<key>` falls back to
//! `errors.<key>`, which is pre-seeded with English defaults and can be
//! overridden from a YAML mapping.

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur when loading a message catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The YAML source did not parse into a string-to-string mapping.
    #[error("failed to parse message catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Capability interface for localized message lookup.
///
/// `lookup` returns `None` when the key is unknown so callers can apply
/// their own fallback chain.
pub trait MessageCatalog: Send + Sync {
    fn lookup(&self, key: &str, args: &[(&str, &str)]) -> Option<String>;
}

/// Interpolate `%{name}` placeholders in a message template.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("%{{{}}}", name), value);
    }
    out
}

/// English defaults for every key the API layer emits.
const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    ("errors.forbidden", "You are not allowed to perform this action"),
    ("errors.not_found", "The requested record could not be found"),
    ("errors.missing_parameters", "Required parameters are missing"),
    (
        "errors.change_others_forbidden",
        "You are not allowed to change other users' records",
    ),
    (
        "errors.update_time_forbidden",
        "You are not allowed to change the start or stop time",
    ),
    ("errors.booking_forbidden", "You are not allowed to book time"),
    ("errors.bulk_error_preface", "Item %{id}"),
];

/// Map-backed message catalog.
///
/// Starts from the built-in English defaults; entries loaded from YAML or
/// inserted programmatically shadow them.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    entries: HashMap<String, String>,
}

impl StaticCatalog {
    /// Create a catalog containing only the built-in defaults.
    pub fn with_defaults() -> Self {
        let entries = DEFAULT_MESSAGES
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { entries }
    }

    /// Load overrides from a flat YAML mapping of key to template.
    ///
    /// Keys not present in the YAML keep their built-in defaults.
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let overrides: HashMap<String, String> = serde_yaml::from_str(source)?;
        let mut catalog = Self::with_defaults();
        catalog.entries.extend(overrides);
        Ok(catalog)
    }

    /// Insert or replace a single message template.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl MessageCatalog for StaticCatalog {
    fn lookup(&self, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.entries
            .get(key)
            .map(|template| interpolate(template, args))
    }
}

/// A resource-scoped view over a message catalog.
///
/// `text("not_found", ..)` for resource `time_logs` resolves
/// `time_logs.errors.not_found` first, then `errors.not_found`. An
/// entirely unknown key resolves to the key itself, which keeps a missing
/// translation visible without panicking.
#[derive(Clone)]
pub struct ScopedMessages {
    resource: String,
    catalog: Arc<dyn MessageCatalog>,
}

impl ScopedMessages {
    pub fn new(resource: impl Into<String>, catalog: Arc<dyn MessageCatalog>) -> Self {
        Self {
            resource: resource.into(),
            catalog,
        }
    }

    /// A scoped view backed by the built-in default catalog.
    pub fn with_defaults(resource: impl Into<String>) -> Self {
        Self::new(resource, Arc::new(StaticCatalog::with_defaults()))
    }

    /// The resource name this view is scoped to.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Resolve a message key through the scoped fallback chain.
    pub fn text(&self, key: &str, args: &[(&str, &str)]) -> String {
        let scoped = format!("{}.errors.{}", self.resource, key);
        self.catalog
            .lookup(&scoped, args)
            .or_else(|| self.catalog.lookup(&format!("errors.{}", key), args))
            .unwrap_or_else(|| key.to_string())
    }
}

impl std::fmt::Debug for ScopedMessages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedMessages")
            .field("resource", &self.resource)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_covers_generic_keys() {
        let messages = ScopedMessages::with_defaults("time_logs");
        assert_eq!(
            messages.text("missing_parameters", &[]),
            "Required parameters are missing"
        );
    }

    #[test]
    fn test_scoped_key_shadows_generic_fallback() {
        let mut catalog = StaticCatalog::with_defaults();
        catalog.insert("time_logs.errors.not_found", "Time log not found");
        let messages = ScopedMessages::new("time_logs", Arc::new(catalog));
        assert_eq!(messages.text("not_found", &[]), "Time log not found");

        let unscoped = ScopedMessages::with_defaults("bookings");
        assert_eq!(
            unscoped.text("not_found", &[]),
            "The requested record could not be found"
        );
    }

    #[test]
    fn test_interpolation_replaces_named_args() {
        let messages = ScopedMessages::with_defaults("time_logs");
        assert_eq!(
            messages.text("bulk_error_preface", &[("id", "42")]),
            "Item 42"
        );
    }

    #[test]
    fn test_yaml_overrides_shadow_defaults() {
        let catalog = StaticCatalog::from_yaml(
            "errors.forbidden: Zugriff verweigert\ntime_logs.errors.booking_forbidden: Buchen nicht erlaubt\n",
        )
        .unwrap();
        let messages = ScopedMessages::new("time_logs", Arc::new(catalog));
        assert_eq!(messages.text("forbidden", &[]), "Zugriff verweigert");
        assert_eq!(messages.text("booking_forbidden", &[]), "Buchen nicht erlaubt");
        // Untouched keys keep their defaults.
        assert_eq!(
            messages.text("missing_parameters", &[]),
            "Required parameters are missing"
        );
    }

    #[test]
    fn test_unknown_key_resolves_to_itself() {
        let messages = ScopedMessages::with_defaults("time_logs");
        assert_eq!(messages.text("no_such_key", &[]), "no_such_key");
    }

    #[test]
    fn test_invalid_yaml_is_rejected() {
        let result = StaticCatalog::from_yaml("errors.forbidden:\n  nested: true\n");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
