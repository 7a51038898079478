//! Error accumulation
//!
//! An [`ErrorBag`] collects every failed check of one validation call,
//! grouped by key. The key is the validator key (`"required"`,
//! `"between"`, ...) unless the field overrides it.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

// ============================================================================
// FIELD ERROR
// ============================================================================

/// One failed check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FieldError {
    /// Bag key the error is filed under. May be empty.
    pub name: String,
    /// Display name of the field.
    pub field: String,
    /// Resolved message.
    pub message: String,
}

impl FieldError {
    pub fn new(
        name: impl Into<String>,
        message: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

impl std::error::Error for FieldError {}

// ============================================================================
// ERROR BAG
// ============================================================================

/// Failures of one validation call, grouped by key in insertion order.
///
/// Equality compares keys as a map, so two bags built from the same value
/// compare equal regardless of key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorBag {
    errors: IndexMap<String, Vec<FieldError>>,
}

impl ErrorBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a failure under `key`.
    pub fn add(
        &mut self,
        key: impl Into<String>,
        message: impl Into<String>,
        field: impl Into<String>,
    ) -> &mut Self {
        self.push(FieldError::new(key, message, field))
    }

    /// Adds a prepared error under its own name.
    pub fn push(&mut self, error: FieldError) -> &mut Self {
        self.errors
            .entry(error.name.clone())
            .or_default()
            .push(error);
        self
    }

    /// Moves every error of `other` into this bag.
    pub fn merge(&mut self, other: ErrorBag) -> &mut Self {
        for error in other.errors.into_values().flatten() {
            self.push(error);
        }
        self
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of errors across all keys.
    pub fn len(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// All errors, grouped keys first-seen first.
    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values().flatten()
    }

    /// The key-grouped view.
    pub fn error_map(&self) -> &IndexMap<String, Vec<FieldError>> {
        &self.errors
    }

    pub fn has_error_for(&self, key: &str) -> bool {
        self.errors.contains_key(key)
    }

    /// Errors filed under `key`; empty if none.
    pub fn errors_for(&self, key: &str) -> &[FieldError] {
        self.errors.get(key).map_or(&[], Vec::as_slice)
    }

    /// Errors regrouped by field display name.
    ///
    /// The key grouping mixes unrelated fields that share a validator; this
    /// view keeps them apart without changing how the bag is keyed.
    pub fn by_field(&self) -> IndexMap<&str, Vec<&FieldError>> {
        let mut grouped: IndexMap<&str, Vec<&FieldError>> = IndexMap::new();
        for error in self.errors() {
            grouped.entry(error.field.as_str()).or_default().push(error);
        }
        grouped
    }

    /// `Ok(())` when empty, otherwise the bag itself.
    pub fn into_result(self) -> Result<(), ErrorBag> {
        if self.has_errors() { Err(self) } else { Ok(()) }
    }
}

/// `"; "`-joined errors, each prefixed with `[field] ` when it has one.
impl fmt::Display for ErrorBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            if error.field.is_empty() {
                write!(f, "{error}")?;
            } else {
                write!(f, "[{}] {error}", error.field)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ErrorBag {}

impl<'a> IntoIterator for &'a ErrorBag {
    type Item = &'a FieldError;
    type IntoIter = std::iter::Flatten<indexmap::map::Values<'a, String, Vec<FieldError>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.values().flatten()
    }
}
