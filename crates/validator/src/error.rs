//! Error types for tagvalid
//!
//! These are programmer / configuration errors: malformed tags, unknown
//! validator keys, unsupported value shapes, registry misuse. Failed
//! business checks never show up here; they land in an
//! [`ErrorBag`](crate::ErrorBag).

use thiserror::Error;

use crate::value::Kind;

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

// ============================================================================
// Tag grammar errors
// ============================================================================

/// A syntax problem inside a single tag string.
///
/// Produced by [`tag::parse`](crate::tag::parse) before any registry lookup
/// happens, so it never names a field. The walker wraps it into
/// [`Error::Grammar`] together with the field it came from.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// `key=value` element whose key is not a known setting.
    #[error("{setting} is not a valid validation option")]
    UnknownSetting { setting: String },

    /// `key->` with nothing after the arrow.
    #[error("custom message indicated but not given for {key}")]
    EmptyMessage { key: String },

    /// `key(...` where the closing parenthesis is missing or not last.
    #[error("the parameter close token for {key} is incorrect or missing")]
    UnclosedParams { key: String },
}

// ============================================================================
// Main error type
// ============================================================================

/// Internal and configuration errors.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The tag on `field` is malformed.
    #[error("invalid validation tag on field {field}: {source}")]
    Grammar {
        field: String,
        #[source]
        source: TagError,
    },

    /// A directive names a key that is not registered.
    #[error("Invalid validation key for field {field}: {key}")]
    UnknownValidator { field: String, key: String },

    /// A message override targets a key that is not registered.
    #[error("validator with key {key} doesn't exist")]
    UnknownMessageTarget { key: String },

    /// `register` was called twice for the same key.
    #[error("validator {key} is already registered; use replace to override it")]
    DuplicateValidator { key: String },

    /// A descriptor reached `build()` without any default message.
    #[error("validator {key} has no default message")]
    MissingDefaultMessage { key: String },

    /// Only the built-in locales can be loaded.
    #[error("Locale {locale} is not implemented (we'd love it if you could help us fix that!)")]
    LocaleNotImplemented { locale: String },

    /// A message table entry uses an unknown slot suffix.
    #[error("{slot} is not a valid message type identifier")]
    UnknownMessageSlot { slot: String },

    /// A rule set names a field the sample type does not have.
    #[error("Field {field} in {type_name} not found")]
    RuleSetField { field: String, type_name: String },

    /// No rule set is registered under `name` for the value's type.
    #[error("No custom validation {name} for {type_name}")]
    RuleSetNotFound { name: String, type_name: String },

    /// The reserved compiled-tags name cannot be registered as a rule set.
    #[error("rule set name {name} is reserved for compiled-in tags")]
    ReservedRuleSet { name: String },

    /// Only records can be validated at the top level.
    #[error("only records can be validated; got {kind}")]
    NotARecord { kind: Kind },

    /// Map fields must be keyed by strings.
    #[error("field {field}: maps keyed by {kind} are not a supported validation type")]
    UnsupportedMapKey { field: String, kind: Kind },

    /// The value's type has no structural shape the walker understands.
    #[error("field {field}: {type_name} is not a supported validation type")]
    UnsupportedType {
        field: String,
        type_name: &'static str,
    },

    /// A string-only rule was applied to a non-string value.
    #[error("Error validating {field}: {key} has no rule for {kind} values")]
    RuleTypeMismatch {
        field: String,
        key: String,
        kind: Kind,
    },

    /// Nested records went deeper than the configured limit.
    #[error("validation depth limit of {limit} exceeded in {type_name}")]
    DepthExceeded {
        limit: usize,
        type_name: &'static str,
    },

    /// Configuration could not be read.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl Error {
    /// Stable code for categorization.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Grammar { .. } => "VALID:GRAMMAR",
            Self::UnknownValidator { .. } => "VALID:UNKNOWN_KEY",
            Self::UnknownMessageTarget { .. } => "VALID:UNKNOWN_MESSAGE_TARGET",
            Self::DuplicateValidator { .. } => "VALID:DUPLICATE_KEY",
            Self::MissingDefaultMessage { .. } => "VALID:MISSING_MESSAGE",
            Self::LocaleNotImplemented { .. } => "VALID:LOCALE",
            Self::UnknownMessageSlot { .. } => "VALID:MESSAGE_SLOT",
            Self::RuleSetField { .. } => "VALID:RULESET_FIELD",
            Self::RuleSetNotFound { .. } => "VALID:RULESET_NOT_FOUND",
            Self::ReservedRuleSet { .. } => "VALID:RULESET_RESERVED",
            Self::NotARecord { .. } => "VALID:NOT_A_RECORD",
            Self::UnsupportedMapKey { .. } => "VALID:MAP_KEY",
            Self::UnsupportedType { .. } => "VALID:UNSUPPORTED_TYPE",
            Self::RuleTypeMismatch { .. } => "VALID:RULE_TYPE",
            Self::DepthExceeded { .. } => "VALID:DEPTH",
            Self::Config { .. } => "VALID:CONFIG",
        }
    }

    /// Whether the error comes from a malformed tag rather than from
    /// registry or data shape problems.
    pub fn is_grammar(&self) -> bool {
        matches!(self, Self::Grammar { .. } | Self::UnknownValidator { .. })
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    /// Wrap a tag syntax error with the field it was found on.
    pub fn grammar(field: impl Into<String>, source: TagError) -> Self {
        Self::Grammar {
            field: field.into(),
            source,
        }
    }

    /// Create an unknown validator key error.
    pub fn unknown_validator(field: impl Into<String>, key: impl Into<String>) -> Self {
        Self::UnknownValidator {
            field: field.into(),
            key: key.into(),
        }
    }

    /// Create an unknown message target error.
    pub fn unknown_message_target(key: impl Into<String>) -> Self {
        Self::UnknownMessageTarget { key: key.into() }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
