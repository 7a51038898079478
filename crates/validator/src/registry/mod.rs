//! Validator registry
//!
//! Maps validator keys (`required`, `between`, `email`, ...) to a
//! [`Descriptor`]: the rule, whether it runs on complex values and its
//! messages.
//!
//! The registry has two phases. A [`RegistryBuilder`] is mutable and
//! accepts registrations, overrides, custom messages and locale loads.
//! [`RegistryBuilder::build`] checks it and freezes it into a [`Registry`],
//! which validation reads without locking. The process-wide snapshot lives
//! in [`global`](self::global()).
//!
//! ```rust,ignore
//! use tagvalid::registry::{self, Descriptor, Rule};
//! use tagvalid::Shape;
//!
//! registry::configure(|b| {
//!     b.register(
//!         Descriptor::new("even", Rule::generic(|v, _| matches!(v, Shape::Int(i) if i % 2 == 0)))
//!             .with_default_message("%s must be even"),
//!     )?;
//!     b.set_custom_message("email", "{field} looks wrong")?;
//!     Ok(())
//! })?;
//! ```

mod global;
pub mod locale;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::message::{MessageSet, Slot};
use crate::value::Shape;

pub use global::{
    clear_custom_messages, configure, global, install, load_locale, register, replace, reset,
    set_custom_message, set_custom_messages, set_custom_negated_message,
};

/// Check over any value shape.
pub type GenericCheck = Arc<dyn Fn(&Shape<'_>, &[String]) -> bool + Send + Sync>;

/// Check over string values.
pub type StrCheck = Arc<dyn Fn(&str, &[String]) -> bool + Send + Sync>;

// ============================================================================
// RULE
// ============================================================================

/// The predicate behind a validator key.
#[derive(Clone)]
pub enum Rule {
    /// Runs on any shape. `complex` rules also run on pointers, sequences,
    /// maps and records.
    Generic { check: GenericCheck, complex: bool },
    /// Runs on strings only.
    Str { check: StrCheck },
}

impl Rule {
    /// Generic rule for scalar values.
    pub fn generic<F>(check: F) -> Self
    where
        F: Fn(&Shape<'_>, &[String]) -> bool + Send + Sync + 'static,
    {
        Self::Generic {
            check: Arc::new(check),
            complex: false,
        }
    }

    /// Generic rule that also runs on complex values.
    pub fn complex<F>(check: F) -> Self
    where
        F: Fn(&Shape<'_>, &[String]) -> bool + Send + Sync + 'static,
    {
        Self::Generic {
            check: Arc::new(check),
            complex: true,
        }
    }

    /// String-only rule.
    pub fn string<F>(check: F) -> Self
    where
        F: Fn(&str, &[String]) -> bool + Send + Sync + 'static,
    {
        Self::Str {
            check: Arc::new(check),
        }
    }

    pub fn accepts_complex(&self) -> bool {
        matches!(self, Self::Generic { complex: true, .. })
    }

    /// Runs the check. `None` when a string rule meets a non-string value.
    pub fn evaluate(&self, value: &Shape<'_>, params: &[String]) -> Option<bool> {
        match self {
            Self::Generic { check, .. } => Some(check(value, params)),
            Self::Str { check } => value.as_str().map(|s| check(s, params)),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic { complex, .. } => f
                .debug_struct("Generic")
                .field("complex", complex)
                .finish_non_exhaustive(),
            Self::Str { .. } => f.debug_struct("Str").finish_non_exhaustive(),
        }
    }
}

// ============================================================================
// DESCRIPTOR
// ============================================================================

/// A registered validator.
#[derive(Debug, Clone)]
pub struct Descriptor {
    key: String,
    rule: Rule,
    defaults: MessageSet,
    custom: MessageSet,
}

impl Descriptor {
    pub fn new(key: impl Into<String>, rule: Rule) -> Self {
        Self {
            key: key.into(),
            rule,
            defaults: MessageSet::default(),
            custom: MessageSet::default(),
        }
    }

    /// Default message; formatted when it contains `%s`.
    pub fn with_default_message(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.defaults.set(Slot::infer(&text, false), text);
        self
    }

    /// Default negated message; formatted when it contains `%s`.
    pub fn with_default_negated_message(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.defaults.set(Slot::infer(&text, true), text);
        self
    }

    pub fn with_default_messages(mut self, messages: MessageSet) -> Self {
        self.defaults = messages;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn accepts_complex(&self) -> bool {
        self.rule.accepts_complex()
    }

    pub fn default_messages(&self) -> &MessageSet {
        &self.defaults
    }

    pub fn custom_messages(&self) -> &MessageSet {
        &self.custom
    }

    pub(crate) fn set_custom_messages(&mut self, messages: MessageSet) {
        self.custom = messages;
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Mutable registry under construction.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    descriptors: HashMap<String, Descriptor>,
    locale: Option<String>,
}

impl RegistryBuilder {
    /// An empty builder with no validators.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder holding every built-in validator with English messages.
    pub fn with_builtins() -> Self {
        let mut builder = Self::new();
        for descriptor in crate::rules::builtin_descriptors() {
            builder.insert(descriptor);
        }
        builder.apply_locale("en", locale::EN);
        builder
    }

    fn insert(&mut self, descriptor: Descriptor) -> Option<Descriptor> {
        self.descriptors
            .insert(descriptor.key.clone(), descriptor)
    }

    fn descriptor_mut(&mut self, key: &str) -> Result<&mut Descriptor> {
        self.descriptors
            .get_mut(key)
            .ok_or_else(|| Error::unknown_message_target(key))
    }

    /// Registers a new validator. Fails if the key is taken.
    pub fn register(&mut self, descriptor: Descriptor) -> Result<&mut Self> {
        if self.descriptors.contains_key(descriptor.key()) {
            return Err(Error::DuplicateValidator {
                key: descriptor.key,
            });
        }
        debug!(key = %descriptor.key, complex = descriptor.accepts_complex(), "registering validator");
        self.insert(descriptor);
        Ok(self)
    }

    /// Registers or overrides a validator.
    pub fn replace(&mut self, descriptor: Descriptor) -> &mut Self {
        let key = descriptor.key.clone();
        if self.insert(descriptor).is_some() {
            debug!(%key, "replaced existing validator");
        }
        self
    }

    /// Custom message for `key`; formatted when it contains `%s`.
    pub fn set_custom_message(&mut self, key: &str, text: impl Into<String>) -> Result<&mut Self> {
        let text = text.into();
        self.descriptor_mut(key)?
            .set_custom_messages(MessageSet::from_text(text, false));
        Ok(self)
    }

    /// Custom negated message for `key`; formatted when it contains `%s`.
    pub fn set_custom_negated_message(
        &mut self,
        key: &str,
        text: impl Into<String>,
    ) -> Result<&mut Self> {
        let text = text.into();
        self.descriptor_mut(key)?
            .set_custom_messages(MessageSet::from_text(text, true));
        Ok(self)
    }

    /// Replaces all custom messages of `key`.
    pub fn set_custom_messages(&mut self, key: &str, messages: MessageSet) -> Result<&mut Self> {
        self.descriptor_mut(key)?.set_custom_messages(messages);
        Ok(self)
    }

    /// Drops the custom messages of `key`.
    pub fn clear_custom_messages(&mut self, key: &str) -> Result<&mut Self> {
        self.descriptor_mut(key)?
            .set_custom_messages(MessageSet::default());
        Ok(self)
    }

    /// Replaces default messages from a built-in locale table.
    ///
    /// Unknown locales fail without touching any descriptor.
    pub fn load_locale(&mut self, name: &str) -> Result<&mut Self> {
        let table = locale::table(name).ok_or_else(|| Error::LocaleNotImplemented {
            locale: name.to_owned(),
        })?;
        self.apply_locale(name, table);
        info!(locale = name, "loaded message locale");
        Ok(self)
    }

    /// Applies `key.slot` → text entries to the default messages.
    ///
    /// Every entry is checked before any is applied. Entries for keys that
    /// are not registered are ignored.
    pub fn load_message_table<'t, I>(&mut self, entries: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (&'t str, &'t str)>,
    {
        let mut parsed = Vec::new();
        for (compound, text) in entries {
            let (key, slot) = compound.split_once('.').ok_or_else(|| Error::UnknownMessageSlot {
                slot: compound.to_owned(),
            })?;
            parsed.push((key, Slot::from_identifier(slot)?, text));
        }
        for (key, slot, text) in parsed {
            if let Some(descriptor) = self.descriptors.get_mut(key) {
                descriptor.defaults.set(slot, text);
            }
        }
        Ok(self)
    }

    fn apply_locale(&mut self, name: &str, table: &[(&str, Slot, &str)]) {
        for &(key, slot, text) in table {
            if let Some(descriptor) = self.descriptors.get_mut(key) {
                descriptor.defaults.set(slot, text);
            }
        }
        self.locale = Some(name.to_owned());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.descriptors.contains_key(key)
    }

    /// Freezes the builder. Every validator needs a default message.
    pub fn build(self) -> Result<Registry> {
        if let Some(missing) = self
            .descriptors
            .values()
            .find(|d| !d.defaults.has_message())
        {
            return Err(Error::MissingDefaultMessage {
                key: missing.key.clone(),
            });
        }
        debug!(validators = self.descriptors.len(), "registry built");
        Ok(Registry {
            descriptors: self.descriptors,
            locale: self.locale,
        })
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Frozen validator registry.
#[derive(Debug, Clone)]
pub struct Registry {
    descriptors: HashMap<String, Descriptor>,
    locale: Option<String>,
}

impl Registry {
    /// Built-in validators with English messages.
    pub fn builtin() -> Self {
        let builder = RegistryBuilder::with_builtins();
        Self {
            descriptors: builder.descriptors,
            locale: builder.locale,
        }
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::with_builtins()
    }

    pub fn lookup(&self, key: &str) -> Option<&Descriptor> {
        self.descriptors.get(key)
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.descriptors.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Locale the default messages came from, if any.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// A builder seeded with this registry's state.
    pub fn to_builder(&self) -> RegistryBuilder {
        RegistryBuilder {
            descriptors: self.descriptors.clone(),
            locale: self.locale.clone(),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtins_build_cleanly() {
        let registry = Registry::builtin().to_builder().build().unwrap();
        assert_eq!(registry.locale(), Some("en"));
        for key in ["required", "between", "email", "semver", "isoalpha2", "matches"] {
            assert!(registry.lookup(key).is_some(), "{key} missing");
        }
        assert!(registry.lookup("required").unwrap().accepts_complex());
        assert!(!registry.lookup("email").unwrap().accepts_complex());
    }

    #[test]
    fn register_rejects_duplicates_but_replace_overrides() {
        let mut builder = RegistryBuilder::with_builtins();
        let err = builder
            .register(Descriptor::new("email", Rule::string(|_, _| true)).with_default_message("x"))
            .unwrap_err();
        assert_eq!(err.code(), "VALID:DUPLICATE_KEY");

        builder.replace(
            Descriptor::new("email", Rule::string(|_, _| true)).with_default_message("always"),
        );
        let registry = builder.build().unwrap();
        let email = registry.lookup("email").unwrap();
        assert_eq!(email.default_messages().get(Slot::Message), Some("always"));
    }

    #[test]
    fn build_requires_a_default_message() {
        let mut builder = RegistryBuilder::new();
        builder
            .register(Descriptor::new("silent", Rule::string(|_, _| true)))
            .unwrap();
        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            Error::MissingDefaultMessage {
                key: "silent".into()
            }
        );
    }

    #[test]
    fn custom_messages_infer_slot_and_clear() {
        let mut builder = RegistryBuilder::with_builtins();
        builder.set_custom_message("email", "%s is off").unwrap();
        assert_eq!(
            builder.descriptors["email"].custom_messages().get(Slot::MessageFmt),
            Some("%s is off")
        );
        builder
            .set_custom_negated_message("email", "{field} must not be mail")
            .unwrap();
        assert_eq!(
            builder.descriptors["email"]
                .custom_messages()
                .get(Slot::NegatedMessage),
            Some("{field} must not be mail")
        );
        builder.clear_custom_messages("email").unwrap();
        assert!(builder.descriptors["email"].custom_messages().is_empty());

        let err = builder.set_custom_message("nope", "x").unwrap_err();
        assert_eq!(err.to_string(), "validator with key nope doesn't exist");
    }

    #[test]
    fn unknown_locale_leaves_messages_untouched() {
        let mut builder = RegistryBuilder::with_builtins();
        let before = builder.descriptors["email"].default_messages().clone();
        let err = builder.load_locale("fr").unwrap_err();
        assert_eq!(err.code(), "VALID:LOCALE");
        assert_eq!(builder.descriptors["email"].default_messages(), &before);
        assert!(builder.load_locale("en").is_ok());
    }

    #[test]
    fn message_table_is_checked_before_applying() {
        let mut builder = RegistryBuilder::with_builtins();
        let err = builder
            .load_message_table([("email.messagefmt", "%s changed"), ("email.bogus", "x")])
            .unwrap_err();
        assert_eq!(err.code(), "VALID:MESSAGE_SLOT");
        assert_eq!(
            builder.descriptors["email"].default_messages().get(Slot::MessageFmt),
            Some("%s must be a valid address")
        );

        builder
            .load_message_table([("email.messagefmt", "%s changed"), ("ghost.message", "x")])
            .unwrap();
        assert_eq!(
            builder.descriptors["email"].default_messages().get(Slot::MessageFmt),
            Some("%s changed")
        );
    }

    #[test]
    fn string_rule_rejects_other_shapes() {
        let rule = Rule::string(|s, _| !s.is_empty());
        assert_eq!(rule.evaluate(&Shape::Str("x"), &[]), Some(true));
        assert_eq!(rule.evaluate(&Shape::Int(1), &[]), None);
    }
}
