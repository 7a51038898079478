//! Message templates and resolution
//!
//! Every validator carries a [`MessageSet`] of four slots. *Plain* slots
//! use `{field}` / `{value}` placeholders; *formatted* slots are printf
//! templates that receive the field's display name.
//!
//! When a check fails the message is resolved from the most specific
//! source that has one, separately for the normal and the negated half:
//!
//! 1. the tag's own `->` message (plain, then formatted)
//! 2. the registry's custom messages for the key (plain, then formatted)
//! 3. the locale defaults for the key (plain, then formatted)

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::printf::sprintf;
use crate::registry::Descriptor;
use crate::value::Shape;

/// `{name}` or `{name:fmt}` placeholders in plain messages.
static PLACEHOLDER: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\{.*?\}").unwrap());

// ============================================================================
// SLOTS
// ============================================================================

/// One of the four message slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Message,
    MessageFmt,
    NegatedMessage,
    NegatedMessageFmt,
}

impl Slot {
    /// Slot for `text`: formatted when it contains `%s`, negated on request.
    pub fn infer(text: &str, negated: bool) -> Self {
        match (text.contains("%s"), negated) {
            (false, false) => Self::Message,
            (true, false) => Self::MessageFmt,
            (false, true) => Self::NegatedMessage,
            (true, true) => Self::NegatedMessageFmt,
        }
    }

    /// Message table suffix (`email.messagefmt`).
    pub fn identifier(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::MessageFmt => "messagefmt",
            Self::NegatedMessage => "negatedmessage",
            Self::NegatedMessageFmt => "negatedmessagefmt",
        }
    }

    /// Parses a message table suffix.
    pub fn from_identifier(identifier: &str) -> Result<Self> {
        match identifier {
            "message" => Ok(Self::Message),
            "messagefmt" => Ok(Self::MessageFmt),
            "negatedmessage" => Ok(Self::NegatedMessage),
            "negatedmessagefmt" => Ok(Self::NegatedMessageFmt),
            other => Err(Error::UnknownMessageSlot {
                slot: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

// ============================================================================
// MESSAGE SET
// ============================================================================

/// Four message slots. Empty slots are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_fmt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negated_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negated_message_fmt: Option<String>,
}

impl MessageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set with `text` in the slot [`Slot::infer`] picks.
    pub fn from_text(text: impl Into<String>, negated: bool) -> Self {
        let text = text.into();
        let mut set = Self::default();
        set.set(Slot::infer(&text, negated), text);
        set
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        let text = match slot {
            Slot::Message => self.message.as_deref(),
            Slot::MessageFmt => self.message_fmt.as_deref(),
            Slot::NegatedMessage => self.negated_message.as_deref(),
            Slot::NegatedMessageFmt => self.negated_message_fmt.as_deref(),
        };
        text.filter(|text| !text.is_empty())
    }

    pub fn set(&mut self, slot: Slot, text: impl Into<String>) -> &mut Self {
        let text = Some(text.into());
        match slot {
            Slot::Message => self.message = text,
            Slot::MessageFmt => self.message_fmt = text,
            Slot::NegatedMessage => self.negated_message = text,
            Slot::NegatedMessageFmt => self.negated_message_fmt = text,
        }
        self
    }

    pub fn with(mut self, slot: Slot, text: impl Into<String>) -> Self {
        self.set(slot, text);
        self
    }

    pub fn is_empty(&self) -> bool {
        [
            Slot::Message,
            Slot::MessageFmt,
            Slot::NegatedMessage,
            Slot::NegatedMessageFmt,
        ]
        .into_iter()
        .all(|slot| self.get(slot).is_none())
    }

    /// Whether the normal (non-negated) half has a message.
    pub fn has_message(&self) -> bool {
        self.get(Slot::Message).is_some() || self.get(Slot::MessageFmt).is_some()
    }
}

// ============================================================================
// FIELD VALIDATOR
// ============================================================================

/// A directive bound to one field value, ready to produce its message.
#[derive(Debug, Clone, Copy)]
pub struct FieldValidator<'a> {
    /// Display name of the field.
    pub display_name: &'a str,
    /// Value being checked.
    pub value: Shape<'a>,
    /// Resolved validator.
    pub descriptor: &'a Descriptor,
    /// Parameters from the tag.
    pub params: &'a [String],
    /// `!` prefix present.
    pub negated: bool,
    /// Messages given in the tag after `->`.
    pub field_messages: &'a MessageSet,
}

impl FieldValidator<'_> {
    /// Runs the rule, applying negation. `None` when the rule cannot
    /// evaluate this kind of value.
    pub fn is_valid(&self) -> Option<bool> {
        self.descriptor
            .rule()
            .evaluate(&self.value, self.params)
            .map(|passed| passed != self.negated)
    }

    /// Message for a failed check, honoring negation.
    pub fn failure_message(&self) -> String {
        if self.negated {
            self.negated_message()
        } else {
            self.message()
        }
    }

    pub fn message(&self) -> String {
        self.resolve(Slot::Message, Slot::MessageFmt)
    }

    pub fn negated_message(&self) -> String {
        self.resolve(Slot::NegatedMessage, Slot::NegatedMessageFmt)
    }

    fn resolve(&self, plain: Slot, formatted: Slot) -> String {
        let sources = [
            self.field_messages,
            self.descriptor.custom_messages(),
            self.descriptor.default_messages(),
        ];
        for set in sources {
            if let Some(text) = set.get(plain) {
                return self.fill_placeholders(text);
            }
            if let Some(text) = set.get(formatted) {
                return sprintf(text, &[Shape::Str(self.display_name)]);
            }
        }
        format!("{} is invalid", self.display_name)
    }

    /// Substitutes `{field}` and `{value}`; `{name:fmt}` applies a printf
    /// verb. Unknown names render as `???`.
    pub fn fill_placeholders(&self, text: &str) -> String {
        if !text.contains('{') {
            return text.to_owned();
        }
        PLACEHOLDER
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let inner = &caps[0][1..caps[0].len() - 1];
                let (name, format) = inner.split_once(':').unwrap_or((inner, "%v"));
                let arg = match name {
                    "field" => Shape::Str(self.display_name),
                    "value" => self.value,
                    _ => return "???".to_owned(),
                };
                sprintf(format, &[arg])
            })
            .into_owned()
    }
}
