//! Tag grammar
//!
//! A field tag is a pipe-separated list of directives plus optional
//! settings:
//!
//! ```text
//! name=E-mail|required|email->{field} looks wrong|!matches(^admin\,)
//! ```
//!
//! Parsing happens in two passes. [`parse`] is pure syntax and produces a
//! [`TagSpec`]; [`TagSpec::resolve`] binds every directive key to a
//! registered [`Descriptor`].

mod params;

pub use params::split_params;

use crate::error::{Error, Result, TagError};
use crate::message::MessageSet;
use crate::registry::{Descriptor, Registry};

const DIRECTIVE_SEPARATOR: char = '|';
const SETTING_TOKEN: char = '=';
const NEGATION_TOKEN: char = '!';
const MESSAGE_TOKEN: &str = "->";
const PARAM_OPEN: char = '(';
const PARAM_CLOSE: char = ')';
const SKIP_TOKEN: &str = "-";

/// One parsed directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveSpec {
    pub key: String,
    pub negated: bool,
    pub params: Vec<String>,
    /// Message given after `->`.
    pub messages: MessageSet,
}

/// A parsed field tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSpec {
    /// Value of the `name=` setting, when present and non-empty.
    pub display_name: Option<String>,
    pub directives: Vec<DirectiveSpec>,
}

/// A directive bound to its registered validator.
#[derive(Debug, Clone, Copy)]
pub struct Directive<'a> {
    pub descriptor: &'a Descriptor,
    pub spec: &'a DirectiveSpec,
}

impl TagSpec {
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Binds each directive to its validator. `field` names the field in
    /// the error for an unknown key.
    pub fn resolve<'a>(&'a self, registry: &'a Registry, field: &str) -> Result<Vec<Directive<'a>>> {
        self.directives
            .iter()
            .map(|spec| {
                registry
                    .lookup(&spec.key)
                    .map(|descriptor| Directive { descriptor, spec })
                    .ok_or_else(|| Error::unknown_validator(field, &spec.key))
            })
            .collect()
    }
}

/// Parses a raw field tag.
pub fn parse(tag: &str) -> Result<TagSpec, TagError> {
    let mut spec = TagSpec::default();

    for element in tag.split(DIRECTIVE_SEPARATOR) {
        let element = element.trim_start();
        if element.trim_end().is_empty() || element.trim_end() == SKIP_TOKEN {
            continue;
        }

        if let Some((setting, value)) = split_setting(element) {
            match setting {
                "name" => {
                    let value = value.trim();
                    spec.display_name = (!value.is_empty()).then(|| value.to_owned());
                }
                other => {
                    return Err(TagError::UnknownSetting {
                        setting: other.to_owned(),
                    });
                }
            }
            continue;
        }

        spec.directives.push(parse_directive(element)?);
    }

    Ok(spec)
}

/// `name=value` when the text before the first `=` is a bare identifier.
fn split_setting(element: &str) -> Option<(&str, &str)> {
    let (name, value) = element.split_once(SETTING_TOKEN)?;
    let name = name.trim_end();
    let is_identifier = !name.is_empty()
        && name.chars().all(|c| c.is_alphanumeric() || c == '_');
    is_identifier.then_some((name, value))
}

fn parse_directive(element: &str) -> Result<DirectiveSpec, TagError> {
    let (negated, mut rest) = match element.strip_prefix(NEGATION_TOKEN) {
        Some(rest) => (true, rest),
        None => (false, element),
    };

    let mut messages = MessageSet::default();
    if let Some(idx) = rest.find(MESSAGE_TOKEN).filter(|&idx| idx > 0) {
        let message = &rest[idx + MESSAGE_TOKEN.len()..];
        rest = &rest[..idx];
        if message.is_empty() {
            return Err(TagError::EmptyMessage {
                key: rest.trim().to_owned(),
            });
        }
        messages = MessageSet::from_text(message, negated);
    }

    let rest = rest.trim_end();
    let mut params = Vec::new();
    let key = match rest.find(PARAM_OPEN).filter(|&idx| idx > 0) {
        Some(open) => {
            let key = &rest[..open];
            let close = rest.rfind(PARAM_CLOSE);
            if close != Some(rest.len() - 1) {
                return Err(TagError::UnclosedParams {
                    key: key.trim().to_owned(),
                });
            }
            params = split_params(&rest[open + 1..rest.len() - 1]);
            key
        }
        None => rest,
    };

    Ok(DirectiveSpec {
        key: key.trim().to_owned(),
        negated,
        params,
        messages,
    })
}
