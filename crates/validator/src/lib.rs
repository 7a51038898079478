//! # tagvalid
//!
//! Declarative validation driven by per-field tag strings.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tagvalid::prelude::*;
//!
//! #[derive(Validatable)]
//! pub struct Signup {
//!     #[valid("required|email->{field} must be a valid address")]
//!     pub email: String,
//!     #[valid("name=Display Name|between(3,30)")]
//!     pub handle: String,
//!     pub address: Option<Address>,
//! }
//!
//! let bag = tagvalid::validate_struct(&signup)?;
//! for error in &bag {
//!     println!("{error}");
//! }
//! ```
//!
//! ## Tag grammar
//!
//! A tag is a `|`-separated list. Each element is a setting
//! (`name=Display Name`) or a directive:
//!
//! - `key` runs the validator registered under `key`
//! - `!key` negates it
//! - `key(a,b)` passes parameters; `\,` is a literal comma
//! - `key->message` overrides the failure message
//!
//! Messages may use `{field}` and `{value}`, optionally with a printf verb
//! (`{value:%q}`). A message that contains `%s` is formatted with the
//! field's display name.
//!
//! ## Walking
//!
//! Validation descends through `Option`, `Box`, sequences, string-keyed maps
//! and nested records. Business failures collect in an [`ErrorBag`];
//! malformed tags and unsupported shapes return an [`Error`].

// Lets `#[derive(Validatable)]` expansions refer to `::tagvalid` inside
// this crate's own tests.
extern crate self as tagvalid;

pub mod bag;
pub mod case;
pub mod config;
pub mod engine;
pub mod error;
pub mod message;
pub mod policy;
pub mod prelude;
pub mod printf;
pub mod registry;
pub mod rules;
pub mod ruleset;
pub mod tag;
pub mod value;
mod walker;

pub use bag::{ErrorBag, FieldError};
pub use case::title_case;
pub use config::ValidateConfig;
pub use engine::{Engine, validate_struct, validate_with_rule_sets};
pub use error::{Error, Result, TagError};
pub use message::{FieldValidator, MessageSet, Slot};
pub use registry::{Descriptor, Registry, RegistryBuilder, Rule};
pub use ruleset::{
    DEFAULT_RULE_SET, RuleSet, RuleSets, add_rule_set, clear_rule_sets, must_add_rule_set,
};
pub use value::{FieldRef, Kind, MapKey, Mapping, Record, Sequence, Shape, Validatable};

#[cfg(feature = "derive")]
pub use tagvalid_macros::Validatable;
