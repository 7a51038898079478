//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use tagvalid::prelude::*;
//!
//! let bag = validate_struct(&form)?;
//! if bag.has_errors() {
//!     eprintln!("{bag}");
//! }
//! ```

// ============================================================================
// ENTRY POINTS
// ============================================================================

pub use crate::engine::{Engine, validate_struct, validate_with_rule_sets};
pub use crate::config::ValidateConfig;

// ============================================================================
// RESULTS AND ERRORS
// ============================================================================

pub use crate::bag::{ErrorBag, FieldError};
pub use crate::error::{Error, TagError};

// ============================================================================
// VALUES
// ============================================================================

pub use crate::value::{FieldRef, Kind, Record, Shape, Validatable};

// ============================================================================
// REGISTRY AND RULE SETS
// ============================================================================

pub use crate::message::{MessageSet, Slot};
pub use crate::registry::{Descriptor, Registry, RegistryBuilder, Rule};
pub use crate::ruleset::{RuleSets, add_rule_set, must_add_rule_set};

// ============================================================================
// POLICY HELPERS
// ============================================================================

pub use crate::policy::{CustomValidate, PolicyViolation, ValidatorContext};

// ============================================================================
// DERIVE
// ============================================================================

#[cfg(feature = "derive")]
pub use tagvalid_macros::Validatable;
