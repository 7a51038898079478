//! Validation entry points
//!
//! An [`Engine`] pins one registry snapshot and one rule-set table. The
//! free functions [`validate_struct`] and [`validate_with_rule_sets`] use
//! the process-wide ones.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::bag::ErrorBag;
use crate::config::ValidateConfig;
use crate::error::Result;
use crate::registry::{self, Registry};
use crate::ruleset::{self, DEFAULT_RULE_SET, RuleSets};
use crate::value::Validatable;
use crate::walker::Walker;

#[derive(Debug, Clone)]
pub struct Engine {
    registry: Arc<Registry>,
    rule_sets: Arc<RuleSets>,
    max_depth: Option<usize>,
}

impl Engine {
    /// An engine over `registry` with no rule sets.
    pub fn new(registry: impl Into<Arc<Registry>>) -> Self {
        Self {
            registry: registry.into(),
            rule_sets: Arc::new(RuleSets::new()),
            max_depth: None,
        }
    }

    /// An engine over the current global registry and rule sets.
    pub fn global() -> Self {
        Self {
            registry: registry::global(),
            rule_sets: ruleset::global_rule_sets(),
            max_depth: None,
        }
    }

    /// Built-in validators with the configured locale and messages.
    pub fn from_config(config: &ValidateConfig) -> Result<Self> {
        let mut builder = Registry::builder();
        config.apply(&mut builder)?;
        let mut engine = Self::new(builder.build()?);
        engine.max_depth = config.max_depth;
        Ok(engine)
    }

    pub fn with_rule_sets(mut self, rule_sets: impl Into<Arc<RuleSets>>) -> Self {
        self.rule_sets = rule_sets.into();
        self
    }

    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn rule_sets(&self) -> &RuleSets {
        &self.rule_sets
    }

    /// Validates `value` with its compiled-in tags.
    pub fn validate(&self, value: &dyn Validatable) -> Result<ErrorBag> {
        let mut bag = ErrorBag::new();
        self.validate_into(value, &mut bag, None)?;
        Ok(bag)
    }

    /// Validates `value` into an existing bag, reading tags from
    /// `rule_set` when given.
    ///
    /// Failures collected before an internal error stay in `bag`.
    pub fn validate_into(
        &self,
        value: &dyn Validatable,
        bag: &mut ErrorBag,
        rule_set: Option<&str>,
    ) -> Result<()> {
        let rule_set = rule_set.filter(|name| *name != DEFAULT_RULE_SET);
        let before = bag.len();
        let result = Walker::new(&self.registry, &self.rule_sets, bag)
            .rule_set(rule_set)
            .max_depth(self.max_depth)
            .walk_root(value);

        match &result {
            Ok(()) => debug!(
                rule_set = rule_set.unwrap_or(DEFAULT_RULE_SET),
                errors = bag.len() - before,
                "validated"
            ),
            Err(err) => warn!(code = err.code(), error = %err, "validation aborted"),
        }
        result
    }

    /// Validates `value` once per named rule set, collecting every failure
    /// in one bag. `"valid"` names the compiled-in tags.
    pub fn validate_with_rule_sets(&self, value: &dyn Validatable, names: &[&str]) -> Result<ErrorBag> {
        let mut bag = ErrorBag::new();
        for name in names {
            self.validate_into(value, &mut bag, Some(*name))?;
        }
        Ok(bag)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::global()
    }
}

/// Validates `value` with its compiled-in tags and the global registry.
///
/// Business failures are in the returned bag; `Err` means the tags or the
/// value's structure could not be processed.
pub fn validate_struct(value: &dyn Validatable) -> Result<ErrorBag> {
    Engine::global().validate(value)
}

/// Validates `value` under each named global rule set.
pub fn validate_with_rule_sets(value: &dyn Validatable, names: &[&str]) -> Result<ErrorBag> {
    Engine::global().validate_with_rule_sets(value, names)
}
