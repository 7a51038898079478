//! Named rule sets
//!
//! A rule set swaps the compiled-in tags of a record type for an
//! alternate field → tag map, so one type can be validated differently in
//! different contexts:
//!
//! ```rust,ignore
//! tagvalid::add_rule_set(
//!     "signup",
//!     &User::default(),
//!     [("password", "required|between(10,60)")],
//! )?;
//! let bag = tagvalid::validate_with_rule_sets(&user, &["valid", "signup"])?;
//! ```
//!
//! Sets are keyed by the record's concrete type and the set name.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::value::Record;

/// Name that selects the compiled-in tags.
pub const DEFAULT_RULE_SET: &str = "valid";

/// Field → tag overrides for one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    name: String,
    type_name: &'static str,
    tags: HashMap<String, String>,
}

impl RuleSet {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Tag for `field`. Fields without an entry have no directives.
    pub fn tag(&self, field: &str) -> Option<&str> {
        self.tags.get(field).map(String::as_str)
    }

    pub fn tags(&self) -> &HashMap<String, String> {
        &self.tags
    }
}

/// Rule sets for any number of record types.
#[derive(Debug, Clone, Default)]
pub struct RuleSets {
    sets: HashMap<(TypeId, String), RuleSet>,
}

impl RuleSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the set `name` for the type of `sample`.
    ///
    /// Every field named in `tags` must exist on that type.
    pub fn add<I, K, V>(&mut self, name: &str, sample: &dyn Record, tags: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        if name == DEFAULT_RULE_SET {
            return Err(Error::ReservedRuleSet {
                name: name.to_owned(),
            });
        }

        let type_name = sample.record_type_name();
        let known = sample.field_names();
        let mut map = HashMap::new();
        for (field, tag) in tags {
            let field = field.into();
            if !known.contains(&field.as_str()) {
                return Err(Error::RuleSetField {
                    field,
                    type_name: type_name.to_owned(),
                });
            }
            map.insert(field, tag.into());
        }

        debug!(rule_set = name, type_name, fields = map.len(), "adding rule set");
        self.sets.insert(
            (sample.record_type_id(), name.to_owned()),
            RuleSet {
                name: name.to_owned(),
                type_name,
                tags: map,
            },
        );
        Ok(self)
    }

    /// Like [`add`](Self::add), panicking on an unknown field.
    ///
    /// # Panics
    ///
    /// When `tags` names a field the type does not have.
    #[track_caller]
    pub fn must_add<I, K, V>(&mut self, name: &str, sample: &dyn Record, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        if let Err(err) = self.add(name, sample, tags) {
            panic!("{err}");
        }
        self
    }

    /// The set `name` registered for the type of `record`.
    pub fn get(&self, name: &str, record: &dyn Record) -> Result<&RuleSet> {
        self.lookup(record.record_type_id(), name)
            .ok_or_else(|| Error::RuleSetNotFound {
                name: name.to_owned(),
                type_name: record.record_type_name().to_owned(),
            })
    }

    pub fn lookup(&self, type_id: TypeId, name: &str) -> Option<&RuleSet> {
        self.sets.get(&(type_id, name.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

static GLOBAL_RULE_SETS: LazyLock<ArcSwap<RuleSets>> =
    LazyLock::new(|| ArcSwap::from_pointee(RuleSets::new()));

static WRITE_LOCK: Mutex<()> = Mutex::new(());

/// The current process-wide rule sets.
pub fn global_rule_sets() -> Arc<RuleSets> {
    GLOBAL_RULE_SETS.load_full()
}

fn update<F>(edit: F) -> Result<()>
where
    F: FnOnce(&mut RuleSets) -> Result<()>,
{
    let _guard = WRITE_LOCK.lock();
    let mut sets = RuleSets::clone(&GLOBAL_RULE_SETS.load());
    edit(&mut sets)?;
    GLOBAL_RULE_SETS.store(Arc::new(sets));
    Ok(())
}

/// Adds a rule set to the process-wide table.
pub fn add_rule_set<I, K, V>(name: &str, sample: &dyn Record, tags: I) -> Result<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    update(|sets| sets.add(name, sample, tags).map(|_| ()))
}

/// Adds a rule set to the process-wide table.
///
/// # Panics
///
/// When `tags` names a field the type does not have.
#[track_caller]
pub fn must_add_rule_set<I, K, V>(name: &str, sample: &dyn Record, tags: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    if let Err(err) = add_rule_set(name, sample, tags) {
        panic!("{err}");
    }
}

/// Drops every process-wide rule set.
pub fn clear_rule_sets() {
    let _guard = WRITE_LOCK.lock();
    GLOBAL_RULE_SETS.store(Arc::new(RuleSets::new()));
}
