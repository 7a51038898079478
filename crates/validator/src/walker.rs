//! Recursive walker
//!
//! Dispatches on [`Shape`]. Scalars run every directive of their field.
//! Everything else runs only complex-eligible directives and then
//! descends:
//!
//! - pointers and sum types re-dispatch the held value with the same
//!   directives; nil stops the descent
//! - records are walked field by field with their own tags
//! - sequence elements that are records are walked as records, other
//!   elements re-dispatch with the field's directives
//! - maps must be keyed by strings; record values are walked, other values
//!   are not
//!
//! Failed checks land in the [`ErrorBag`]. Anything else aborts the walk
//! with an [`Error`].

use tracing::trace;

use crate::bag::ErrorBag;
use crate::case::title_case;
use crate::error::{Error, Result};
use crate::message::FieldValidator;
use crate::registry::Registry;
use crate::ruleset::RuleSets;
use crate::tag::{self, Directive};
use crate::value::{Kind, Record, Shape, Validatable};

/// One field with its resolved directives.
struct FieldContext<'c> {
    name: &'static str,
    display: &'c str,
    error_key: Option<&'static str>,
    directives: &'c [Directive<'c>],
}

pub(crate) struct Walker<'w> {
    registry: &'w Registry,
    rule_sets: &'w RuleSets,
    rule_set: Option<&'w str>,
    max_depth: Option<usize>,
    bag: &'w mut ErrorBag,
}

impl<'w> Walker<'w> {
    pub(crate) fn new(registry: &'w Registry, rule_sets: &'w RuleSets, bag: &'w mut ErrorBag) -> Self {
        Self {
            registry,
            rule_sets,
            rule_set: None,
            max_depth: None,
            bag,
        }
    }

    /// Reads tags from the named rule set instead of the compiled-in ones.
    pub(crate) fn rule_set(mut self, name: Option<&'w str>) -> Self {
        self.rule_set = name;
        self
    }

    pub(crate) fn max_depth(mut self, limit: Option<usize>) -> Self {
        self.max_depth = limit;
        self
    }

    /// Validates a top-level value. Nil is accepted; anything other than a
    /// record behind any number of pointers is rejected.
    pub(crate) fn walk_root(&mut self, value: &dyn Validatable) -> Result<()> {
        let mut shape = value.shape();
        loop {
            match shape {
                Shape::Pointer(None) | Shape::Dynamic(None) => return Ok(()),
                Shape::Pointer(Some(inner)) | Shape::Dynamic(Some(inner)) => shape = inner.shape(),
                Shape::Record(record) => {
                    if let Some(name) = self.rule_set {
                        let rule_sets = self.rule_sets;
                        rule_sets.get(name, record)?;
                    }
                    return self.walk_record(record, 0);
                }
                other => return Err(Error::NotARecord { kind: other.kind() }),
            }
        }
    }

    fn walk_record(&mut self, record: &dyn Record, depth: usize) -> Result<()> {
        if let Some(limit) = self.max_depth.filter(|&limit| depth > limit) {
            return Err(Error::DepthExceeded {
                limit,
                type_name: record.record_type_name(),
            });
        }

        let registry = self.registry;
        let rule_sets = self.rule_sets;
        let overrides = self
            .rule_set
            .and_then(|name| rule_sets.lookup(record.record_type_id(), name));

        for field in record.fields() {
            let tag = match overrides {
                Some(set) => set.tag(field.name),
                None => field.tag,
            };
            let spec = tag::parse(tag.unwrap_or_default())
                .map_err(|source| Error::grammar(field.name, source))?;
            let display = spec
                .display_name
                .clone()
                .unwrap_or_else(|| title_case(field.name));
            let directives = spec.resolve(registry, &display)?;

            let ctx = FieldContext {
                name: field.name,
                display: &display,
                error_key: field.error_key,
                directives: &directives,
            };
            self.walk_field(&ctx, field.value.shape(), depth)?;
        }
        Ok(())
    }

    fn walk_field(&mut self, ctx: &FieldContext<'_>, shape: Shape<'_>, depth: usize) -> Result<()> {
        if shape.kind().is_scalar() {
            return self.apply(ctx, shape, false);
        }
        if let Shape::Unsupported { type_name } = shape {
            return Err(Error::UnsupportedType {
                field: ctx.name.to_owned(),
                type_name,
            });
        }

        self.apply(ctx, shape, true)?;

        match shape {
            Shape::Pointer(inner) | Shape::Dynamic(inner) => match inner {
                Some(value) => self.walk_field(ctx, value.shape(), depth),
                None => Ok(()),
            },
            Shape::Record(record) => self.walk_record(record, depth + 1),
            Shape::Sequence(seq) => {
                for item in seq.items() {
                    match item.shape() {
                        Shape::Record(record) => self.walk_record(record, depth + 1)?,
                        other => self.walk_field(ctx, other, depth)?,
                    }
                }
                Ok(())
            }
            Shape::Map(map) => {
                let kind = map.key_kind();
                if kind != Kind::Str {
                    return Err(Error::UnsupportedMapKey {
                        field: ctx.name.to_owned(),
                        kind,
                    });
                }
                for (_, value) in map.entries() {
                    if let Shape::Record(record) = value.shape() {
                        self.walk_record(record, depth + 1)?;
                    }
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Runs the field's directives against `value`, or only the
    /// complex-eligible ones.
    fn apply(&mut self, ctx: &FieldContext<'_>, value: Shape<'_>, complex_only: bool) -> Result<()> {
        for directive in ctx.directives {
            if complex_only && !directive.descriptor.accepts_complex() {
                continue;
            }

            let validator = FieldValidator {
                display_name: ctx.display,
                value,
                descriptor: directive.descriptor,
                params: &directive.spec.params,
                negated: directive.spec.negated,
                field_messages: &directive.spec.messages,
            };
            match validator.is_valid() {
                Some(true) => {}
                Some(false) => {
                    let key = match ctx.error_key {
                        Some(key) => key,
                        None => directive.descriptor.key(),
                    };
                    let message = validator.failure_message();
                    trace!(field = ctx.name, key, %message, "directive failed");
                    self.bag.add(key, message, ctx.display);
                }
                None => {
                    return Err(Error::RuleTypeMismatch {
                        field: ctx.name.to_owned(),
                        key: directive.descriptor.key().to_owned(),
                        kind: value.kind(),
                    });
                }
            }
        }
        Ok(())
    }
}
