//! Structural view of values
//!
//! The walker never inspects concrete types. Every validatable value
//! describes itself as a [`Shape`]: a scalar, an optional pointer, a
//! sum-type holding one value, a sequence, a string-or-other keyed map, or
//! a record with named fields. `#[derive(Validatable)]` produces the record
//! and sum-type shapes; this module covers the standard library.

use std::any::TypeId;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;

// ============================================================================
// CORE TRAITS
// ============================================================================

/// A value the walker can descend into.
pub trait Validatable {
    /// Describes this value for dispatch.
    fn shape(&self) -> Shape<'_>;
}

/// Ordered elements of a sequence.
pub trait Sequence {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the elements in order.
    fn items(&self) -> Box<dyn Iterator<Item = &dyn Validatable> + '_>;
}

/// Key/value entries of a map.
pub trait Mapping {
    /// Kind of the key type, known even for empty maps.
    fn key_kind(&self) -> Kind;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if there are no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates `(key, value)` pairs.
    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Validatable, &dyn Validatable)> + '_>;
}

/// A value with named fields, usually generated by `#[derive(Validatable)]`.
pub trait Record {
    /// Identity used to look up rule sets.
    fn record_type_id(&self) -> TypeId;

    /// Rust type name, for error messages.
    fn record_type_name(&self) -> &'static str;

    /// Every declared field name, visible or not.
    fn field_names(&self) -> &'static [&'static str];

    /// Fields the walker visits, in declaration order.
    fn fields(&self) -> Vec<FieldRef<'_>>;
}

/// One visible field of a record.
#[derive(Clone, Copy)]
pub struct FieldRef<'a> {
    /// Field identifier.
    pub name: &'static str,
    /// Compiled-in tag, if any.
    pub tag: Option<&'static str>,
    /// Error bag key override for this field's failures.
    pub error_key: Option<&'static str>,
    /// The field's value.
    pub value: &'a dyn Validatable,
}

impl<'a> FieldRef<'a> {
    /// Field without a tag.
    pub fn new(name: &'static str, value: &'a dyn Validatable) -> Self {
        Self {
            name,
            tag: None,
            error_key: None,
            value,
        }
    }

    /// Attach the compiled-in tag.
    pub fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// File failures of this field under `key` instead of the validator key.
    pub fn with_error_key(mut self, key: &'static str) -> Self {
        self.error_key = Some(key);
        self
    }
}

impl fmt::Debug for FieldRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRef")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("error_key", &self.error_key)
            .field("kind", &self.value.shape().kind())
            .finish()
    }
}

// ============================================================================
// SHAPE
// ============================================================================

/// Structural description of a value.
#[derive(Clone, Copy)]
pub enum Shape<'a> {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(&'a str),
    /// `Option`, `Box`, references and shared pointers. `None` is nil.
    Pointer(Option<&'a dyn Validatable>),
    /// A sum type holding one value, or nothing.
    Dynamic(Option<&'a dyn Validatable>),
    Sequence(&'a dyn Sequence),
    Map(&'a dyn Mapping),
    Record(&'a dyn Record),
    /// A type that explicitly opts out of validation.
    Unsupported { type_name: &'static str },
}

/// Discriminant of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int,
    Uint,
    Float,
    Str,
    Pointer,
    Dynamic,
    Sequence,
    Map,
    Record,
    Unsupported,
}

impl Kind {
    /// Scalars run every directive; everything else only complex-eligible ones.
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Bool | Self::Int | Self::Uint | Self::Float | Self::Str
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Str => "string",
            Self::Pointer => "pointer",
            Self::Dynamic => "dynamic",
            Self::Sequence => "sequence",
            Self::Map => "map",
            Self::Record => "record",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a> Shape<'a> {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Uint(_) => Kind::Uint,
            Self::Float(_) => Kind::Float,
            Self::Str(_) => Kind::Str,
            Self::Pointer(_) => Kind::Pointer,
            Self::Dynamic(_) => Kind::Dynamic,
            Self::Sequence(_) => Kind::Sequence,
            Self::Map(_) => Kind::Map,
            Self::Record(_) => Kind::Record,
            Self::Unsupported { .. } => Kind::Unsupported,
        }
    }

    /// The string payload, if this is a string.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Str(s) => Some(*s),
            _ => None,
        }
    }

    /// Zero value: `0`, `""`, `false`, nil or an empty container.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Bool(b) => !b,
            Self::Int(i) => *i == 0,
            Self::Uint(u) => *u == 0,
            Self::Float(f) => *f == 0.0,
            Self::Str(s) => s.is_empty(),
            Self::Pointer(p) | Self::Dynamic(p) => p.is_none(),
            Self::Sequence(seq) => seq.is_empty(),
            Self::Map(map) => map.is_empty(),
            Self::Record(_) | Self::Unsupported { .. } => false,
        }
    }
}

/// `{value}` rendering: scalars as-is, nil as `<nil>`, sequences `[a b]`,
/// maps `map[k:v]`, records `{a b}`.
impl fmt::Display for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Uint(u) => write!(f, "{u}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
            Self::Pointer(None) | Self::Dynamic(None) => f.write_str("<nil>"),
            Self::Pointer(Some(inner)) | Self::Dynamic(Some(inner)) => {
                write!(f, "{}", inner.shape())
            }
            Self::Sequence(seq) => {
                f.write_str("[")?;
                for (i, item) in seq.items().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item.shape())?;
                }
                f.write_str("]")
            }
            Self::Map(map) => {
                f.write_str("map[")?;
                for (i, (k, v)) in map.entries().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}:{}", k.shape(), v.shape())?;
                }
                f.write_str("]")
            }
            Self::Record(record) => {
                f.write_str("{")?;
                for (i, field) in record.fields().iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", field.value.shape())?;
                }
                f.write_str("}")
            }
            Self::Unsupported { type_name } => write!(f, "<{type_name}>"),
        }
    }
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({self})", self.kind())
    }
}

// ============================================================================
// SCALARS
// ============================================================================

impl Validatable for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Bool(*self)
    }
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl Validatable for $t {
            fn shape(&self) -> Shape<'_> {
                Shape::Int(i64::from(*self))
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl Validatable for $t {
            fn shape(&self) -> Shape<'_> {
                Shape::Uint(u64::from(*self))
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64);
impl_unsigned!(u8, u16, u32, u64);

impl Validatable for isize {
    fn shape(&self) -> Shape<'_> {
        Shape::Int(*self as i64)
    }
}

impl Validatable for usize {
    fn shape(&self) -> Shape<'_> {
        Shape::Uint(*self as u64)
    }
}

impl Validatable for f32 {
    fn shape(&self) -> Shape<'_> {
        Shape::Float(f64::from(*self))
    }
}

impl Validatable for f64 {
    fn shape(&self) -> Shape<'_> {
        Shape::Float(*self)
    }
}

impl Validatable for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(self)
    }
}

impl Validatable for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(self)
    }
}

impl Validatable for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(self)
    }
}

impl Validatable for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Unsupported { type_name: "()" }
    }
}

// ============================================================================
// POINTERS
// ============================================================================

impl<T: Validatable> Validatable for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(self.as_ref().map(|v| v as &dyn Validatable))
    }
}

impl<T: Validatable + ?Sized> Validatable for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

macro_rules! impl_pointer {
    ($($p:ident),*) => {$(
        impl<T: Validatable> Validatable for $p<T> {
            fn shape(&self) -> Shape<'_> {
                Shape::Pointer(Some(&**self))
            }
        }
    )*};
}

impl_pointer!(Box, Rc, Arc);

impl Validatable for Box<str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(self)
    }
}

impl Validatable for Rc<str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(self)
    }
}

impl Validatable for Arc<str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(self)
    }
}

// ============================================================================
// SEQUENCES
// ============================================================================

macro_rules! impl_sequence {
    ($($ty:ty => [$($generics:tt)*]),* $(,)?) => {$(
        impl<$($generics)*> Sequence for $ty {
            fn len(&self) -> usize {
                <[T]>::len(self.as_ref())
            }

            fn items(&self) -> Box<dyn Iterator<Item = &dyn Validatable> + '_> {
                Box::new(self.iter().map(|v| v as &dyn Validatable))
            }
        }

        impl<$($generics)*> Validatable for $ty {
            fn shape(&self) -> Shape<'_> {
                Shape::Sequence(self)
            }
        }
    )*};
}

impl_sequence! {
    Vec<T> => [T: Validatable],
    [T; N] => [T: Validatable, const N: usize],
    Box<[T]> => [T: Validatable],
}

impl<T: Validatable> Sequence for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn items(&self) -> Box<dyn Iterator<Item = &dyn Validatable> + '_> {
        Box::new(self.iter().map(|v| v as &dyn Validatable))
    }
}

impl<T: Validatable> Validatable for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self)
    }
}

// ============================================================================
// MAPS
// ============================================================================

/// Map key types and the kind they report.
pub trait MapKey: Validatable {
    const KIND: Kind;
}

macro_rules! impl_map_key {
    ($kind:ident: $($t:ty),*) => {$(
        impl MapKey for $t {
            const KIND: Kind = Kind::$kind;
        }
    )*};
}

impl_map_key!(Str: String, Box<str>, Rc<str>, Arc<str>, &str);
impl_map_key!(Int: i8, i16, i32, i64, isize);
impl_map_key!(Uint: u8, u16, u32, u64, usize);
impl_map_key!(Bool: bool);

impl MapKey for Cow<'_, str> {
    const KIND: Kind = Kind::Str;
}

macro_rules! impl_mapping {
    ($($map:ident => [$($bound:tt)*]),* $(,)?) => {$(
        impl<K: MapKey, V: Validatable, $($bound)*> Mapping for $map<K, V, S> {
            fn key_kind(&self) -> Kind {
                K::KIND
            }

            fn len(&self) -> usize {
                $map::len(self)
            }

            fn entries(
                &self,
            ) -> Box<dyn Iterator<Item = (&dyn Validatable, &dyn Validatable)> + '_> {
                Box::new(
                    self.iter()
                        .map(|(k, v)| (k as &dyn Validatable, v as &dyn Validatable)),
                )
            }
        }

        impl<K: MapKey, V: Validatable, $($bound)*> Validatable for $map<K, V, S> {
            fn shape(&self) -> Shape<'_> {
                Shape::Map(self)
            }
        }
    )*};
}

impl_mapping! {
    HashMap => [S: BuildHasher],
    IndexMap => [S: BuildHasher],
}

impl<K: MapKey, V: Validatable> Mapping for BTreeMap<K, V> {
    fn key_kind(&self) -> Kind {
        K::KIND
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Validatable, &dyn Validatable)> + '_> {
        Box::new(
            self.iter()
                .map(|(k, v)| (k as &dyn Validatable, v as &dyn Validatable)),
        )
    }
}

impl<K: MapKey, V: Validatable> Validatable for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(self)
    }
}
