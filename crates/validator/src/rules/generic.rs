//! Rules over any value shape

use crate::value::Shape;

use super::net::{is_port_number, is_port_str};
use super::patterns::{FLOAT, INT};
use super::strings::is_null;

/// Present and non-empty.
///
/// Strings must contain more than whitespace, numbers must be positive,
/// collections must have elements and pointers must be set. Booleans and
/// records always count as present.
pub fn required(value: &Shape<'_>, _params: &[String]) -> bool {
    match value {
        Shape::Int(i) => *i > 0,
        Shape::Uint(u) => *u > 0,
        Shape::Float(f) => *f > 0.0,
        Shape::Str(s) => !s.trim().is_empty(),
        Shape::Pointer(inner) | Shape::Dynamic(inner) => inner.is_some(),
        Shape::Sequence(seq) => !seq.is_empty(),
        Shape::Map(map) => !map.is_empty(),
        Shape::Bool(_) | Shape::Record(_) | Shape::Unsupported { .. } => true,
    }
}

/// Inclusive `between(min,max)`.
///
/// Strings compare their length in characters, numbers their value. Empty
/// strings and zero are left to `required`. Anything else fails, as does a
/// parameter list that is not exactly two numbers.
pub fn between(value: &Shape<'_>, params: &[String]) -> bool {
    let [min, max] = params else {
        return false;
    };
    match value {
        Shape::Str(s) if s.is_empty() => true,
        Shape::Int(0) | Shape::Uint(0) => true,
        Shape::Float(f) if *f == 0.0 => true,
        Shape::Str(s) => int_range(min, max).is_some_and(|(min, max)| {
            let len = i64::try_from(s.chars().count()).unwrap_or(i64::MAX);
            (min..=max).contains(&len)
        }),
        Shape::Int(i) => int_range(min, max).is_some_and(|(min, max)| (min..=max).contains(i)),
        Shape::Uint(u) => int_range(min, max).is_some_and(|(min, max)| {
            (i128::from(min)..=i128::from(max)).contains(&i128::from(*u))
        }),
        Shape::Float(f) => float_range(min, max).is_some_and(|(min, max)| *f >= min && *f <= max),
        _ => false,
    }
}

/// Integer string (empty allowed) or any integer value.
pub fn is_int(value: &Shape<'_>, _params: &[String]) -> bool {
    match value {
        Shape::Str(s) => is_null(s) || INT.is_match(s),
        Shape::Int(_) | Shape::Uint(_) => true,
        _ => false,
    }
}

/// Non-empty decimal string or any floating point value.
pub fn is_float(value: &Shape<'_>, _params: &[String]) -> bool {
    match value {
        Shape::Str(s) => !s.is_empty() && FLOAT.is_match(s),
        Shape::Float(_) => true,
        _ => false,
    }
}

/// Empty or `null` string, or a nil pointer.
pub fn is_null_value(value: &Shape<'_>, _params: &[String]) -> bool {
    match value {
        Shape::Str(s) => is_null(s),
        Shape::Pointer(inner) | Shape::Dynamic(inner) => inner.is_none(),
        _ => false,
    }
}

/// Port 1-65535, as a decimal string or an integer.
pub fn is_port(value: &Shape<'_>, _params: &[String]) -> bool {
    match value {
        Shape::Str(s) => is_port_str(s),
        Shape::Int(i) => is_port_number(*i),
        Shape::Uint(u) => i64::try_from(*u).is_ok_and(is_port_number),
        _ => false,
    }
}

fn int_range(min: &str, max: &str) -> Option<(i64, i64)> {
    Some((parse_int(min)?, parse_int(max)?))
}

fn float_range(min: &str, max: &str) -> Option<(f64, f64)> {
    Some((min.trim().parse().ok()?, max.trim().parse().ok()?))
}

/// Parses an integer the way literals are written: optional sign, then
/// decimal, `0x` hex, `0o` or leading-zero octal, or `0b` binary, with
/// `_` separators between digits.
pub(crate) fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let lower = unsigned.to_ascii_lowercase();
    let (radix, digits) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (8, &lower[1..])
    } else {
        (10, lower.as_str())
    };

    let well_formed = !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__");
    if !well_formed {
        return None;
    }
    let digits = digits.replace('_', "");
    let magnitude = i128::from_str_radix(&digits, radix).ok()?;
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}
