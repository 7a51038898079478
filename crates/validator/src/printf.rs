//! printf-style formatting for message templates
//!
//! Formatted messages (`"%s must be a valid address"`) and `{value:%05d}`
//! placeholders are rendered with [`sprintf`]. Operands are [`Shape`]s, so
//! any validatable value can be formatted. Malformed directives never fail;
//! they render inline diagnostics instead:
//!
//! - missing operand: `%!s(MISSING)`
//! - operand of the wrong type: `%!d(string=abc)`
//! - leftover operands: `%!(EXTRA string=a, int=1)`
//! - trailing `%`: `%!(NOVERB)`

use std::fmt::Write as _;

use crate::value::Shape;

/// Largest width or precision honored; longer digit runs clamp to it.
const MAX_WIDTH: usize = u16::MAX as usize;

#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    minus: bool,
    plus: bool,
    space: bool,
    zero: bool,
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Formats `format` with `args`.
pub fn sprintf(format: &str, args: &[Shape<'_>]) -> String {
    let mut out = String::with_capacity(format.len() + 16);
    let mut chars = format.chars().peekable();
    let mut next_arg = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut spec = Spec::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.minus = true,
                '+' => spec.plus = true,
                ' ' => spec.space = true,
                '0' => spec.zero = true,
                '#' => spec.sharp = true,
                _ => break,
            }
            chars.next();
        }
        spec.width = read_number(&mut chars);
        if chars.peek() == Some(&'.') {
            chars.next();
            spec.precision = Some(read_number(&mut chars).unwrap_or(0));
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        let Some(arg) = args.get(next_arg) else {
            let _ = write!(out, "%!{verb}(MISSING)");
            continue;
        };
        next_arg += 1;

        match format_one(verb, &spec, arg) {
            Some(body) => out.push_str(&pad(&body, &spec, is_numeric(arg))),
            None => out.push_str(&bad_verb(verb, arg)),
        }
    }

    if next_arg < args.len() {
        out.push_str("%!(EXTRA ");
        for (i, arg) in args[next_arg..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&typed(arg));
        }
        out.push(')');
    }

    out
}

fn read_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(d as usize));
        chars.next();
    }
    value.map(|v| v.min(MAX_WIDTH))
}

fn type_name(arg: &Shape<'_>) -> &'static str {
    match arg {
        Shape::Bool(_) => "bool",
        Shape::Int(_) => "int",
        Shape::Uint(_) => "uint",
        Shape::Float(_) => "float64",
        Shape::Str(_) => "string",
        other => other.kind().as_str(),
    }
}

fn typed(arg: &Shape<'_>) -> String {
    match arg {
        Shape::Pointer(None) | Shape::Dynamic(None) => "<nil>".to_owned(),
        _ => format!("{}={arg}", type_name(arg)),
    }
}

fn bad_verb(verb: char, arg: &Shape<'_>) -> String {
    format!("%!{verb}({})", typed(arg))
}

fn signed(negative: bool, digits: String, spec: &Spec) -> String {
    if negative {
        format!("-{digits}")
    } else if spec.plus {
        format!("+{digits}")
    } else if spec.space {
        format!(" {digits}")
    } else {
        digits
    }
}

fn integer(verb: char, negative: bool, magnitude: u64, spec: &Spec) -> Option<String> {
    let digits = match verb {
        'd' | 'v' => magnitude.to_string(),
        'x' if spec.sharp => format!("0x{magnitude:x}"),
        'x' => format!("{magnitude:x}"),
        'X' if spec.sharp => format!("0X{magnitude:X}"),
        'X' => format!("{magnitude:X}"),
        'o' if spec.sharp => format!("0{magnitude:o}"),
        'o' => format!("{magnitude:o}"),
        'b' => format!("{magnitude:b}"),
        'c' => {
            return u32::try_from(magnitude)
                .ok()
                .and_then(char::from_u32)
                .filter(|_| !negative)
                .map(String::from);
        }
        'q' => {
            return u32::try_from(magnitude)
                .ok()
                .and_then(char::from_u32)
                .filter(|_| !negative)
                .map(|c| format!("{c:?}"));
        }
        _ => return None,
    };
    Some(signed(negative, digits, spec))
}

/// Rewrites Rust's `1.5e3` exponent into the signed two digit `1.5e+03` form.
fn signed_exponent(raw: &str, upper: bool) -> String {
    let (mantissa, exp) = raw.split_once('e').unwrap_or((raw, "0"));
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(rest) => ('-', rest),
        None => ('+', exp),
    };
    let e = if upper { 'E' } else { 'e' };
    format!("{mantissa}{e}{sign}{digits:0>2}")
}

fn shortest(value: f64, upper: bool) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let exp = value.abs().log10().floor() as i32;
    if (-4..21).contains(&exp) {
        format!("{value}")
    } else {
        signed_exponent(&format!("{value:e}"), upper)
    }
}

fn float(verb: char, value: f64, spec: &Spec) -> Option<String> {
    let body = match verb {
        'f' | 'F' => format!("{:.*}", spec.precision.unwrap_or(6), value.abs()),
        'e' | 'E' => {
            let precision = spec.precision.unwrap_or(6);
            signed_exponent(&format!("{:.precision$e}", value.abs()), verb == 'E')
        }
        'g' | 'G' | 'v' => match spec.precision {
            Some(p) => format!("{:.*}", p, value.abs()),
            None => shortest(value.abs(), verb == 'G'),
        },
        _ => return None,
    };
    Some(signed(value.is_sign_negative() && value != 0.0, body, spec))
}

fn format_one(verb: char, spec: &Spec, arg: &Shape<'_>) -> Option<String> {
    if verb == 'T' {
        return Some(type_name(arg).to_owned());
    }
    match *arg {
        Shape::Str(s) => match verb {
            'v' | 's' => Some(match spec.precision {
                Some(p) => s.chars().take(p).collect(),
                None => s.to_owned(),
            }),
            'q' => Some(format!("{s:?}")),
            'x' => Some(s.bytes().map(|b| format!("{b:02x}")).collect()),
            'X' => Some(s.bytes().map(|b| format!("{b:02X}")).collect()),
            _ => None,
        },
        Shape::Int(i) => integer(verb, i < 0, i.unsigned_abs(), spec),
        Shape::Uint(u) => integer(verb, false, u, spec),
        Shape::Float(x) => float(verb, x, spec),
        Shape::Bool(b) => matches!(verb, 'v' | 't').then(|| b.to_string()),
        Shape::Pointer(Some(inner)) | Shape::Dynamic(Some(inner)) => {
            format_one(verb, spec, &inner.shape())
        }
        _ => matches!(verb, 'v' | 's').then(|| arg.to_string()),
    }
}

fn is_numeric(arg: &Shape<'_>) -> bool {
    match arg {
        Shape::Int(_) | Shape::Uint(_) | Shape::Float(_) => true,
        Shape::Pointer(Some(inner)) | Shape::Dynamic(Some(inner)) => is_numeric(&inner.shape()),
        _ => false,
    }
}

fn pad(body: &str, spec: &Spec, numeric: bool) -> String {
    let len = body.chars().count();
    let Some(width) = spec.width.filter(|w| *w > len) else {
        return body.to_owned();
    };
    let fill = width - len;
    if spec.minus {
        return format!("{body}{}", " ".repeat(fill));
    }
    if spec.zero {
        let split = if numeric && body.starts_with(['+', '-', ' ']) {
            1
        } else {
            0
        };
        let (sign, digits) = body.split_at(split);
        return format!("{sign}{}{digits}", "0".repeat(fill));
    }
    format!("{}{body}", " ".repeat(fill))
}
