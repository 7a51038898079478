//! String rules
//!
//! Character-class rules (`alpha`, `numeric`, the width checks, ...)
//! accept the empty string and leave emptiness to `required`. Format
//! rules such as `email` or `uuid` do not.

use std::collections::HashMap;
use std::sync::LazyLock;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use parking_lot::RwLock;
use regex::Regex;

use super::iso3166;
use super::patterns::{
    ALPHA, ALPHANUMERIC, ASCII, CREDIT_CARD, DATA_URI_HEADER, EMAIL, FULL_WIDTH, HALF_WIDTH,
    HEXADECIMAL, HEXCOLOR, ISBN_NOISE, ISBN10, ISBN13, LATITUDE, LONGITUDE, MULTIBYTE, NAME,
    NUMERIC, PHONE, PRINTABLE_ASCII, RGBCOLOR, SKYPE, SSN, TITLE, UTF_DIGIT, UTF_LETTER,
    UTF_LETTER_NUMERIC, UTF_NUMERIC, UUID, UUID3, UUID4, UUID5,
};

/// Patterns compiled for `matches`, keyed by source.
static MATCHES_CACHE: LazyLock<RwLock<HashMap<String, Regex>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Empty or, ignoring case, `null`.
pub fn is_null(s: &str) -> bool {
    s.is_empty() || s.eq_ignore_ascii_case("null")
}

pub fn is_email(s: &str) -> bool {
    EMAIL.is_match(s)
}

/// Whether `s` matches the single regex parameter. An invalid pattern or a
/// wrong parameter count fails.
pub fn matches(s: &str, params: &[String]) -> bool {
    let [pattern] = params else {
        return false;
    };
    if let Some(re) = MATCHES_CACHE.read().get(pattern) {
        return re.is_match(s);
    }
    let Ok(re) = Regex::new(pattern) else {
        return false;
    };
    let matched = re.is_match(s);
    MATCHES_CACHE.write().insert(pattern.clone(), re);
    matched
}

pub fn is_alpha(s: &str) -> bool {
    is_null(s) || ALPHA.is_match(s)
}

pub fn is_utf_letter(s: &str) -> bool {
    is_null(s) || UTF_LETTER.is_match(s)
}

pub fn is_alphanumeric(s: &str) -> bool {
    is_null(s) || ALPHANUMERIC.is_match(s)
}

pub fn is_utf_letter_numeric(s: &str) -> bool {
    is_null(s) || UTF_LETTER_NUMERIC.is_match(s)
}

pub fn is_numeric(s: &str) -> bool {
    is_null(s) || NUMERIC.is_match(s)
}

/// Unicode numbers of any kind (`¾`, `Ⅸ`) with an optional leading sign.
pub fn is_utf_numeric(s: &str) -> bool {
    is_null(s) || strip_sign(s).is_some_and(|body| UTF_NUMERIC.is_match(body))
}

/// Unicode decimal digits with an optional leading sign.
pub fn is_utf_digit(s: &str) -> bool {
    is_null(s) || strip_sign(s).is_some_and(|body| UTF_DIGIT.is_match(body))
}

/// Drops one leading `-` or `+`. `None` when a sign appears later on.
fn strip_sign(s: &str) -> Option<&str> {
    if s.find(['+', '-']).is_some_and(|idx| idx > 0) {
        return None;
    }
    if s.len() > 1 {
        Some(s.strip_prefix(['-', '+']).unwrap_or(s))
    } else {
        Some(s)
    }
}

pub fn is_hexadecimal(s: &str) -> bool {
    HEXADECIMAL.is_match(s)
}

pub fn is_hexcolor(s: &str) -> bool {
    HEXCOLOR.is_match(s)
}

/// `rgb(R, G, B)` with components 0-255.
pub fn is_rgbcolor(s: &str) -> bool {
    RGBCOLOR.is_match(s)
}

pub fn is_lowercase(s: &str) -> bool {
    is_null(s) || s == s.to_lowercase()
}

pub fn is_uppercase(s: &str) -> bool {
    is_null(s) || s == s.to_uppercase()
}

pub fn is_title(s: &str) -> bool {
    is_null(s) || TITLE.is_match(s)
}

/// Person names: letters, combining marks, apostrophes, dots, hyphens and
/// spaces, starting with a letter.
pub fn is_name(s: &str) -> bool {
    is_null(s) || NAME.is_match(s)
}

pub fn is_phone(s: &str) -> bool {
    is_null(s) || PHONE.is_match(s)
}

pub fn is_skype(s: &str) -> bool {
    is_null(s) || SKYPE.is_match(s)
}

pub fn is_uuid(s: &str) -> bool {
    UUID.is_match(s)
}

pub fn is_uuid_v3(s: &str) -> bool {
    UUID3.is_match(s)
}

pub fn is_uuid_v4(s: &str) -> bool {
    UUID4.is_match(s)
}

pub fn is_uuid_v5(s: &str) -> bool {
    UUID5.is_match(s)
}

pub fn is_iso_alpha2(s: &str) -> bool {
    iso3166::is_alpha2(s)
}

pub fn is_iso_alpha3(s: &str) -> bool {
    iso3166::is_alpha3(s)
}

/// Card number of a known issuer that passes the Luhn check. Non-digits
/// are ignored.
pub fn is_credit_card(s: &str) -> bool {
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    if !CREDIT_CARD.is_match(&digits) {
        return false;
    }
    let sum: u32 = digits
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(i, d)| match (i % 2 == 1, d * 2) {
            (true, doubled) if doubled >= 10 => doubled - 9,
            (true, doubled) => doubled,
            (false, _) => d,
        })
        .sum();
    sum % 10 == 0
}

pub fn is_isbn10(s: &str) -> bool {
    let s = ISBN_NOISE.replace_all(s, "");
    if !ISBN10.is_match(&s) {
        return false;
    }
    let bytes = s.as_bytes();
    let mut checksum: u32 = bytes[..9]
        .iter()
        .zip(1u32..)
        .map(|(b, weight)| weight * u32::from(b - b'0'))
        .sum();
    checksum += 10 * match bytes[9] {
        b'X' => 10,
        b => u32::from(b - b'0'),
    };
    checksum % 11 == 0
}

pub fn is_isbn13(s: &str) -> bool {
    let s = ISBN_NOISE.replace_all(s, "");
    if !ISBN13.is_match(&s) {
        return false;
    }
    let digits: Vec<u32> = s.bytes().map(|b| u32::from(b - b'0')).collect();
    let checksum: u32 = digits[..12]
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();
    digits[12] == (10 - checksum % 10) % 10
}

pub fn is_json(s: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(s).is_ok()
}

/// Contains at least one non-ASCII character.
pub fn is_multibyte(s: &str) -> bool {
    is_null(s) || MULTIBYTE.is_match(s)
}

pub fn is_ascii(s: &str) -> bool {
    is_null(s) || ASCII.is_match(s)
}

pub fn is_printable_ascii(s: &str) -> bool {
    is_null(s) || PRINTABLE_ASCII.is_match(s)
}

/// Contains at least one full-width character.
pub fn is_full_width(s: &str) -> bool {
    is_null(s) || FULL_WIDTH.is_match(s)
}

/// Contains at least one half-width character.
pub fn is_half_width(s: &str) -> bool {
    is_null(s) || HALF_WIDTH.is_match(s)
}

/// Mixes full- and half-width characters.
pub fn is_variable_width(s: &str) -> bool {
    is_null(s) || (HALF_WIDTH.is_match(s) && FULL_WIDTH.is_match(s))
}

/// Padded standard Base64.
pub fn is_base64(s: &str) -> bool {
    !s.is_empty() && STANDARD.decode(s).is_ok()
}

/// `data:<mime>;base64,<payload>`.
pub fn is_data_uri(s: &str) -> bool {
    s.split_once(',')
        .is_some_and(|(header, payload)| DATA_URI_HEADER.is_match(header) && is_base64(payload))
}

pub fn is_latitude(s: &str) -> bool {
    LATITUDE.is_match(s)
}

pub fn is_longitude(s: &str) -> bool {
    LONGITUDE.is_match(s)
}

/// U.S. Social Security Number, `123-45-6789` or with spaces.
pub fn is_ssn(s: &str) -> bool {
    s.len() == 11 && SSN.is_match(s)
}

/// Semantic version, optionally prefixed with `v`.
pub fn is_semver(s: &str) -> bool {
    semver::Version::parse(s.strip_prefix('v').unwrap_or(s)).is_ok()
}
