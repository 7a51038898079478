//! Policy checks for form input
//!
//! Stand-alone checks that do not go through tags: password length,
//! price amounts and character-set restrictions. Each returns the
//! violation with a user-facing message.
//!
//! Types that need checks tags cannot express implement
//! [`CustomValidate`] and report into a [`ValidatorContext`].

use indexmap::IndexMap;
use rust_decimal::Decimal;
use thiserror::Error;

const DIACRITICS: &str = ".,:;!?'\"";
const DIGITS: &str = "1234567890";
const SKYPE_EXTRA: &str = "._-";

/// Largest accepted amount.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// A failed policy check.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("Password must be less than {max} characters long")]
    PasswordTooLong { max: usize },

    #[error("That isn't a valid amount")]
    InvalidAmount,

    #[error("The amount cannot be negative")]
    NegativeAmount,

    #[error("The amount is too big")]
    AmountTooBig,

    #[error("Must contain only one of the following characters \"{allowed}\"")]
    CharacterNotAllowed { allowed: String },

    #[error("Must contain only digits")]
    DigitsOnly,

    #[error("Must contain only basic latin letters, numbers or spaces")]
    BasicLatinOnly,

    #[error("Must contain only letters, numbers or spaces")]
    LettersNumbersSpacesOnly,

    #[error("Must contain only letters, numbers, spaces or characters \"{extra}\"")]
    LettersNumbersSpacesOr { extra: String },
}

pub type PolicyResult = Result<(), PolicyViolation>;

// ============================================================================
// PASSWORD
// ============================================================================

/// Length bounds for passwords, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_len: 10,
            max_len: 60,
        }
    }
}

impl PasswordPolicy {
    pub fn check(&self, password: &str) -> PolicyResult {
        let len = password.chars().count();
        if len < self.min_len {
            Err(PolicyViolation::PasswordTooShort { min: self.min_len })
        } else if len > self.max_len {
            Err(PolicyViolation::PasswordTooLong { max: self.max_len })
        } else {
            Ok(())
        }
    }
}

/// Checks `password` against the default policy.
pub fn valid_password(password: &str) -> PolicyResult {
    PasswordPolicy::default().check(password)
}

// ============================================================================
// PRICE
// ============================================================================

/// A decimal amount between zero and [`MAX_AMOUNT`]. Empty input is left
/// to `required`.
pub fn valid_price_str(text: &str) -> PolicyResult {
    if text.is_empty() {
        return Ok(());
    }
    let amount: Decimal = text.parse().map_err(|_| PolicyViolation::InvalidAmount)?;
    valid_price(amount)
}

pub fn valid_price(amount: Decimal) -> PolicyResult {
    if amount.is_sign_negative() && !amount.is_zero() {
        Err(PolicyViolation::NegativeAmount)
    } else if amount > MAX_AMOUNT {
        Err(PolicyViolation::AmountTooBig)
    } else {
        Ok(())
    }
}

// ============================================================================
// CHARACTER SETS
// ============================================================================

pub fn contains_only(text: &str, allowed: &str) -> PolicyResult {
    if text.chars().all(|c| allowed.contains(c)) {
        Ok(())
    } else {
        Err(PolicyViolation::CharacterNotAllowed {
            allowed: allowed.to_owned(),
        })
    }
}

pub fn contains_only_digits(text: &str) -> PolicyResult {
    contains_only(text, DIGITS).map_err(|_| PolicyViolation::DigitsOnly)
}

pub fn contains_only_basic_latin_letters_and_spaces(text: &str) -> PolicyResult {
    if text
        .chars()
        .all(|c| c.is_whitespace() || c.is_ascii_alphabetic())
    {
        Ok(())
    } else {
        Err(PolicyViolation::BasicLatinOnly)
    }
}

pub fn contains_only_letters_numbers_spaces(text: &str) -> PolicyResult {
    contains_only_letters_numbers_spaces_or(text, "")
}

pub fn contains_only_letters_numbers_spaces_interpunctions(text: &str) -> PolicyResult {
    contains_only_letters_numbers_spaces_or(text, DIACRITICS)
}

pub fn contains_only_letters_numbers_spaces_or(text: &str, extra: &str) -> PolicyResult {
    letters_numbers_or(text, extra, true)
}

/// Letters, numbers and the characters in `extra`; no whitespace.
pub fn contains_only_letters_numbers_or(text: &str, extra: &str) -> PolicyResult {
    letters_numbers_or(text, extra, false)
}

pub fn contains_only_letters_numbers_or_diacritics(text: &str) -> PolicyResult {
    contains_only_letters_numbers_or(text, DIACRITICS)
}

/// Skype names: letters, numbers, `.`, `_` and `-`.
pub fn valid_skype(text: &str) -> PolicyResult {
    contains_only_letters_numbers_or(text, SKYPE_EXTRA)
}

fn letters_numbers_or(text: &str, extra: &str, spaces: bool) -> PolicyResult {
    let ok = text.chars().all(|c| {
        c.is_alphabetic() || c.is_numeric() || extra.contains(c) || (spaces && c.is_whitespace())
    });
    match (ok, extra.is_empty()) {
        (true, _) => Ok(()),
        (false, true) => Err(PolicyViolation::LettersNumbersSpacesOnly),
        (false, false) => Err(PolicyViolation::LettersNumbersSpacesOr {
            extra: extra.to_owned(),
        }),
    }
}

// ============================================================================
// CUSTOM HOOK
// ============================================================================

/// Field → message collected by [`CustomValidate`] implementations. A
/// later message for the same field replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorContext {
    errors: IndexMap<String, String>,
}

impl ValidatorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.errors.insert(field.into(), message.into());
        self
    }

    /// Records the violation of a failed check.
    pub fn check(&mut self, field: impl Into<String>, result: PolicyResult) -> &mut Self {
        if let Err(violation) = result {
            self.add_error(field, violation.to_string());
        }
        self
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &IndexMap<String, String> {
        &self.errors
    }

    pub fn into_errors(self) -> IndexMap<String, String> {
        self.errors
    }
}

/// Checks a type runs beyond its tags.
pub trait CustomValidate {
    fn validate(&self, ctx: &mut ValidatorContext);
}
