//! Built-in message locales

use crate::message::Slot;

/// `(validator key, slot, text)`.
pub type MessageEntry = (&'static str, Slot, &'static str);

/// Locales [`RegistryBuilder::load_locale`](super::RegistryBuilder::load_locale) accepts.
pub const SUPPORTED: &[&str] = &["en"];

/// Message table for `name`, if it ships.
pub fn table(name: &str) -> Option<&'static [MessageEntry]> {
    match name {
        "en" => Some(EN),
        _ => None,
    }
}

use Slot::{Message as M, MessageFmt as F, NegatedMessage as NM, NegatedMessageFmt as NF};

/// English.
pub const EN: &[MessageEntry] = &[
    ("required", M, "{field} must not be empty"),
    ("required", NM, "{field} must be empty"),
    ("between", M, "{field} is out of range"),
    ("between", NM, "{field} must be out of range"),
    ("matches", F, "%s is not in the expected format"),
    ("matches", NF, "%s must not match the pattern"),
    ("title", F, "%s must be a valid title"),
    ("title", NF, "%s must not be a title"),
    ("name", F, "%s must be a valid name"),
    ("name", NF, "%s must not be a name"),
    ("phone", F, "%s must be a valid phone number"),
    ("phone", NF, "%s must not be a phone number"),
    ("skype", F, "%s must be a valid Skype name"),
    ("skype", NF, "%s must not be a Skype name"),
    ("email", F, "%s must be a valid address"),
    ("email", NF, "%s must not be an email address"),
    ("url", F, "%s must be a full URL"),
    ("url", NF, "%s must not be a URL"),
    ("dialstring", F, "%s must be a port, IP address, or DNS address"),
    ("dialstring", NF, "%s must not be a port, IP address, or DNS address"),
    ("requrl", F, "%s must be a full URL"),
    ("requrl", NF, "%s must not be a full URL"),
    ("requri", F, "%s must be a full URI"),
    ("requri", NF, "%s must not be a full URI"),
    ("alpha", F, "%s must only contain letters"),
    ("alpha", NF, "%s must not contain letters"),
    ("utfletter", F, "%s must only contain letters"),
    ("utfletter", NF, "%s must not contain letters"),
    ("alphanum", F, "%s must only contain letters and numbers"),
    ("alphanum", NF, "%s must not contain letters or numbers"),
    ("utfletternum", F, "%s must only contain letters and numbers"),
    ("utfletternum", NF, "%s must not contain letters or numbers"),
    ("utfnumeric", F, "%s must only contain numbers"),
    ("utfnumeric", NF, "%s must not contain numbers"),
    ("utfdigit", F, "%s must only contain numbers"),
    ("utfdigit", NF, "%s must not contain numbers"),
    ("numeric", F, "%s must only contain numbers"),
    ("numeric", NF, "%s must not contain numbers"),
    ("hexadecimal", F, "%s must be a hex value"),
    ("hexadecimal", NF, "%s must not be a hex value"),
    ("hexcolor", F, "%s must be a hex color"),
    ("hexcolor", NF, "%s must not be a hex color"),
    ("rgbcolor", F, "%s must be an RGB color"),
    ("rgbcolor", NF, "%s must not be an RGB color"),
    ("lowercase", F, "%s must be all lower case"),
    ("lowercase", NF, "%s must not have lower case letters"),
    ("uppercase", F, "%s must be all upper case"),
    ("uppercase", NF, "%s must not have upper case letters"),
    ("int", F, "%s must be an integer"),
    ("int", NF, "%s must not be an integer"),
    ("float", F, "%s must be a floating point (decimal) number"),
    ("float", NF, "%s must not be a floating point (decimal) number"),
    ("null", F, "%s must be null"),
    ("null", NF, "%s must not be null"),
    ("uuid", F, "%s must be a UUID"),
    ("uuid", NF, "%s must not be a UUID"),
    ("uuidv3", F, "%s must be a UUID (v3)"),
    ("uuidv3", NF, "%s must not be a UUID (v3)"),
    ("uuidv4", F, "%s must be a UUID (v4)"),
    ("uuidv4", NF, "%s must not be a UUID (v4)"),
    ("uuidv5", F, "%s must be a UUID (v5)"),
    ("uuidv5", NF, "%s must not be a UUID (v5)"),
    ("isoalpha2", F, "%s must be a two-letter country code"),
    ("isoalpha2", NF, "%s must not be a two-letter country code"),
    ("isoalpha3", F, "%s must be a three-letter country code"),
    ("isoalpha3", NF, "%s must not be a three-letter country code"),
    ("creditcard", F, "%s must be a valid credit card number"),
    ("creditcard", NF, "%s must not be a credit card number"),
    ("isbn10", F, "%s must be a valid ISBN-10"),
    ("isbn10", NF, "%s must not be an ISBN-10"),
    ("isbn13", F, "%s must be a valid ISBN-13"),
    ("isbn13", NF, "%s must not be an ISBN-13"),
    ("json", F, "%s must be a valid JSON"),
    ("json", NF, "%s must not be JSON"),
    ("multibyte", F, "%s must be multibyte text"),
    ("multibyte", NF, "%s must not be multibyte text"),
    ("ascii", F, "%s must be ascii text"),
    ("ascii", NF, "%s must not be ascii text"),
    ("printableascii", F, "%s must be printable ascii text"),
    ("printableascii", NF, "%s must not be printable ascii text"),
    ("fullwidth", F, "%s must contain fullwidth UTF characters"),
    ("fullwidth", NF, "%s must not contain fullwidth UTF characters"),
    ("halfwidth", F, "%s must contain halfwidth UTF characters"),
    ("halfwidth", NF, "%s must not contain halfwidth UTF characters"),
    ("variablewidth", F, "%s must contain variable-width UTF characters"),
    ("variablewidth", NF, "%s must not contain variable-width UTF characters"),
    ("base64", F, "%s must be valid Base64"),
    ("base64", NF, "%s must not be Base64"),
    ("datauri", F, "%s must be a valid data URI"),
    ("datauri", NF, "%s must not be a data URI"),
    ("ip", F, "%s must be a valid IP address"),
    ("ip", NF, "%s must not be an IP address"),
    ("port", F, "%s must be a valid port"),
    ("port", NF, "%s must not be a port number"),
    ("ipv4", F, "%s must be a valid IPv4 address"),
    ("ipv4", NF, "%s must not be an IPv4 address"),
    ("dns", F, "%s must be a valid DNS name"),
    ("dns", NF, "%s must not be a DNS name"),
    ("host", F, "%s must be a valid host name"),
    ("host", NF, "%s must not be a host name"),
    ("mac", F, "%s must be a valid MAC address"),
    ("mac", NF, "%s must not be a MAC address"),
    ("latitude", F, "%s must be a valid latitude"),
    ("latitude", NF, "%s must not be a latitude"),
    ("longitude", F, "%s must be a valid longitude"),
    ("longitude", NF, "%s must not be a longitude"),
    ("ssn", F, "%s must be a valid SSN"),
    ("ssn", NF, "%s must not be a SSN"),
    ("semver", F, "%s must be a valid semantic version"),
    ("semver", NF, "%s must not be a semantic version"),
];
