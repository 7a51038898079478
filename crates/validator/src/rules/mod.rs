//! Built-in validators
//!
//! The predicates are plain functions and usable on their own. The
//! registry wraps them in [`Descriptor`]s under their tag keys; messages
//! come from the locale table.

pub mod generic;
pub mod iso3166;
pub mod net;
mod patterns;
pub mod strings;

use crate::registry::{Descriptor, Rule};

fn string_rule(key: &str, check: fn(&str) -> bool) -> Descriptor {
    Descriptor::new(key, Rule::string(move |s, _| check(s)))
}

/// Every built-in validator, without messages.
pub(crate) fn builtin_descriptors() -> Vec<Descriptor> {
    let mut descriptors = vec![
        Descriptor::new("required", Rule::complex(generic::required)),
        Descriptor::new("between", Rule::generic(generic::between)),
        Descriptor::new("int", Rule::generic(generic::is_int)),
        Descriptor::new("float", Rule::generic(generic::is_float)),
        Descriptor::new("null", Rule::generic(generic::is_null_value)),
        Descriptor::new("port", Rule::generic(generic::is_port)),
        Descriptor::new("matches", Rule::string(strings::matches)),
    ];

    let string_rules: [(&str, fn(&str) -> bool); 48] = [
        ("title", strings::is_title),
        ("name", strings::is_name),
        ("phone", strings::is_phone),
        ("skype", strings::is_skype),
        ("email", strings::is_email),
        ("url", net::is_url),
        ("dialstring", net::is_dial_string),
        ("requrl", net::is_request_url),
        ("requri", net::is_request_uri),
        ("alpha", strings::is_alpha),
        ("utfletter", strings::is_utf_letter),
        ("alphanum", strings::is_alphanumeric),
        ("utfletternum", strings::is_utf_letter_numeric),
        ("utfnumeric", strings::is_utf_numeric),
        ("numeric", strings::is_numeric),
        ("utfdigit", strings::is_utf_digit),
        ("hexadecimal", strings::is_hexadecimal),
        ("hexcolor", strings::is_hexcolor),
        ("rgbcolor", strings::is_rgbcolor),
        ("lowercase", strings::is_lowercase),
        ("uppercase", strings::is_uppercase),
        ("uuid", strings::is_uuid),
        ("uuidv3", strings::is_uuid_v3),
        ("uuidv4", strings::is_uuid_v4),
        ("uuidv5", strings::is_uuid_v5),
        ("isoalpha2", strings::is_iso_alpha2),
        ("isoalpha3", strings::is_iso_alpha3),
        ("creditcard", strings::is_credit_card),
        ("isbn10", strings::is_isbn10),
        ("isbn13", strings::is_isbn13),
        ("json", strings::is_json),
        ("multibyte", strings::is_multibyte),
        ("ascii", strings::is_ascii),
        ("printableascii", strings::is_printable_ascii),
        ("fullwidth", strings::is_full_width),
        ("halfwidth", strings::is_half_width),
        ("variablewidth", strings::is_variable_width),
        ("base64", strings::is_base64),
        ("datauri", strings::is_data_uri),
        ("ip", net::is_ip),
        ("ipv4", net::is_ipv4),
        ("dns", net::is_dns_name),
        ("host", net::is_host),
        ("mac", net::is_mac),
        ("latitude", strings::is_latitude),
        ("longitude", strings::is_longitude),
        ("ssn", strings::is_ssn),
        ("semver", strings::is_semver),
    ];
    descriptors.extend(
        string_rules
            .into_iter()
            .map(|(key, check)| string_rule(key, check)),
    );
    descriptors
}
