//! Compiled patterns shared by the string rules

use std::sync::LazyLock;

use regex::Regex;

macro_rules! pattern {
    ($($name:ident = $re:expr;)+) => {
        $(
            pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($re).unwrap());
        )+
    };
}

pattern! {
    EMAIL = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";
    ALPHA = r"^[a-zA-Z]+$";
    ALPHANUMERIC = r"^[a-zA-Z0-9]+$";
    NUMERIC = r"^[0-9]+$";
    UTF_LETTER = r"^\p{L}+$";
    UTF_LETTER_NUMERIC = r"^[\p{L}\p{N}]+$";
    UTF_NUMERIC = r"^\p{N}+$";
    UTF_DIGIT = r"^\p{Nd}+$";
    INT = r"^(?:[-+]?(?:0|[1-9][0-9]*))$";
    FLOAT = r"^(?:[-+]?(?:[0-9]+))?(?:\.[0-9]*)?(?:[eE][\+\-]?(?:[0-9]+))?$";
    HEXADECIMAL = r"^[0-9a-fA-F]+$";
    HEXCOLOR = r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$";
    RGBCOLOR = r"^rgb\(\s*(0|[1-9]\d?|1\d\d?|2[0-4]\d|25[0-5])\s*,\s*(0|[1-9]\d?|1\d\d?|2[0-4]\d|25[0-5])\s*,\s*(0|[1-9]\d?|1\d\d?|2[0-4]\d|25[0-5])\s*\)$";
    UUID = r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$";
    UUID3 = r"^[0-9a-f]{8}-[0-9a-f]{4}-3[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$";
    UUID4 = r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
    UUID5 = r"^[0-9a-f]{8}-[0-9a-f]{4}-5[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
    CREDIT_CARD = r"^(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|6(?:011|5[0-9][0-9])[0-9]{12}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|(?:2131|1800|35[0-9]{3})[0-9]{11})$";
    ISBN10 = r"^(?:[0-9]{9}X|[0-9]{10})$";
    ISBN13 = r"^[0-9]{13}$";
    ISBN_NOISE = r"[\s-]+";
    ASCII = r"^[\x00-\x7F]+$";
    PRINTABLE_ASCII = r"^[\x20-\x7E]+$";
    MULTIBYTE = r"[^\x00-\x7F]";
    FULL_WIDTH = r"[^\x{0020}-\x{007E}\x{FF61}-\x{FF9F}\x{FFA0}-\x{FFDC}\x{FFE8}-\x{FFEE}0-9a-zA-Z]";
    HALF_WIDTH = r"[\x{0020}-\x{007E}\x{FF61}-\x{FF9F}\x{FFA0}-\x{FFDC}\x{FFE8}-\x{FFEE}0-9a-zA-Z]";
    DATA_URI_HEADER = r"^data:.+/(.+);base64$";
    LATITUDE = r"^[-+]?([1-8]?\d(\.\d+)?|90(\.0+)?)$";
    LONGITUDE = r"^[-+]?(180(\.0+)?|((1[0-7]\d)|([1-9]?\d))(\.\d+)?)$";
    DNS_NAME = r"^([a-zA-Z0-9_][a-zA-Z0-9_-]{0,62})(\.[a-zA-Z0-9_][a-zA-Z0-9_-]{0,62})*[._]?$";
    SSN = r"^\d{3}[- ]?\d{2}[- ]?\d{4}$";
    TITLE = r"^[\p{L}\p{N}][\p{L}\p{M}\p{N}\p{P}\p{Zs}]*$";
    NAME = r"^\p{L}[\p{L}\p{M}' .-]*$";
    PHONE = r"^\+?[0-9][0-9 ().-]{4,19}$";
    SKYPE = r"^[a-zA-Z][a-zA-Z0-9._,:-]{5,31}$";
}
