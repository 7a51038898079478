//! Network address rules

use std::borrow::Cow;
use std::net::IpAddr;

use url::{Host, Url};

use super::patterns::DNS_NAME;

/// Schemes `url` accepts. Scheme-less input is read as `http`.
const URL_SCHEMES: &[&str] = &["http", "https", "ftp", "tcp", "udp", "ws", "wss"];

const MAX_URL_LEN: usize = 2083;

/// Absolute or scheme-less URL with a real host. Empty is valid.
pub fn is_url(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.len() >= MAX_URL_LEN
        || s.len() <= 3
        || s.starts_with('.')
        || s.chars().any(char::is_whitespace)
    {
        return false;
    }

    let candidate = if s.contains("://") {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(format!("http://{s}"))
    };
    let Ok(url) = Url::parse(&candidate) else {
        return false;
    };
    if !URL_SCHEMES.contains(&url.scheme()) {
        return false;
    }
    match url.host() {
        Some(Host::Domain(domain)) => {
            !domain.starts_with('.')
                && (domain == "localhost" || (domain.contains('.') && is_dns_name(domain)))
        }
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => true,
        None => false,
    }
}

/// Absolute URL with a scheme.
pub fn is_request_url(s: &str) -> bool {
    Url::parse(s).is_ok_and(|url| !url.scheme().is_empty())
}

/// Absolute URL or absolute path.
pub fn is_request_uri(s: &str) -> bool {
    if s.starts_with('/') {
        return !s.chars().any(|c| c.is_whitespace() || c.is_control());
    }
    Url::parse(s).is_ok()
}

pub fn is_ip(s: &str) -> bool {
    s.parse::<IpAddr>().is_ok()
}

/// IPv4, including the IPv4-mapped IPv6 notation.
pub fn is_ipv4(s: &str) -> bool {
    is_ip(s) && s.contains('.')
}

/// DNS name of at most 255 characters, not counting dots.
pub fn is_dns_name(s: &str) -> bool {
    if s.is_empty() || s.chars().filter(|&c| c != '.').count() > 255 {
        return false;
    }
    DNS_NAME.is_match(s)
}

pub fn is_host(s: &str) -> bool {
    is_ip(s) || is_dns_name(s)
}

/// Port number 1-65535 in decimal.
pub fn is_port_str(s: &str) -> bool {
    s.parse::<i64>().is_ok_and(is_port_number)
}

pub(crate) fn is_port_number(port: i64) -> bool {
    (1..=65535).contains(&port)
}

/// `host:port` or `[ipv6]:port` usable for dialing.
pub fn is_dial_string(s: &str) -> bool {
    split_host_port(s).is_some_and(|(host, port)| {
        !host.is_empty() && !port.is_empty() && (is_dns_name(host) || is_ip(host)) && is_port_str(port)
    })
}

fn split_host_port(s: &str) -> Option<(&str, &str)> {
    if let Some(rest) = s.strip_prefix('[') {
        let (host, tail) = rest.split_once(']')?;
        return Some((host, tail.strip_prefix(':')?));
    }
    let (host, port) = s.rsplit_once(':')?;
    (!host.contains(':')).then_some((host, port))
}

/// EUI-48, EUI-64 or 20-octet IP-over-InfiniBand address in colon,
/// hyphen or dot notation.
pub fn is_mac(s: &str) -> bool {
    let (separator, group_len) = if s.contains(':') {
        (':', 2)
    } else if s.contains('-') {
        ('-', 2)
    } else if s.contains('.') {
        ('.', 4)
    } else {
        return false;
    };

    let groups: Vec<&str> = s.split(separator).collect();
    let octets = groups.len() * group_len / 2;
    matches!(octets, 6 | 8 | 20)
        && groups
            .iter()
            .all(|g| g.len() == group_len && g.chars().all(|c| c.is_ascii_hexdigit()))
}
