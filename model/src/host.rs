//! Host validation for object paths.

use std::net::{Ipv4Addr, Ipv6Addr};

const MAX_LABEL_LEN: usize = 63;

/// Returns `true` if `host` is a valid `host[:port]`.
///
/// The host part is a bracketed IPv6 address, an IPv4 dotted quad, or a
/// dot-separated list of DNS-style labels (alphanumerics, `-` and `_`, not
/// starting or ending with `-`). The optional port is a decimal `u16`.
/// The empty string is accepted and means "no host".
#[must_use]
pub fn is_valid_host(host: &str) -> bool {
    if host.is_empty() {
        return true;
    }

    let (name, port) = match split_port(host) {
        Some(parts) => parts,
        None => return false,
    };
    if let Some(port) = port {
        if !is_valid_port(port) {
            return false;
        }
    }

    if let Some(inner) = name.strip_prefix('[') {
        return match inner.strip_suffix(']') {
            Some(addr) => addr.parse::<Ipv6Addr>().is_ok(),
            None => false,
        };
    }
    if looks_numeric(name) {
        return name.parse::<Ipv4Addr>().is_ok();
    }
    !name.is_empty() && name.split('.').all(is_valid_label)
}

/// Splits `host[:port]`, keeping colons inside IPv6 brackets.
fn split_port(host: &str) -> Option<(&str, Option<&str>)> {
    if host.starts_with('[') {
        let close = host.find(']')?;
        let (name, rest) = host.split_at(close + 1);
        return match rest {
            "" => Some((name, None)),
            _ => rest.strip_prefix(':').map(|port| (name, Some(port))),
        };
    }
    match host.split_once(':') {
        Some((_, port)) if port.contains(':') => None,
        Some((name, port)) => Some((name, Some(port))),
        None => Some((host, None)),
    }
}

fn is_valid_port(port: &str) -> bool {
    !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) && port.parse::<u16>().is_ok()
}

fn looks_numeric(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
