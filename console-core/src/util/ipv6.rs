//! IPv6 text normalization.
//!
//! The device reports IPv6 addresses in the expanded, upper-case form
//! (`FE80:0000:0000:...`). The console shows them in the compressed form of
//! RFC 5952, which is what `Ipv6Addr`'s `Display` produces.

#[cfg(test)]
#[path = "ipv6_test.rs"]
mod ipv6_test;

use std::net::Ipv6Addr;

/// Return `raw` in canonical RFC 5952 form, or `None` if it is not IPv6.
///
/// A zone suffix (`%en0`) is preserved.
#[must_use]
pub fn canonical_ipv6(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let (address, zone) = match trimmed.split_once('%') {
        Some((address, zone)) => (address, Some(zone)),
        None => (trimmed, None),
    };
    let parsed: Ipv6Addr = address.parse().ok()?;
    Some(match zone {
        Some(zone) => format!("{parsed}%{zone}"),
        None => parsed.to_string(),
    })
}

/// Canonicalize `raw` if it is IPv6, otherwise return it unchanged.
#[must_use]
pub fn normalize_address(raw: &str) -> String {
    canonical_ipv6(raw).unwrap_or_else(|| raw.to_owned())
}
