//! # IP Address Validation
//!
//! File: cli/src/common/network/address.rs
//!
//! ## Overview
//!
//! Decides whether a string is a complete IPv4 or IPv6 address and which
//! family it belongs to. Parsing is delegated to `std::net::IpAddr`, which
//! accepts dotted-quad IPv4, colon-hex IPv6 (including `::` compression and
//! IPv4-mapped forms such as `::ffff:192.0.2.1`) and rejects everything else,
//! including octets with leading zeros and surrounding whitespace.
//!
//! Used by the inventory store when adding or updating devices.
//!
use std::fmt;
use std::net::IpAddr;

/// The address family of a valid IP address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "IPv4"),
            AddressFamily::V6 => write!(f, "IPv6"),
        }
    }
}

impl From<&IpAddr> for AddressFamily {
    fn from(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }
}

/// Returns the family of `input` if it is a valid IP address, `None` otherwise.
///
/// Never panics; malformed input is simply reported as `None`.
pub fn validate_ip(input: &str) -> Option<AddressFamily> {
    input.parse::<IpAddr>().ok().map(|addr| AddressFamily::from(&addr))
}

/// Convenience wrapper around [`validate_ip`].
pub fn is_valid_ip(input: &str) -> bool {
    validate_ip(input).is_some()
}
