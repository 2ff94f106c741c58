//! # Subnet Planner
//!
//! File: cli/src/common/network/subnet.rs
//!
//! ## Overview
//!
//! Parses CIDR notation (`10.0.10.0/24`, `2001:db8::/64`) and derives the
//! network-level facts an operator needs when planning an address range:
//!
//! - the network address (host bits always cleared, whatever the input had),
//! - netmask and broadcast address (IPv4 only),
//! - usable host count and first/last usable host (IPv4 only),
//! - the total number of addresses in the prefix,
//! - a bounded sample of consecutive host addresses (both families).
//!
//! ## Usable hosts
//!
//! | prefix  | usable            | first     | last          |
//! |---------|-------------------|-----------|---------------|
//! | /32     | 1                 | network   | network       |
//! | /31     | 2 (point-to-point)| network   | broadcast     |
//! | /0-/30  | 2^(32-p) - 2      | network+1 | broadcast-1   |
//!
//! IPv6 has no broadcast and its ranges are too large to enumerate, so only
//! the network address and a sample starting at it are reported.
//!
//! ## Examples
//!
//! ```rust
//! let planner = SubnetPlanner::new(5);
//! let result = planner.analyze("10.0.10.5/24")?;
//! assert_eq!(result.network.to_string(), "10.0.10.0");
//! ```
//!
use crate::common::network::address::AddressFamily;
use crate::core::error::CidrError;
use ipnetwork::{IpNetworkError, Ipv4Network, Ipv6Network};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use tracing::debug;

/// Number of sample addresses reported when nothing else is configured.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// IPv4-only facts about a subnet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv4Details {
    pub netmask: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub usable_hosts: u64,
    pub first_usable: Ipv4Addr,
    pub last_usable: Ipv4Addr,
}

/// The result of analyzing one CIDR string. Recomputed on every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetResult {
    pub network: IpAddr,
    pub prefix_len: u8,
    /// Total addresses covered by the prefix. `None` only for `::/0` (2^128).
    pub total_addresses: Option<u128>,
    /// Present for IPv4 networks, absent for IPv6.
    pub ipv4: Option<Ipv4Details>,
    /// Ascending, consecutive addresses; never longer than the planner's sample size.
    pub samples: Vec<IpAddr>,
}

impl SubnetResult {
    pub fn family(&self) -> AddressFamily {
        AddressFamily::from(&self.network)
    }

    /// Number of host bits left by the prefix.
    pub fn host_bits(&self) -> u8 {
        match self.family() {
            AddressFamily::V4 => 32 - self.prefix_len,
            AddressFamily::V6 => 128 - self.prefix_len,
        }
    }
}

/// Analyzes CIDR strings, sampling at most `sample_size` addresses per result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetPlanner {
    sample_size: usize,
}

impl Default for SubnetPlanner {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_SIZE)
    }
}

impl SubnetPlanner {
    pub fn new(sample_size: usize) -> Self {
        Self { sample_size }
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Parses `cidr` and computes the derived subnet fields.
    ///
    /// # Errors
    ///
    /// - `CidrError::MalformedInput` if the `/` separator or either side of it is missing.
    /// - `CidrError::InvalidAddress` if the address part is not an IPv4/IPv6 address.
    /// - `CidrError::InvalidPrefix` if the prefix is not a number in range for the family.
    pub fn analyze(&self, cidr: &str) -> Result<SubnetResult, CidrError> {
        let input = cidr.trim();
        let (address_part, prefix_part) = split_cidr(input)?;

        let address: IpAddr =
            address_part
                .parse()
                .map_err(|_| CidrError::InvalidAddress {
                    address: address_part.to_string(),
                })?;

        let max_prefix = match address {
            IpAddr::V4(_) => 32,
            IpAddr::V6(_) => 128,
        };
        let prefix_len = parse_prefix(prefix_part, max_prefix)?;
        debug!("Analyzing {} with prefix /{}", address, prefix_len);

        let invalid_prefix = |_: IpNetworkError| CidrError::InvalidPrefix {
            prefix: prefix_part.to_string(),
            max: max_prefix,
        };
        match address {
            IpAddr::V4(addr) => {
                let network = Ipv4Network::new(addr, prefix_len).map_err(invalid_prefix)?;
                Ok(self.analyze_v4(network))
            }
            IpAddr::V6(addr) => {
                let network = Ipv6Network::new(addr, prefix_len).map_err(invalid_prefix)?;
                Ok(self.analyze_v6(network))
            }
        }
    }

    fn analyze_v4(&self, net: Ipv4Network) -> SubnetResult {
        let prefix_len = net.prefix();
        let network = net.network();
        let broadcast = net.broadcast();
        let total = 1u64 << (32 - u32::from(prefix_len));

        let (first_usable, last_usable, usable_hosts) = match prefix_len {
            32 => (network, network, 1),
            31 => (network, broadcast, 2),
            _ => (
                Ipv4Addr::from(u32::from(network) + 1),
                Ipv4Addr::from(u32::from(broadcast) - 1),
                total - 2,
            ),
        };

        // Bounded by usable_hosts, so first + i never passes last_usable.
        let count = usable_hosts.min(self.sample_size as u64) as u32;
        let start = u32::from(first_usable);
        let samples = (0..count)
            .map(|i| IpAddr::V4(Ipv4Addr::from(start + i)))
            .collect();

        SubnetResult {
            network: IpAddr::V4(network),
            prefix_len,
            total_addresses: Some(u128::from(total)),
            ipv4: Some(Ipv4Details {
                netmask: net.mask(),
                broadcast,
                usable_hosts,
                first_usable,
                last_usable,
            }),
            samples,
        }
    }

    fn analyze_v6(&self, net: Ipv6Network) -> SubnetResult {
        let prefix_len = net.prefix();
        let network = net.network();
        let host_bits = 128 - u32::from(prefix_len);
        let total = 1u128.checked_shl(host_bits);

        let count = match total {
            Some(total) => total.min(self.sample_size as u128) as usize,
            None => self.sample_size,
        };
        let start = u128::from(network);
        let samples = (0..count as u128)
            .map(|i| IpAddr::V6(Ipv6Addr::from(start + i)))
            .collect();

        SubnetResult {
            network: IpAddr::V6(network),
            prefix_len,
            total_addresses: total,
            ipv4: None,
            samples,
        }
    }
}

fn split_cidr(input: &str) -> Result<(&str, &str), CidrError> {
    let malformed = || CidrError::MalformedInput {
        input: input.to_string(),
    };
    let (address, prefix) = input.split_once('/').ok_or_else(malformed)?;
    if address.is_empty() || prefix.is_empty() || prefix.contains('/') {
        return Err(malformed());
    }
    Ok((address, prefix))
}

fn parse_prefix(prefix: &str, max: u8) -> Result<u8, CidrError> {
    // `u8::from_str` accepts a leading '+', which is not valid CIDR.
    prefix
        .bytes()
        .all(|b| b.is_ascii_digit())
        .then(|| prefix.parse::<u8>().ok())
        .flatten()
        .filter(|len| *len <= max)
        .ok_or_else(|| CidrError::InvalidPrefix {
            prefix: prefix.to_string(),
            max,
        })
}
