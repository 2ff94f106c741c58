//! # netinv Network Utilities Module (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//!
//! ## Overview
//!
//! This module centralizes the IP address logic used by netinv. It has no
//! knowledge of the inventory itself; the inventory store calls into it to
//! validate device addresses and the `subnet` command calls it to plan ranges.
//!
//! ## Architecture
//!
//! - **`address`**: Validates IPv4/IPv6 address strings and reports their family (`validate_ip`, `is_valid_ip`).
//! - **`subnet`**: Parses CIDR notation and derives network, netmask, broadcast, usable host range and a bounded sample of addresses (`SubnetPlanner`).
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::network::{address, subnet::SubnetPlanner};
//!
//! # fn run_example() -> anyhow::Result<()> {
//! assert!(address::is_valid_ip("2001:db8::1"));
//!
//! let result = SubnetPlanner::new(5).analyze("10.0.10.0/24")?;
//! println!("Usable hosts: {:?}", result.ipv4.map(|d| d.usable_hosts));
//! # Ok(())
//! # }
//! ```
//!

/// IP address validation (`validate_ip`, `is_valid_ip`, `AddressFamily`).
pub mod address;
/// CIDR analysis (`SubnetPlanner`, `SubnetResult`).
pub mod subnet;
