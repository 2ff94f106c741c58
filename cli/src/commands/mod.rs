//! # netinv Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates all top-level commands of the netinv CLI and makes
//! them available to the entry point (`main.rs`).
//!
//! ## Architecture
//!
//! - Top-level modules represent commands or command groups (e.g., `device`, `subnet`)
//! - Groups declare their subcommands in their own `mod.rs`
//! - Every command exposes a clap args struct and a `handle_*` function that
//!   receives the parsed args and the loaded `Config`
//!
//! ## Command Groups
//!
//! - `device`: One-shot device management (list, add, show, search, update, retire)
//! - `export`: CSV export of the inventory
//! - `menu`: The interactive numbered menu
//! - `report`: Counts by status, location and device type
//! - `subnet`: CIDR analysis
//!

/// Command group for managing device records. Includes subcommands like `list`, `add`, `retire`.
pub mod device;
/// Writes the inventory to a CSV file.
pub mod export;
/// The interactive menu, opened when no command is given.
pub mod menu;
/// Prints the inventory report.
pub mod report;
/// Analyzes a CIDR network.
pub mod subnet;
