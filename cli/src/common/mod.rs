//! # netinv Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers (`commands::`) and the core
//! inventory (`core::`). Nothing in here knows about clap or the menu.
//!
//! ## Architecture
//!
//! - **`fs`**: File I/O with path context and safe replacement of existing files.
//! - **`network`**: IP address validation and CIDR subnet analysis.
//! - **`ui`**: Text rendering of tables and reports, and interactive prompts.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{fs::io, network::subnet::SubnetPlanner, ui::tables};
//! use crate::core::error::Result;
//!
//! # fn run_example() -> Result<()> {
//! let result = SubnetPlanner::new(5).analyze("192.168.1.0/24")?;
//! io::write_string_to_file(std::path::Path::new("plan.txt"), &tables::subnet_summary(&result))?;
//! # Ok(())
//! # }
//! ```
//!

/// Utilities for filesystem operations.
pub mod fs;
/// IP address validation and subnet planning.
pub mod network;
/// Terminal tables and prompts.
pub mod ui;
