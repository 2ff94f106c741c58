//! # netinv UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal presentation for netinv: rendering records and results as text,
//! and collecting answers in the interactive menu.
//!
//! ## Architecture
//!
//! - **`tables`**: Renders device tables, device details, subnet results and the
//!   inventory report as `String`s (`device_table`, `device_details`,
//!   `subnet_summary`, `report_summary`).
//! - **`prompts`**: `Prompter`, a line-based prompt helper over any `BufRead`/`Write`
//!   pair, with `nonempty`, `optional` and `choice` variants.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::ui::{prompts::Prompter, tables};
//!
//! # fn run_example(store: &InventoryStore) -> crate::core::error::Result<()> {
//! println!("{}", tables::device_table(store.list_all(), store.len()));
//!
//! let stdin = std::io::stdin();
//! let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
//! let name = prompter.nonempty("Device name")?;
//! # Ok(())
//! # }
//! ```
//!

/// Interactive line prompts (`Prompter`, `InputClosed`).
pub mod prompts;
/// Plain-text rendering of devices, subnets and reports.
pub mod tables;
