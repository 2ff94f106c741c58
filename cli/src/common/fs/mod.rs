//! # netinv Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared by configuration loading (`core::config`),
//! inventory persistence (`core::storage`) and CSV export (`core::export`).
//!
//! - **`io`**: `ensure_dir_exists`, `read_file_to_string`, `read_optional_file`, `write_string_to_file`.
//!
//! Callers import from the submodule directly, e.g. `crate::common::fs::io::write_string_to_file`.
//!

/// Basic file I/O operations.
pub mod io;
