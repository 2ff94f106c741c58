//! # netinv Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` used by configuration loading, inventory
//! storage and CSV export. They add path context to every error and make sure
//! parent directories exist before writing.
//!
//! - **`ensure_dir_exists`**: creates a directory (and parents) if missing; fails if the path is a file.
//! - **`read_file_to_string`**: reads a whole file, with context on failure.
//! - **`read_optional_file`**: like `read_file_to_string`, but a missing file is `Ok(None)`.
//! - **`write_string_to_file`**: writes through a sibling temporary file and renames it into place,
//!   so an interrupted save never leaves a half-written inventory behind.
//!
//! ```rust
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! io::write_string_to_file(Path::new("./data/inventory.json"), "[]")?;
//! let content = io::read_file_to_string(Path::new("./data/inventory.json"))?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{NetinvError, Result};
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Ensures that a directory exists at `path`, creating it and any parents.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if it cannot be created.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(NetinvError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Reads a file that is allowed to be absent.
///
/// Returns `Ok(None)` when nothing exists at `path`; any other I/O failure is
/// returned as the raw `std::io::Error` so callers can wrap it in their own type.
pub fn read_optional_file(path: &Path) -> std::io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No file at {:?}", path);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Writes `content` to `path`, replacing any existing file.
///
/// The content goes to `<path>.tmp` first and is then renamed over the
/// target. Parent directories are created when missing.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }

    let tmp_path = temp_sibling(path);
    fs::write(&tmp_path, content)
        .with_context(|| format!("Failed to write to file {:?}", tmp_path))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to move {:?} into place at {:?}", tmp_path, path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
