//! # netinv Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the netinv application.
//! Core operations (address validation, subnet analysis, inventory mutations,
//! storage) report failures through small typed enums so callers can match on
//! the exact kind, while command handlers work with `anyhow` for context.
//!
//! ## Architecture
//!
//! - `ValidationError`: a device field failed validation (`InvalidIp`, `MissingField`, `StatusTransition`).
//! - `InventoryError`: an inventory operation failed (`NotFound` or a wrapped `ValidationError`).
//! - `CidrError`: CIDR input could not be analyzed (`MalformedInput`, `InvalidAddress`, `InvalidPrefix`).
//! - `StorageError`: the inventory file could not be read, parsed or serialized.
//! - `NetinvError`: application-level failures (configuration, filesystem, export).
//! - `Result<T>`: a type alias for `anyhow::Result<T>` used by application code.
//!
//! ## Examples
//!
//! ```rust
//! // Typed errors from the store convert into anyhow with `?`
//! let device = store.find(id)?;
//!
//! // The menu matches on the kind instead
//! match store.add(new_device) {
//!     Ok(device) => println!("Added device {}.", device.id),
//!     Err(InventoryError::Validation(ValidationError::InvalidIp { value })) => {
//!         println!("Invalid IP address: {value}");
//!     }
//!     Err(e) => println!("{e}"),
//! }
//! ```
//!
use crate::core::inventory::DeviceId;
use std::path::PathBuf;
use thiserror::Error;

/// A device field failed validation. Raised before anything is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid IP address '{value}'. Example: 192.168.1.10 or 2001:db8::1")]
    InvalidIp { value: String },

    #[error("Missing required field '{field}'.")]
    MissingField { field: &'static str },

    #[error("Device {id} is retired and cannot be reactivated.")]
    StatusTransition { id: DeviceId },
}

/// Failure of an `InventoryStore` operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Device '{id}' not found.")]
    NotFound { id: DeviceId },

    #[error("No device ids left after {last}.")]
    IdSpaceExhausted { last: DeviceId },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Failure to analyze a CIDR string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("Malformed CIDR '{input}'. Expected ADDRESS/PREFIX, e.g. 192.168.1.0/24.")]
    MalformedInput { input: String },

    #[error("Invalid network address '{address}'.")]
    InvalidAddress { address: String },

    #[error("Invalid prefix length '{prefix}'. Expected 0-{max}.")]
    InvalidPrefix { prefix: String, max: u8 },
}

/// Failure while loading or saving the inventory file.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read inventory file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse inventory file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize inventory: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },

    #[error("Inventory contains device id {id} more than once.")]
    DuplicateId { id: DeviceId },

    #[error("Inventory record {id} is invalid: {source}")]
    InvalidRecord {
        id: DeviceId,
        #[source]
        source: ValidationError,
    },
}

/// Application-level errors that are not tied to one core operation.
#[derive(Error, Debug)]
pub enum NetinvError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Export failed: {source}")]
    Export {
        #[from]
        source: csv::Error,
    },
}

/// Type alias for Result using anyhow::Error for application code.
pub type Result<T> = anyhow::Result<T>;
