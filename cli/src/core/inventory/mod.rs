//! # netinv Inventory (`core::inventory`)
//!
//! File: cli/src/core/inventory/mod.rs
//!
//! ## Overview
//!
//! The device inventory: the record type, the store that owns and validates
//! the collection, and the summary report computed from it.
//!
//! - **`device`**: `Device`, `DeviceId`, `DeviceStatus` and the `NewDevice` / `DeviceUpdate` inputs.
//! - **`store`**: `InventoryStore`, the single owner and mutator of the collection.
//! - **`report`**: `InventoryReport`, counts by status, device type and location.
//!
//! Persistence lives in `core::storage`; this module never touches the filesystem.
//!
pub mod device;
pub mod report;
pub mod store;

pub use device::{Device, DeviceId, DeviceStatus, DeviceUpdate, NewDevice};
pub use report::InventoryReport;
pub use store::InventoryStore;
