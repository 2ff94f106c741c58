//! # netinv Core
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core of the application: the device inventory
//! and everything it needs to be loaded, saved, exported and configured.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the application `Result` alias
//! - `export`: CSV rendering of the inventory
//! - `inventory`: Device records, the `InventoryStore` and its report
//! - `storage`: JSON load/save of the inventory file
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::Result; // For error handling
//! use crate::core::{inventory::InventoryStore, storage}; // For the device inventory
//! ```
//!
pub mod config;
pub mod error;
pub mod export;
pub mod inventory;
pub mod storage;
