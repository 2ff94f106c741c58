//! # netinv Device Commands
//!
//! File: cli/src/commands/device/mod.rs
//!
//! ## Overview
//!
//! One-shot subcommands for managing device records without entering the
//! interactive menu. Each invocation loads the inventory file, performs a single
//! operation on the `InventoryStore`, and (for mutating operations) saves the
//! file again before exiting.
//!
//! ## Architecture
//!
//! - `DeviceArgs`: Top-level arguments struct for `netinv device`.
//! - `DeviceCommand`: Enum of the device subcommands.
//! - `handle_device`: Routes the parsed subcommand to its handler.
//! - `open_store` / `persist`: Shared load/save helpers used by every handler.
//!
//! ## Examples
//!
//! ```bash
//! # Add a router
//! netinv device add --name edge-rtr --ip 10.0.0.1 --type Router --location "Minneapolis HQ"
//!
//! # List only active devices
//! netinv device list --active
//!
//! # Retire a device
//! netinv device retire DEV-0001
//! ```
//!
use crate::core::{config::Config, error::Result, inventory::InventoryStore, storage};
use clap::{Parser, Subcommand};
use tracing::debug;

/// Implements `netinv device add`.
mod add;
/// Implements `netinv device list`.
mod list;
mod retire;
/// Implements `netinv device show` and `netinv device search`.
mod show;
mod update;

/// Manage device records (list, add, show, search, update, retire).
#[derive(Parser, Debug)]
pub struct DeviceArgs {
    #[command(subcommand)]
    command: DeviceCommand,
}

#[derive(Subcommand, Debug)]
enum DeviceCommand {
    #[command(alias = "ls")]
    List(list::ListArgs),
    Add(add::AddArgs),
    Show(show::ShowArgs),
    Search(show::SearchArgs),
    Update(update::UpdateArgs),
    Retire(retire::RetireArgs),
}

pub fn handle_device(args: DeviceArgs, config: &Config) -> Result<()> {
    match args.command {
        DeviceCommand::List(args) => list::handle_list(args, config),
        DeviceCommand::Add(args) => add::handle_add(args, config),
        DeviceCommand::Show(args) => show::handle_show(args, config),
        DeviceCommand::Search(args) => show::handle_search(args, config),
        DeviceCommand::Update(args) => update::handle_update(args, config),
        DeviceCommand::Retire(args) => retire::handle_retire(args, config),
    }
}

/// Loads the configured inventory file. A malformed file is an error here.
fn open_store(config: &Config) -> Result<InventoryStore> {
    debug!("Opening inventory at {:?}", config.storage.data_file);
    Ok(storage::load_store(&config.storage.data_file)?)
}

/// Saves `store` back to the configured inventory file.
fn persist(store: &InventoryStore, config: &Config) -> Result<()> {
    storage::save_store(store, &config.storage.data_file)
}
