//! # Device Add Command
//!
//! File: cli/src/commands/device/add.rs
//!
//! Adds one device from command-line flags and saves the inventory. The new
//! record is always `active`; the store assigns the next `DEV-NNNN` id.
//!
use crate::core::{config::Config, error::Result, inventory::NewDevice};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Add a device to the inventory")]
pub struct AddArgs {
    /// Device name (required).
    #[arg(long, short)]
    name: String,

    /// IPv4 or IPv6 address (required).
    #[arg(long)]
    ip: String,

    /// Free-text category, e.g. Laptop, Server, Router, Switch, AP, Printer.
    #[arg(long = "type", short = 't', default_value = "")]
    device_type: String,

    #[arg(long, short, default_value = "")]
    location: String,

    #[arg(long, short, default_value = "")]
    owner: String,

    #[arg(long, default_value = "")]
    notes: String,
}

impl From<AddArgs> for NewDevice {
    fn from(args: AddArgs) -> Self {
        NewDevice {
            name: args.name,
            device_type: args.device_type,
            ip_address: args.ip,
            location: args.location,
            owner: args.owner,
            notes: args.notes,
        }
    }
}

pub fn handle_add(args: AddArgs, config: &Config) -> Result<()> {
    info!("Handling device add for '{}'", args.name);
    let mut store = super::open_store(config)?;

    let id = store.add(args.into())?.id;
    super::persist(&store, config)?;

    println!("Added device {}.", id);
    Ok(())
}
