//! # Device Retire Command
//!
//! File: cli/src/commands/device/retire.rs
//!
//! Marks a device retired and saves. Retiring a device twice is not an error.
//!
use crate::core::{config::Config, error::Result, inventory::DeviceId};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Mark a device as retired")]
pub struct RetireArgs {
    /// Device id, e.g. DEV-0001.
    pub(super) id: DeviceId,
}

pub fn handle_retire(args: RetireArgs, config: &Config) -> Result<()> {
    info!("Handling device retire for {}", args.id);
    let mut store = super::open_store(config)?;
    store.retire(args.id)?;
    super::persist(&store, config)?;

    println!("{} marked as retired.", args.id);
    Ok(())
}
