//! # Device Update Command
//!
//! File: cli/src/commands/device/update.rs
//!
//! Changes selected fields of one device. Flags that are not given leave the
//! stored value alone. Validation happens before anything changes, so a bad
//! `--ip` leaves the record (and the file) untouched.
//!
use crate::core::{
    config::Config,
    error::Result,
    inventory::{DeviceId, DeviceStatus, DeviceUpdate},
};
use anyhow::bail;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Update fields of an existing device")]
pub struct UpdateArgs {
    /// Device id, e.g. DEV-0001.
    id: DeviceId,

    #[arg(long, short)]
    name: Option<String>,

    #[arg(long)]
    ip: Option<String>,

    #[arg(long = "type", short = 't')]
    device_type: Option<String>,

    #[arg(long, short)]
    location: Option<String>,

    #[arg(long, short)]
    owner: Option<String>,

    #[arg(long)]
    notes: Option<String>,

    /// New status: active or retired.
    #[arg(long, short)]
    status: Option<DeviceStatus>,
}

impl UpdateArgs {
    fn to_update(&self) -> DeviceUpdate {
        DeviceUpdate {
            name: self.name.clone(),
            device_type: self.device_type.clone(),
            ip_address: self.ip.clone(),
            location: self.location.clone(),
            owner: self.owner.clone(),
            notes: self.notes.clone(),
            status: self.status,
        }
    }
}

pub fn handle_update(args: UpdateArgs, config: &Config) -> Result<()> {
    info!("Handling device update for {}", args.id);
    let update = args.to_update();
    if update.is_empty() {
        bail!("Nothing to update. Pass at least one field, e.g. --owner or --notes.");
    }

    let mut store = super::open_store(config)?;
    store.update(args.id, update)?;
    super::persist(&store, config)?;

    println!("Device {} updated.", args.id);
    Ok(())
}
