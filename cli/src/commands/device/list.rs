//! # Device List Command
//!
//! File: cli/src/commands/device/list.rs
//!
//! Prints the inventory as a table, optionally limited to active devices.
//!
use crate::common::ui::tables;
use crate::core::{config::Config, error::Result};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "List devices in the inventory")]
pub struct ListArgs {
    /// Only show devices whose status is active.
    #[arg(long, short)]
    pub(super) active: bool,
}

pub fn handle_list(args: ListArgs, config: &Config) -> Result<()> {
    info!("Handling device list (active only: {})", args.active);
    let store = super::open_store(config)?;

    let table = if args.active {
        tables::device_table(store.list_active(), store.len())
    } else {
        tables::device_table(store.list_all(), store.len())
    };
    println!("{}", table);
    Ok(())
}
