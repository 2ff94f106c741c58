//! # Device Show & Search Commands
//!
//! File: cli/src/commands/device/show.rs
//!
//! Read-only lookups: `show` prints every field of one device, `search` prints
//! the devices whose text fields contain a keyword.
//!
use crate::common::ui::tables;
use crate::core::{config::Config, error::Result, inventory::DeviceId};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Show every field of one device")]
pub struct ShowArgs {
    /// Device id, e.g. DEV-0001 (or just 1).
    id: DeviceId,
}

#[derive(Parser, Debug)]
#[command(about = "Search devices by id or keyword")]
pub struct SearchArgs {
    /// Case-insensitive text matched against every field.
    query: String,
}

pub fn handle_show(args: ShowArgs, config: &Config) -> Result<()> {
    info!("Handling device show for {}", args.id);
    let store = super::open_store(config)?;
    println!("{}", tables::device_details(store.find(args.id)?));
    Ok(())
}

pub fn handle_search(args: SearchArgs, config: &Config) -> Result<()> {
    info!("Handling device search for '{}'", args.query);
    let store = super::open_store(config)?;
    let matches = store.search(&args.query);
    if matches.is_empty() {
        println!("No matches.");
        return Ok(());
    }
    println!("{}", tables::device_table(matches, store.len()));
    Ok(())
}
