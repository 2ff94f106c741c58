//! # netinv Report Command
//!
//! File: cli/src/commands/report.rs
//!
//! Prints device counts grouped by status, location and device type.
//!
use crate::common::ui::tables;
use crate::core::{config::Config, error::Result, storage};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Summarize the inventory by status, location and type")]
pub struct ReportArgs {}

pub fn handle_report(_args: ReportArgs, config: &Config) -> Result<()> {
    info!("Handling report for {:?}", config.storage.data_file);
    let store = storage::load_store(&config.storage.data_file)?;
    println!("{}", tables::report_summary(&store.report()));
    Ok(())
}
