//! # netinv Export Command
//!
//! File: cli/src/commands/export.rs
//!
//! Writes the inventory to `storage.export_file`, which `--output` overrides
//! through `config::Overrides`. An empty inventory
//! writes nothing.
//!
use crate::core::{config::Config, error::Result, export, storage};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Export the inventory to CSV")]
pub struct ExportArgs {
    /// CSV file to write (defaults to storage.export_file).
    #[arg(long, short)]
    output: Option<PathBuf>,
}

impl ExportArgs {
    /// The `--output` path, applied as a configuration override.
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

pub fn handle_export(_args: ExportArgs, config: &Config) -> Result<()> {
    let target = &config.storage.export_file;
    info!("Handling export to {:?}", target);

    let store = storage::load_store(&config.storage.data_file)?;
    if store.is_empty() {
        println!("Nothing to export (inventory is empty).");
        return Ok(());
    }

    let rows = export::export_csv(store.list_all(), target)?;
    println!("Exported {} device(s) to {}", rows, target.display());
    Ok(())
}
