//! # netinv CSV Export
//!
//! File: cli/src/core/export.rs
//!
//! Renders the inventory as CSV: one header row naming the record fields,
//! then one row per device in insertion order. Quoting of commas, quotes and
//! newlines inside fields is handled by the `csv` writer.
//!
use crate::common::fs::io;
use crate::core::error::{NetinvError, Result};
use crate::core::inventory::Device;
use anyhow::Context;
use csv::Writer;
use std::path::Path;
use tracing::info;

pub const CSV_HEADER: [&str; 9] = [
    "id",
    "name",
    "device_type",
    "ip_address",
    "location",
    "owner",
    "status",
    "notes",
    "created_at",
];

/// Renders `devices` as CSV text, header included.
pub fn to_csv(devices: &[Device]) -> Result<String> {
    let mut wtr = Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER).map_err(NetinvError::from)?;

    for device in devices {
        wtr.write_record([
            device.id.to_string(),
            device.name.clone(),
            device.device_type.clone(),
            device.ip_address.clone(),
            device.location.clone(),
            device.owner.clone(),
            device.status.to_string(),
            device.notes.clone(),
            device.created_at.to_rfc3339(),
        ])
        .map_err(NetinvError::from)?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("CSV writer error: {}", e))?;
    String::from_utf8(data).context("CSV output was not valid UTF-8")
}

/// Writes `devices` to `path` as CSV. Returns the number of rows written.
pub fn export_csv(devices: &[Device], path: &Path) -> Result<usize> {
    let csv = to_csv(devices)?;
    io::write_string_to_file(path, &csv)
        .with_context(|| format!("Failed to export inventory to {:?}", path))?;
    info!("Exported {} device(s) to {:?}", devices.len(), path);
    Ok(devices.len())
}
