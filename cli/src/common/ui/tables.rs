//! # Terminal Tables
//!
//! File: cli/src/common/ui/tables.rs
//!
//! Renders devices, subnet results and the inventory report with `comfy-table`.
//! Each function returns a `String` so the one-shot commands can `println!` it
//! and the interactive menu can write it to its own output.
//!
//! All tables use the ASCII condensed preset.
//!
use crate::common::network::subnet::SubnetResult;
use crate::core::inventory::{Device, DeviceStatus, InventoryReport};
use comfy_table::{presets::ASCII_FULL_CONDENSED, CellAlignment, Table};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL_CONDENSED);
    table
}

/// A two-column field/value table.
fn field_table(rows: Vec<(&str, String)>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    for (field, value) in rows {
        table.add_row(vec![field.to_string(), value]);
    }
    table
}

/// A name/count table with the counts right-aligned.
fn count_table<'a>(label: &str, counts: impl IntoIterator<Item = (&'a str, usize)>) -> Table {
    let mut table = new_table();
    table.set_header(vec![label, "Count"]);
    for (key, count) in counts {
        table.add_row(vec![key.to_string(), count.to_string()]);
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

fn join_addrs<T: std::fmt::Display>(addrs: &[T]) -> String {
    addrs
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders `devices` as a table followed by a count line.
///
/// `total` is the size of the whole inventory, which differs from the number
/// of rows when the caller filtered the list.
pub fn device_table<'a>(devices: impl IntoIterator<Item = &'a Device>, total: usize) -> String {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Type", "IP", "Location", "Status"]);

    let mut shown = 0;
    for d in devices {
        table.add_row(vec![
            d.id.to_string(),
            d.name.clone(),
            d.device_type.clone(),
            d.ip_address.clone(),
            d.location.clone(),
            d.status.to_string(),
        ]);
        shown += 1;
    }

    if shown == 0 {
        return "No devices found.".to_string();
    }
    format!(
        "{}\nTotal shown: {} (Total in inventory: {})",
        table, shown, total
    )
}

/// Renders every field of one device.
pub fn device_details(d: &Device) -> String {
    let notes = if d.notes.is_empty() {
        "(none)".to_string()
    } else {
        d.notes.clone()
    };
    field_table(vec![
        ("Device ID", d.id.to_string()),
        ("Name", d.name.clone()),
        ("Type", d.device_type.clone()),
        ("IP", d.ip_address.clone()),
        ("Location", d.location.clone()),
        ("Owner", d.owner.clone()),
        ("Status", d.status.to_string()),
        ("Notes", notes),
        ("Created", d.created_at.to_rfc3339()),
    ])
    .to_string()
}

/// Renders the derived fields of a subnet analysis.
pub fn subnet_summary(result: &SubnetResult) -> String {
    let total = match result.total_addresses {
        Some(total) => total.to_string(),
        None => format!("2^{}", result.host_bits()),
    };

    let mut rows = vec![
        ("Network", result.network.to_string()),
        ("Prefix length", format!("/{}", result.prefix_len)),
    ];
    match &result.ipv4 {
        Some(v4) => rows.extend([
            ("Netmask", v4.netmask.to_string()),
            ("Total addrs", total),
            ("Broadcast", v4.broadcast.to_string()),
            ("Usable hosts", v4.usable_hosts.to_string()),
            ("First host", v4.first_usable.to_string()),
            ("Last host", v4.last_usable.to_string()),
            ("Sample hosts", join_addrs(&result.samples)),
        ]),
        None => rows.extend([
            ("Total addrs", total),
            ("Broadcast", "N/A (IPv6)".to_string()),
            ("Sample addrs", join_addrs(&result.samples)),
        ]),
    }
    field_table(rows).to_string()
}

/// Renders the inventory report, grouped by status, location and device type.
pub fn report_summary(report: &InventoryReport) -> String {
    if report.total == 0 {
        return "Inventory is empty.".to_string();
    }

    let by_status = count_table(
        "Status",
        [DeviceStatus::Active, DeviceStatus::Retired]
            .map(|status| (status.as_str(), report.count(status))),
    );
    let by_location = count_table(
        "Location",
        report.by_location.iter().map(|(k, v)| (k.as_str(), *v)),
    );
    let by_type = count_table(
        "Device Type",
        report.by_device_type.iter().map(|(k, v)| (k.as_str(), *v)),
    );

    format!(
        "Total devices: {}\n\nBy Status:\n{}\n\nBy Location:\n{}\n\nBy Device Type:\n{}",
        report.total, by_status, by_location, by_type
    )
}

/// True if some rendered line has `cells` as consecutive table cells.
#[cfg(test)]
pub(crate) fn has_row(text: &str, cells: &[&str]) -> bool {
    text.lines().any(|line| {
        let row: Vec<&str> = line
            .split('|')
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .collect();
        row.windows(cells.len()).any(|window| window == cells)
    })
}
