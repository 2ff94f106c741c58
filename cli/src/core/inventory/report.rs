//! # Inventory Report
//!
//! File: cli/src/core/inventory/report.rs
//!
//! Summary counts over the whole inventory: total, by status, by device type
//! and by location. Keys are kept sorted so the rendered report is stable.
//!
use super::device::{Device, DeviceStatus};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryReport {
    pub total: usize,
    pub by_status: BTreeMap<DeviceStatus, usize>,
    pub by_device_type: BTreeMap<String, usize>,
    pub by_location: BTreeMap<String, usize>,
}

impl InventoryReport {
    pub fn from_devices<'a>(devices: impl IntoIterator<Item = &'a Device>) -> Self {
        let mut report = Self::default();
        for device in devices {
            report.total += 1;
            *report.by_status.entry(device.status).or_default() += 1;
            *report
                .by_device_type
                .entry(label(&device.device_type))
                .or_default() += 1;
            *report.by_location.entry(label(&device.location)).or_default() += 1;
        }
        report
    }

    pub fn count(&self, status: DeviceStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

// Blank free-text fields are grouped under a visible key.
fn label(value: &str) -> String {
    if value.is_empty() {
        "(unspecified)".to_string()
    } else {
        value.to_string()
    }
}
