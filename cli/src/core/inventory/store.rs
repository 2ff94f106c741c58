//! # Inventory Store
//!
//! File: cli/src/core/inventory/store.rs
//!
//! ## Overview
//!
//! `InventoryStore` owns the ordered collection of device records and is the
//! only code that mutates it. Every mutating operation validates first and
//! writes second, so a failed call leaves the collection exactly as it was.
//!
//! ## Invariants
//!
//! - Insertion order is preserved for listing and export.
//! - Ids are unique and never reused: the next id is always one past the
//!   highest id the store has seen, retired devices included.
//! - `ip_address` is a valid IPv4/IPv6 address whenever a record is written.
//! - Status only moves from active to retired.
//!
//! ## Examples
//!
//! ```rust
//! let mut store = InventoryStore::new();
//! let id = store.add(NewDevice { name: "edge-rtr".into(), ip_address: "10.0.0.1".into(), ..Default::default() })?.id;
//! store.retire(id)?;
//! assert_eq!(store.list_active().count(), 0);
//! ```
//!
use super::device::{Device, DeviceId, DeviceStatus, DeviceUpdate, NewDevice};
use super::report::InventoryReport;
use crate::common::network::address::is_valid_ip;
use crate::core::error::{InventoryError, StorageError, ValidationError};
use chrono::Utc;
use std::collections::HashSet;
use tracing::{debug, info};

/// In-memory inventory. Persisted by `core::storage` at explicit save points.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    devices: Vec<Device>,
    last_id: u32,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from persisted records, keeping their order.
    ///
    /// # Errors
    ///
    /// - `StorageError::DuplicateId` if two records share an id.
    /// - `StorageError::InvalidRecord` if a record has a blank name or an invalid address.
    pub fn from_devices(devices: Vec<Device>) -> Result<Self, StorageError> {
        let mut seen = HashSet::with_capacity(devices.len());
        for device in &devices {
            if !seen.insert(device.id) {
                return Err(StorageError::DuplicateId { id: device.id });
            }
            required("name", &device.name)
                .and_then(|_| checked_ip(&device.ip_address))
                .map_err(|source| StorageError::InvalidRecord {
                    id: device.id,
                    source,
                })?;
        }
        let last_id = devices.iter().map(|d| d.id.value()).max().unwrap_or(0);
        debug!(
            "Rebuilt inventory with {} device(s), last id {}",
            devices.len(),
            last_id
        );
        Ok(Self { devices, last_id })
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// All devices in insertion order, retired ones included.
    pub fn list_all(&self) -> &[Device] {
        &self.devices
    }

    /// Active devices in insertion order.
    pub fn list_active(&self) -> impl Iterator<Item = &Device> + '_ {
        self.devices.iter().filter(|d| d.is_active())
    }

    /// Validates and appends a new device, assigning it the next id.
    ///
    /// # Errors
    ///
    /// - `ValidationError::MissingField` if `name` or `ip_address` is blank.
    /// - `ValidationError::InvalidIp` if `ip_address` is not an IPv4/IPv6 address.
    /// - `InventoryError::IdSpaceExhausted` if the highest id ever issued is `u32::MAX`.
    pub fn add(&mut self, new: NewDevice) -> Result<&Device, InventoryError> {
        let name = required("name", &new.name)?;
        let ip_address = checked_ip(&new.ip_address)?;

        let next = self
            .last_id
            .checked_add(1)
            .ok_or(InventoryError::IdSpaceExhausted {
                last: DeviceId::new(self.last_id),
            })?;
        let id = DeviceId::new(next);
        let device = Device {
            id,
            name,
            device_type: new.device_type.trim().to_string(),
            ip_address,
            location: new.location.trim().to_string(),
            owner: new.owner.trim().to_string(),
            status: DeviceStatus::Active,
            notes: new.notes.trim().to_string(),
            created_at: Utc::now(),
        };
        info!("Added device {} ({})", device.id, device.name);
        self.last_id = id.value();
        self.devices.push(device);
        Ok(&self.devices[self.devices.len() - 1])
    }

    pub fn find(&self, id: DeviceId) -> Result<&Device, InventoryError> {
        self.devices
            .iter()
            .find(|d| d.id == id)
            .ok_or(InventoryError::NotFound { id })
    }

    /// Devices whose text fields contain `query`, ignoring case. An empty query matches all.
    pub fn search(&self, query: &str) -> Vec<&Device> {
        let needle = query.trim().to_lowercase();
        self.devices.iter().filter(|d| d.matches(&needle)).collect()
    }

    /// Applies the supplied fields of `update`; the rest are left alone.
    ///
    /// # Errors
    ///
    /// - `InventoryError::NotFound` if no device has `id`.
    /// - `ValidationError::MissingField` / `InvalidIp` for a blank name or bad address.
    /// - `ValidationError::StatusTransition` when asked to reactivate a retired device.
    pub fn update(&mut self, id: DeviceId, update: DeviceUpdate) -> Result<&Device, InventoryError> {
        let index = self.position(id)?;

        let name = update.name.as_deref().map(|n| required("name", n)).transpose()?;
        let ip_address = update.ip_address.as_deref().map(checked_ip).transpose()?;
        if update.status == Some(DeviceStatus::Active)
            && self.devices[index].status == DeviceStatus::Retired
        {
            return Err(ValidationError::StatusTransition { id }.into());
        }

        let device = &mut self.devices[index];
        if let Some(name) = name {
            device.name = name;
        }
        if let Some(ip_address) = ip_address {
            device.ip_address = ip_address;
        }
        if let Some(device_type) = update.device_type {
            device.device_type = device_type.trim().to_string();
        }
        if let Some(location) = update.location {
            device.location = location.trim().to_string();
        }
        if let Some(owner) = update.owner {
            device.owner = owner.trim().to_string();
        }
        if let Some(notes) = update.notes {
            device.notes = notes.trim().to_string();
        }
        if let Some(status) = update.status {
            device.status = status;
        }
        info!("Updated device {}", device.id);
        Ok(&*device)
    }

    /// Marks a device retired. Retiring an already retired device changes nothing.
    pub fn retire(&mut self, id: DeviceId) -> Result<&Device, InventoryError> {
        let index = self.position(id)?;
        let device = &mut self.devices[index];
        if device.status == DeviceStatus::Retired {
            debug!("Device {} is already retired", id);
        } else {
            device.status = DeviceStatus::Retired;
            info!("Retired device {}", id);
        }
        Ok(&*device)
    }

    pub fn report(&self) -> InventoryReport {
        InventoryReport::from_devices(&self.devices)
    }

    fn position(&self, id: DeviceId) -> Result<usize, InventoryError> {
        self.devices
            .iter()
            .position(|d| d.id == id)
            .ok_or(InventoryError::NotFound { id })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

fn checked_ip(value: &str) -> Result<String, ValidationError> {
    let address = required("ip_address", value)?;
    if !is_valid_ip(&address) {
        return Err(ValidationError::InvalidIp { value: address });
    }
    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_device(name: &str, ip: &str) -> NewDevice {
        NewDevice {
            name: name.to_string(),
            device_type: "Router".to_string(),
            ip_address: ip.to_string(),
            location: "Minneapolis HQ".to_string(),
            owner: "netops".to_string(),
            notes: String::new(),
        }
    }

    fn store_with(names: &[(&str, &str)]) -> InventoryStore {
        let mut store = InventoryStore::new();
        for (name, ip) in names {
            store.add(new_device(name, ip)).unwrap();
        }
        store
    }

    #[test]
    fn test_add_assigns_distinct_ids_in_order() {
        let store = store_with(&[("edge-rtr", "10.0.0.1"), ("core-sw", "2001:db8::2")]);
        let ids: Vec<_> = store.list_all().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![DeviceId::new(1), DeviceId::new(2)]);
        assert!(store.list_all().iter().all(|d| d.status == DeviceStatus::Active));
    }

    #[test]
    fn test_add_trims_input() {
        let mut store = InventoryStore::new();
        let device = store
            .add(NewDevice {
                name: "  ap-lobby ".into(),
                ip_address: " 192.168.1.40 ".into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(device.name, "ap-lobby");
        assert_eq!(device.ip_address, "192.168.1.40");
    }

    #[test]
    fn test_add_invalid_ip_leaves_store_unchanged() {
        let mut store = store_with(&[("edge-rtr", "10.0.0.1")]);
        let err = store.add(new_device("bad", "999.1.1.1")).unwrap_err();
        assert_eq!(
            err,
            InventoryError::Validation(ValidationError::InvalidIp {
                value: "999.1.1.1".into()
            })
        );
        assert_eq!(store.len(), 1);

        // The failed add must not burn an id.
        let next = store.add(new_device("ok", "10.0.0.9")).unwrap();
        assert_eq!(next.id, DeviceId::new(2));
    }

    #[test]
    fn test_add_requires_name_and_ip() {
        let mut store = InventoryStore::new();
        assert_eq!(
            store.add(new_device("   ", "10.0.0.1")).unwrap_err(),
            InventoryError::from(ValidationError::MissingField { field: "name" })
        );
        assert_eq!(
            store.add(new_device("x", "")).unwrap_err(),
            InventoryError::from(ValidationError::MissingField { field: "ip_address" })
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_find_and_not_found() {
        let store = store_with(&[("edge-rtr", "10.0.0.1")]);
        assert_eq!(store.find(DeviceId::new(1)).unwrap().name, "edge-rtr");
        assert_eq!(
            store.find(DeviceId::new(9)).unwrap_err(),
            InventoryError::NotFound { id: DeviceId::new(9) }
        );
    }

    #[test]
    fn test_retire_excludes_from_active_but_not_all() {
        let mut store = store_with(&[("a", "10.0.0.1"), ("b", "10.0.0.2"), ("c", "10.0.0.3")]);
        store.retire(DeviceId::new(2)).unwrap();

        let active: Vec<_> = store.list_active().map(|d| d.name.as_str()).collect();
        assert_eq!(active, vec!["a", "c"]);
        assert_eq!(store.list_all().len(), 3);
    }

    #[test]
    fn test_retire_is_idempotent() {
        let mut store = store_with(&[("a", "10.0.0.1")]);
        let first = store.retire(DeviceId::new(1)).unwrap().clone();
        let second = store.retire(DeviceId::new(1)).unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(second.status, DeviceStatus::Retired);
    }

    #[test]
    fn test_retire_unknown_id() {
        let mut store = InventoryStore::new();
        assert!(matches!(
            store.retire(DeviceId::new(1)),
            Err(InventoryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_update_changes_only_supplied_fields() {
        let mut store = store_with(&[("a", "10.0.0.1")]);
        let before = store.find(DeviceId::new(1)).unwrap().clone();
        let after = store
            .update(
                DeviceId::new(1),
                DeviceUpdate {
                    owner: Some("helpdesk".into()),
                    ip_address: Some("2001:db8::10".into()),
                    ..Default::default()
                },
            )
            .unwrap()
            .clone();
        assert_eq!(after.owner, "helpdesk");
        assert_eq!(after.ip_address, "2001:db8::10");
        assert_eq!(after.name, before.name);
        assert_eq!(after.location, before.location);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.id, before.id);
    }

    #[test]
    fn test_update_is_all_or_nothing() {
        let mut store = store_with(&[("a", "10.0.0.1")]);
        let before = store.find(DeviceId::new(1)).unwrap().clone();
        let err = store
            .update(
                DeviceId::new(1),
                DeviceUpdate {
                    owner: Some("someone".into()),
                    ip_address: Some("10.0.0.300".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(
            err,
            InventoryError::Validation(ValidationError::InvalidIp { .. })
        ));
        assert_eq!(store.find(DeviceId::new(1)).unwrap(), &before);
    }

    #[test]
    fn test_update_rejects_blank_name_and_reactivation() {
        let mut store = store_with(&[("a", "10.0.0.1")]);
        let blank = DeviceUpdate {
            name: Some(" ".into()),
            ..Default::default()
        };
        assert_eq!(
            store.update(DeviceId::new(1), blank).unwrap_err(),
            InventoryError::from(ValidationError::MissingField { field: "name" })
        );

        store.retire(DeviceId::new(1)).unwrap();
        let reactivate = DeviceUpdate {
            status: Some(DeviceStatus::Active),
            ..Default::default()
        };
        assert_eq!(
            store.update(DeviceId::new(1), reactivate).unwrap_err(),
            InventoryError::from(ValidationError::StatusTransition { id: DeviceId::new(1) })
        );
    }

    #[test]
    fn test_update_status_retired_retires() {
        let mut store = store_with(&[("a", "10.0.0.1")]);
        let device = store
            .update(
                DeviceId::new(1),
                DeviceUpdate {
                    status: Some(DeviceStatus::Retired),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(device.status, DeviceStatus::Retired);
    }

    #[test]
    fn test_search() {
        let mut store = store_with(&[("edge-rtr", "10.0.0.1"), ("lobby-ap", "10.0.0.2")]);
        store
            .update(
                DeviceId::new(2),
                DeviceUpdate {
                    location: Some("Seattle Branch".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        let hits: Vec<_> = store.search("SEATTLE").iter().map(|d| d.id).collect();
        assert_eq!(hits, vec![DeviceId::new(2)]);
        assert_eq!(store.search("dev-0001").len(), 1);
        assert_eq!(store.search("").len(), 2);
        assert!(store.search("printer").is_empty());
    }

    #[test]
    fn test_from_devices_continues_ids_and_rejects_duplicates() {
        let source = store_with(&[("a", "10.0.0.1"), ("b", "10.0.0.2"), ("c", "10.0.0.3")]);
        let mut devices = source.list_all().to_vec();
        devices.remove(2);
        devices.remove(0);

        // Only DEV-0002 survives; the next id must still be 3.
        let mut store = InventoryStore::from_devices(devices.clone()).unwrap();
        assert_eq!(
            store.add(new_device("d", "10.0.0.4")).unwrap().id,
            DeviceId::new(3)
        );

        devices.push(devices[0].clone());
        assert!(matches!(
            InventoryStore::from_devices(devices),
            Err(StorageError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_from_devices_rejects_invalid_records() {
        let mut devices = store_with(&[("a", "10.0.0.1"), ("b", "10.0.0.2")])
            .list_all()
            .to_vec();
        devices[1].ip_address = "not-an-ip".into();
        match InventoryStore::from_devices(devices.clone()) {
            Err(StorageError::InvalidRecord { id, source }) => {
                assert_eq!(id, DeviceId::new(2));
                assert_eq!(source, ValidationError::InvalidIp { value: "not-an-ip".into() });
            }
            other => panic!("expected InvalidRecord, got {:?}", other),
        }

        devices[1].ip_address = "10.0.0.2".into();
        devices[0].name = "  ".into();
        assert!(matches!(
            InventoryStore::from_devices(devices),
            Err(StorageError::InvalidRecord {
                source: ValidationError::MissingField { field: "name" },
                ..
            })
        ));
    }

    #[test]
    fn test_add_never_reuses_the_last_possible_id() {
        let mut devices = store_with(&[("a", "10.0.0.1")]).list_all().to_vec();
        devices[0].id = DeviceId::new(u32::MAX);
        let mut store = InventoryStore::from_devices(devices).unwrap();

        assert_eq!(
            store.add(new_device("b", "10.0.0.2")).unwrap_err(),
            InventoryError::IdSpaceExhausted {
                last: DeviceId::new(u32::MAX)
            }
        );
        assert_eq!(store.len(), 1);
    }
}
