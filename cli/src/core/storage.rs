//! # netinv Inventory Storage
//!
//! File: cli/src/core/storage.rs
//!
//! ## Overview
//!
//! Loads and saves the whole inventory as a JSON array of device records.
//! The file is read once when a command starts and rewritten in full at
//! save points; there is no incremental format.
//!
//! - A missing file is an empty inventory (first run).
//! - A file that cannot be parsed, repeats an id, or holds a record with a
//!   blank name or invalid address is a `StorageError`.
//! - Saving pretty-prints with two-space indentation and replaces the file
//!   through `common::fs::io::write_string_to_file`.
//!
use crate::common::fs::io;
use crate::core::error::{Result, StorageError};
use crate::core::inventory::{Device, InventoryStore};
use anyhow::Context;
use std::path::Path;
use tracing::{debug, info};

/// Loads the inventory at `path`, or an empty one if the file does not exist.
pub fn load_store(path: &Path) -> std::result::Result<InventoryStore, StorageError> {
    let Some(content) = io::read_optional_file(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?
    else {
        info!("No inventory file at {:?}; starting empty.", path);
        return Ok(InventoryStore::new());
    };

    let devices = parse_devices(&content).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded {} device(s) from {:?}", devices.len(), path);
    InventoryStore::from_devices(devices)
}

/// Writes every device in `store` to `path`, replacing the previous file.
pub fn save_store(store: &InventoryStore, path: &Path) -> Result<()> {
    let json = to_json(store.list_all())?;
    io::write_string_to_file(path, &json)
        .with_context(|| format!("Failed to save inventory to {:?}", path))?;
    info!("Saved {} device(s) to {:?}", store.len(), path);
    Ok(())
}

fn parse_devices(content: &str) -> serde_json::Result<Vec<Device>> {
    if content.trim().is_empty() {
        debug!("Inventory file is empty");
        return Ok(Vec::new());
    }
    serde_json::from_str(content)
}

fn to_json(devices: &[Device]) -> std::result::Result<String, StorageError> {
    let mut json = serde_json::to_string_pretty(devices)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::inventory::{DeviceId, DeviceStatus, NewDevice};
    use std::fs;
    use tempfile::tempdir;

    fn sample_store() -> InventoryStore {
        let mut store = InventoryStore::new();
        store
            .add(NewDevice {
                name: "edge-rtr".into(),
                device_type: "Router".into(),
                ip_address: "10.0.0.1".into(),
                location: "Minneapolis HQ".into(),
                owner: "netops".into(),
                notes: "uplink, primary".into(),
            })
            .unwrap();
        store
            .add(NewDevice {
                name: "lab-host".into(),
                ip_address: "2001:db8::20".into(),
                ..Default::default()
            })
            .unwrap();
        store.retire(DeviceId::new(1)).unwrap();
        store
    }

    #[test]
    fn test_missing_file_is_empty_inventory() {
        let dir = tempdir().unwrap();
        let store = load_store(&dir.path().join("inventory.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_records_and_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data/inventory.json");
        let store = sample_store();

        save_store(&store, &path).unwrap();
        let loaded = load_store(&path).unwrap();

        assert_eq!(loaded.list_all(), store.list_all());
        assert_eq!(loaded.list_all()[0].status, DeviceStatus::Retired);
    }

    #[test]
    fn test_saved_json_uses_record_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        save_store(&sample_store(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let first = &value[0];
        for field in [
            "id",
            "name",
            "device_type",
            "ip_address",
            "location",
            "owner",
            "status",
            "notes",
            "created_at",
        ] {
            assert!(first.get(field).is_some(), "missing {field}");
        }
        assert_eq!(first["id"], "DEV-0001");
    }

    #[test]
    fn test_reloaded_store_keeps_issuing_fresh_ids() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        save_store(&sample_store(), &path).unwrap();

        let mut store = load_store(&path).unwrap();
        let id = store
            .add(NewDevice {
                name: "new".into(),
                ip_address: "10.0.0.3".into(),
                ..Default::default()
            })
            .unwrap()
            .id;
        assert_eq!(id, DeviceId::new(3));
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_store(&path), Err(StorageError::Parse { .. })));
    }

    #[test]
    fn test_blank_file_is_empty_inventory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "  \n").unwrap();
        assert!(load_store(&path).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let record = r#"{"id":"DEV-0001","name":"a","device_type":"","ip_address":"10.0.0.1",
            "location":"","owner":"","status":"active","notes":"","created_at":"2024-01-01T00:00:00Z"}"#;
        fs::write(&path, format!("[{record},{record}]")).unwrap();
        assert!(matches!(
            load_store(&path),
            Err(StorageError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_record_with_invalid_ip_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let record = r#"{"id":"DEV-0004","name":"legacy","device_type":"","ip_address":"not-an-ip",
            "location":"","owner":"","status":"active","notes":"","created_at":"2024-01-01T00:00:00Z"}"#;
        fs::write(&path, format!("[{record}]")).unwrap();

        let err = load_store(&path).unwrap_err();
        assert!(matches!(err, StorageError::InvalidRecord { .. }));
        assert_eq!(
            err.to_string(),
            "Inventory record DEV-0004 is invalid: Invalid IP address 'not-an-ip'. Example: 192.168.1.10 or 2001:db8::1"
        );
    }
}
