//! # Device Records
//!
//! File: cli/src/core/inventory/device.rs
//!
//! ## Overview
//!
//! Defines the device entity tracked by the inventory together with the
//! input shapes used to create (`NewDevice`) and change (`DeviceUpdate`) it.
//!
//! A `DeviceId` is a positive integer shown as `DEV-0001`. It is assigned by
//! the store when a device is added and never changes or gets reused.
//!
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const ID_PREFIX: &str = "DEV-";

/// Stable identifier of a device record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceId(u32);

impl DeviceId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", ID_PREFIX, self.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid device id '{0}'. Expected something like DEV-0001 or 1.")]
pub struct ParseDeviceIdError(String);

impl FromStr for DeviceId {
    type Err = ParseDeviceIdError;

    /// Accepts `DEV-0007`, `dev-7` or a bare `7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = match trimmed.get(..ID_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(ID_PREFIX) => &trimmed[ID_PREFIX.len()..],
            _ => trimmed,
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseDeviceIdError(s.to_string()));
        }
        match digits.parse::<u32>() {
            Ok(value) if value > 0 => Ok(Self(value)),
            _ => Err(ParseDeviceIdError(s.to_string())),
        }
    }
}

impl TryFrom<String> for DeviceId {
    type Error = ParseDeviceIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DeviceId> for String {
    fn from(id: DeviceId) -> Self {
        id.to_string()
    }
}

/// Lifecycle state of a device. Retirement is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    #[serde(alias = "Active")]
    Active,
    #[serde(alias = "Retired")]
    Retired,
}

impl DeviceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceStatus::Active => "active",
            DeviceStatus::Retired => "retired",
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(DeviceStatus::Active),
            "retired" => Ok(DeviceStatus::Retired),
            other => Err(format!(
                "Unknown status '{}'. Expected 'active' or 'retired'.",
                other
            )),
        }
    }
}

/// A device record as stored and persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub device_type: String,
    pub ip_address: String,
    pub location: String,
    pub owner: String,
    pub status: DeviceStatus,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Device {
    pub fn is_active(&self) -> bool {
        self.status == DeviceStatus::Active
    }

    /// Case-insensitive substring match over every text field. `query` must already be lowercase.
    pub(crate) fn matches(&self, query: &str) -> bool {
        let haystack = format!(
            "{} {} {} {} {} {} {} {}",
            self.id,
            self.name,
            self.device_type,
            self.ip_address,
            self.location,
            self.owner,
            self.status,
            self.notes
        )
        .to_lowercase();
        haystack.contains(query)
    }
}

/// Fields supplied when adding a device. The store trims and validates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDevice {
    pub name: String,
    pub device_type: String,
    pub ip_address: String,
    pub location: String,
    pub owner: String,
    pub notes: String,
}

/// A partial change to a device. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceUpdate {
    pub name: Option<String>,
    pub device_type: Option<String>,
    pub ip_address: Option<String>,
    pub location: Option<String>,
    pub owner: Option<String>,
    pub notes: Option<String>,
    pub status: Option<DeviceStatus>,
}

impl DeviceUpdate {
    pub fn is_empty(&self) -> bool {
        *self == DeviceUpdate::default()
    }
}
