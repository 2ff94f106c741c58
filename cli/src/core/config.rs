//! # netinv Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates netinv's configuration: where the
//! inventory and CSV export live, and how many sample addresses the subnet
//! planner shows.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags and `NETINV_DATA_FILE` (applied by `main.rs` via `Overrides`)
//! 2. Project-specific `.netinv.toml` in the current directory or an ancestor (stops at a `.git` directory)
//! 3. User-specific `<config dir>/netinv/config.toml`
//! 4. Default values defined in the code
//!
//! Paths are `~`-expanded and the merged result is validated before use.
//!
//! ```toml
//! [storage]
//! data_file = "~/netinv/inventory.json"
//! export_file = "~/netinv/inventory_export.csv"
//!
//! [planner]
//! sample_size = 8
//! ```
//!
//! ## Examples
//!
//! ```rust
//! let cfg = config::load_config(&Overrides::default())?;
//! let store = storage::load_store(&cfg.storage.data_file)?;
//! let planner = SubnetPlanner::new(cfg.planner.sample_size);
//! ```
//!
use crate::common::fs::io;
use crate::common::network::subnet::DEFAULT_SAMPLE_SIZE;
use crate::core::error::{NetinvError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Upper bound for `planner.sample_size`; the planner output is meant for a terminal.
pub const MAX_SAMPLE_SIZE: usize = 256;

const PROJECT_CONFIG_FILENAME: &str = ".netinv.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
}

/// Where the inventory is persisted and exported.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// JSON inventory file (can use ~).
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Default CSV export target (can use ~).
    #[serde(default = "default_export_file")]
    pub export_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            export_file: default_export_file(),
        }
    }
}

/// Subnet planner policy.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PlannerConfig {
    /// Maximum number of sample addresses listed per subnet.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
        }
    }
}

/// Values supplied on the command line; they win over every file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub data_file: Option<PathBuf>,
    pub export_file: Option<PathBuf>,
    pub sample_size: Option<usize>,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("inventory.json")
}
fn default_export_file() -> PathBuf {
    PathBuf::from("inventory_export.csv")
}
fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

/// Loads user and project configuration, applies `overrides`, expands and validates paths.
pub fn load_config(overrides: &Overrides) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged = merge_configs(user_config.unwrap_or_default(), project_config);
    apply_overrides(&mut merged, overrides);
    expand_config_paths(&mut merged).context("Failed to expand paths in configuration")?;
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "netinv") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(path) = find_project_config_path(&current_dir) {
        info!("Loading project configuration from: {}", path.display());
        load_config_from_path(&path).map(Some)
    } else {
        debug!("No project configuration file (.netinv.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = io::read_file_to_string(path)?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    Config {
        storage: StorageConfig {
            data_file: if project.storage.data_file != default_data_file() {
                project.storage.data_file
            } else {
                user.storage.data_file
            },
            export_file: if project.storage.export_file != default_export_file() {
                project.storage.export_file
            } else {
                user.storage.export_file
            },
        },
        planner: PlannerConfig {
            sample_size: if project.planner.sample_size != default_sample_size() {
                project.planner.sample_size
            } else {
                user.planner.sample_size
            },
        },
    }
}

fn apply_overrides(config: &mut Config, overrides: &Overrides) {
    if let Some(data_file) = &overrides.data_file {
        config.storage.data_file = data_file.clone();
    }
    if let Some(export_file) = &overrides.export_file {
        config.storage.export_file = export_file.clone();
    }
    if let Some(sample_size) = overrides.sample_size {
        config.planner.sample_size = sample_size;
    }
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    config.storage.data_file = expand_path(&config.storage.data_file);
    config.storage.export_file = expand_path(&config.storage.export_file);
    debug!(
        "Expanded storage paths: data={:?} export={:?}",
        config.storage.data_file, config.storage.export_file
    );
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    if config.storage.data_file.as_os_str().is_empty() {
        return Err(anyhow!(NetinvError::Config(
            "storage.data_file cannot be empty.".to_string()
        )));
    }
    if config.storage.export_file.as_os_str().is_empty() {
        return Err(anyhow!(NetinvError::Config(
            "storage.export_file cannot be empty.".to_string()
        )));
    }
    if config.storage.data_file.is_dir() {
        return Err(anyhow!(NetinvError::Config(format!(
            "Configured data file '{}' is a directory.",
            config.storage.data_file.display()
        ))));
    }
    let sample_size = config.planner.sample_size;
    if !(1..=MAX_SAMPLE_SIZE).contains(&sample_size) {
        return Err(anyhow!(NetinvError::Config(format!(
            "Invalid planner.sample_size {}. Expected 1-{}.",
            sample_size, MAX_SAMPLE_SIZE
        ))));
    }
    debug!("Configuration validation successful.");
    Ok(())
}
