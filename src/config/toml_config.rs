use crate::config::{default_inventory, DEFAULT_CSV_PATH};
use crate::core::{ConfigProvider, Device, DeviceKind};
use crate::utils::error::{Result, StoreError};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub devices: Vec<DeviceSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub csv_path: Option<String>,
}

/// One `[[devices]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSpec {
    pub kind: DeviceKind,
    pub label: String,
    #[serde(default)]
    pub powered_on: bool,
}

impl DeviceSpec {
    pub fn build(&self) -> Device {
        let mut device = Device::new(self.kind, self.label.clone());
        if self.powered_on {
            device.turn_on();
        }
        device
    }
}

impl TomlConfig {
    /// Reads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StoreError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| StoreError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("store.csv_path", self.csv_path())?;

        for (index, spec) in self.devices.iter().enumerate() {
            validate_non_empty_string(&format!("devices[{}].label", index), &spec.label)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn csv_path(&self) -> &str {
        self.store.csv_path.as_deref().unwrap_or(DEFAULT_CSV_PATH)
    }

    fn inventory(&self) -> Vec<Device> {
        if self.devices.is_empty() {
            return default_inventory();
        }
        self.devices.iter().map(DeviceSpec::build).collect()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
