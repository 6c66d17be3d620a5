pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::core::{
    engine::{RunReport, StoreEngine},
    partition::{partition, Partition},
    store::{DeviceStore, Outcome, Warning},
};
pub use crate::domain::{
    model::{Device, DeviceKind},
    registry::Registry,
};
pub use crate::utils::error::{Result, StoreError};
