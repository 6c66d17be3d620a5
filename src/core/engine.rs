use crate::core::partition::partition;
use crate::core::store::{DeviceStore, Warning};
use crate::domain::model::Device;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::domain::registry::Registry;
use std::fmt::Write;

/// Everything one run produced: the registry as built, the registry read
/// back from disk, and the warnings collected on the way.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub csv_path: String,
    pub registry: Registry,
    pub reloaded: Registry,
    pub warnings: Vec<Warning>,
}

impl RunReport {
    /// Console listing: all devices, then on, off, and reloaded.
    pub fn render(&self) -> String {
        let split = partition(&self.registry);

        let mut out = String::new();
        write_section(&mut out, "Devices:", self.registry.iter());
        out.push('\n');
        write_section(&mut out, "Devices powered on:", split.on.iter().copied());
        out.push('\n');
        write_section(&mut out, "Devices powered off:", split.off.iter().copied());
        out.push('\n');
        write_section(
            &mut out,
            &format!("Devices loaded from {}:", self.csv_path),
            self.reloaded.iter(),
        );
        out
    }
}

fn write_section<'a>(out: &mut String, title: &str, devices: impl Iterator<Item = &'a Device>) {
    let _ = writeln!(out, "{}", title);
    for device in devices {
        let _ = writeln!(out, "{}", device);
    }
}

pub struct StoreEngine<S: Storage, C: ConfigProvider> {
    store: DeviceStore<S>,
    config: C,
}

impl<S: Storage, C: ConfigProvider> StoreEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            store: DeviceStore::new(storage),
            config,
        }
    }

    pub fn run(&self) -> RunReport {
        let csv_path = self.config.csv_path().to_string();

        let registry: Registry = self.config.inventory().into_iter().collect();
        tracing::info!("Registered {} devices", registry.len());

        let split = partition(&registry);
        tracing::info!(
            "{} devices powered on, {} powered off",
            split.on.len(),
            split.off.len()
        );

        let mut warnings = Vec::new();

        let saved = self.store.save(&registry, &csv_path);
        if saved.is_clean() {
            tracing::info!("💾 Saved devices to {}", csv_path);
        }
        warnings.extend(saved.warnings);

        let loaded = self.store.load(&csv_path);
        tracing::info!("📁 Loaded {} devices from {}", loaded.value.len(), csv_path);
        warnings.extend(loaded.warnings);

        RunReport {
            csv_path,
            registry,
            reloaded: loaded.value,
            warnings,
        }
    }
}
