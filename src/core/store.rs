use crate::core::codec::{self, SkippedRecord};
use crate::domain::ports::Storage;
use crate::domain::registry::Registry;
use crate::utils::error::{Result, StoreError};
use std::fmt;

/// Non-fatal problem met while saving or loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    Io { path: String, message: String },
    MalformedRecord(SkippedRecord),
    UnescapedLabel { index: usize, label: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::Io { path, message } => write!(f, "{}: {}", path, message),
            Warning::MalformedRecord(skipped) => {
                write!(f, "line {} skipped: {}", skipped.line, skipped.reason)
            }
            Warning::UnescapedLabel { index, label } => {
                write!(f, "device {} label '{}' contains a comma", index, label)
            }
        }
    }
}

/// A value together with the warnings collected while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    pub value: T,
    pub warnings: Vec<Warning>,
}

impl<T> Outcome<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Persists a [`Registry`] as CSV through a [`Storage`] backend.
///
/// `save`/`load` log I/O failures and carry on; `save_strict`/`load_strict`
/// return them as errors instead.
pub struct DeviceStore<S: Storage> {
    storage: S,
}

impl<S: Storage> DeviceStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn save(&self, registry: &Registry, path: &str) -> Outcome<()> {
        let mut outcome = Outcome::new(());

        for (index, label) in comma_labels(registry) {
            tracing::warn!(
                "Label '{}' contains a comma and will not load back from {}",
                label,
                path
            );
            outcome.warnings.push(Warning::UnescapedLabel {
                index,
                label: label.to_string(),
            });
        }

        if let Err(e) = self.write(registry, path) {
            tracing::error!("❌ Failed to save devices to {}: {}", path, e);
            outcome.warnings.push(Warning::Io {
                path: path.to_string(),
                message: e.to_string(),
            });
        }

        outcome
    }

    pub fn load(&self, path: &str) -> Outcome<Registry> {
        let decoded = self
            .storage
            .read_file(path)
            .and_then(|data| codec::decode(&data));

        match decoded {
            Ok(decoded) => Outcome {
                value: decoded.registry,
                warnings: decoded
                    .skipped
                    .into_iter()
                    .map(Warning::MalformedRecord)
                    .collect(),
            },
            Err(e) => {
                tracing::error!("❌ Failed to load devices from {}: {}", path, e);
                Outcome {
                    value: Registry::new(),
                    warnings: vec![Warning::Io {
                        path: path.to_string(),
                        message: e.to_string(),
                    }],
                }
            }
        }
    }

    pub fn save_strict(&self, registry: &Registry, path: &str) -> Result<()> {
        if let Some((index, label)) = comma_labels(registry).next() {
            return Err(StoreError::MalformedRecord {
                // header occupies line 1
                line: index as u64 + 2,
                reason: format!("label '{}' contains a comma", label),
            });
        }
        self.write(registry, path)
    }

    pub fn load_strict(&self, path: &str) -> Result<Registry> {
        let data = self.storage.read_file(path)?;
        let decoded = codec::decode(&data)?;

        match decoded.skipped.into_iter().next() {
            Some(SkippedRecord { line, reason }) => Err(StoreError::MalformedRecord { line, reason }),
            None => Ok(decoded.registry),
        }
    }

    fn write(&self, registry: &Registry, path: &str) -> Result<()> {
        let data = codec::encode(registry)?;
        tracing::debug!(
            "Writing {} devices ({} bytes) to {}",
            registry.len(),
            data.len(),
            path
        );
        self.storage.write_file(path, &data)
    }
}

fn comma_labels(registry: &Registry) -> impl Iterator<Item = (usize, &str)> {
    registry
        .iter()
        .map(|device| device.label())
        .enumerate()
        .filter(|(_, label)| label.contains(','))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock_storage::MockStorage;
    use crate::domain::model::Device;

    fn sample() -> Registry {
        let mut phone = Device::phone("iPhone X");
        phone.turn_on();
        [phone, Device::laptop("Dell XPS 13")].into_iter().collect()
    }

    #[test]
    fn test_save_then_load() {
        let store = DeviceStore::new(MockStorage::default());
        let registry = sample();

        assert!(store.save(&registry, "devices.csv").is_clean());
        let loaded = store.load("devices.csv");

        assert!(loaded.is_clean());
        assert_eq!(loaded.value, registry);
    }

    #[test]
    fn test_load_missing_file_yields_empty_registry() {
        let store = DeviceStore::new(MockStorage::default());

        let loaded = store.load("missing.csv");

        assert!(loaded.value.is_empty());
        assert!(matches!(
            loaded.warnings.as_slice(),
            [Warning::Io { path, .. }] if path == "missing.csv"
        ));
    }

    #[test]
    fn test_save_failure_is_reported_not_raised() {
        let store = DeviceStore::new(MockStorage::read_only());

        let outcome = store.save(&sample(), "devices.csv");

        assert_eq!(outcome.warnings.len(), 1);
        assert!(matches!(outcome.warnings[0], Warning::Io { .. }));
        assert!(store.load("devices.csv").value.is_empty());
    }

    #[test]
    fn test_load_collects_malformed_records() {
        let storage = MockStorage::with_file(
            "devices.csv",
            b"Tipo,Modelo/Marca,Estado\nTelefono,Pixel,true\nRadio,Sony,false\n",
        );
        let store = DeviceStore::new(storage);

        let loaded = store.load("devices.csv");

        assert_eq!(loaded.value.len(), 1);
        assert_eq!(
            loaded.warnings,
            vec![Warning::MalformedRecord(SkippedRecord {
                line: 3,
                reason: "unknown device tag 'Radio'".to_string(),
            })]
        );
    }

    #[test]
    fn test_comma_label_is_written_verbatim_with_warning() {
        let store = DeviceStore::new(MockStorage::default());
        let registry: Registry = [Device::phone("Model, Pro"), Device::laptop("Asus")]
            .into_iter()
            .collect();

        let saved = store.save(&registry, "devices.csv");
        assert_eq!(
            saved.warnings,
            vec![Warning::UnescapedLabel {
                index: 0,
                label: "Model, Pro".to_string(),
            }]
        );

        let loaded = store.load("devices.csv");
        assert_eq!(loaded.value.len(), 1);
        assert_eq!(loaded.value.get(0).map(Device::label), Some("Asus"));
        assert_eq!(loaded.warnings.len(), 1);
    }

    #[test]
    fn test_strict_mode_propagates_errors() {
        let store = DeviceStore::new(MockStorage::with_file(
            "bad.csv",
            b"Tipo,Modelo/Marca,Estado\nTelefono,Pixel\n",
        ));

        assert!(matches!(
            store.load_strict("missing.csv"),
            Err(StoreError::IoError(_))
        ));
        assert!(matches!(
            store.load_strict("bad.csv"),
            Err(StoreError::MalformedRecord { line: 2, .. })
        ));

        let commas: Registry = [Device::laptop("Dell"), Device::laptop("HP, Inc")]
            .into_iter()
            .collect();
        assert!(matches!(
            store.save_strict(&commas, "out.csv"),
            Err(StoreError::MalformedRecord { line: 3, .. })
        ));

        assert!(store.save_strict(&sample(), "out.csv").is_ok());
        assert_eq!(store.load_strict("out.csv").unwrap(), sample());
    }

    #[test]
    fn test_strict_load_reports_physical_line() {
        let store = DeviceStore::new(MockStorage::with_file(
            "gaps.csv",
            b"Tipo,Modelo/Marca,Estado\n\nTelefono,Pixel,true\n\n\nTelefono,Pixel\n",
        ));

        assert!(matches!(
            store.load_strict("gaps.csv"),
            Err(StoreError::MalformedRecord { line: 6, .. })
        ));
    }
}
