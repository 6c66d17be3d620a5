use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Phone,
    Laptop,
}

impl DeviceKind {
    /// Tag written in the first CSV column.
    pub fn tag(self) -> &'static str {
        match self {
            DeviceKind::Phone => "Telefono",
            DeviceKind::Laptop => "ComputadoraPortatil",
        }
    }

    /// Inverse of [`DeviceKind::tag`]. Matching is exact.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Telefono" => Some(DeviceKind::Phone),
            "ComputadoraPortatil" => Some(DeviceKind::Laptop),
            _ => None,
        }
    }

    /// What the label means for this kind.
    pub fn label_name(self) -> &'static str {
        match self {
            DeviceKind::Phone => "Model",
            DeviceKind::Laptop => "Brand",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceKind::Phone => f.write_str("Phone"),
            DeviceKind::Laptop => f.write_str("Laptop"),
        }
    }
}

/// A phone or laptop with an on/off switch.
///
/// Kind and label are fixed at construction; only the power flag changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    kind: DeviceKind,
    label: String,
    powered_on: bool,
}

impl Device {
    pub fn new(kind: DeviceKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            powered_on: false,
        }
    }

    pub fn phone(model: impl Into<String>) -> Self {
        Self::new(DeviceKind::Phone, model)
    }

    pub fn laptop(brand: impl Into<String>) -> Self {
        Self::new(DeviceKind::Laptop, brand)
    }

    pub fn turn_on(&mut self) {
        self.powered_on = true;
    }

    pub fn turn_off(&mut self) {
        self.powered_on = false;
    }

    pub fn is_on(&self) -> bool {
        self.powered_on
    }

    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind_label(&self) -> (DeviceKind, &str) {
        (self.kind, &self.label)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {}, On: {}",
            self.kind,
            self.kind.label_name(),
            self.label,
            self.powered_on
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_device_is_off() {
        let phone = Device::phone("iPhone X");
        assert!(!phone.is_on());
        assert_eq!(phone.kind_label(), (DeviceKind::Phone, "iPhone X"));

        let laptop = Device::laptop("Dell XPS 13");
        assert!(!laptop.is_on());
        assert_eq!(laptop.kind(), DeviceKind::Laptop);
    }

    #[test]
    fn test_power_toggles_are_idempotent() {
        let mut device = Device::laptop("HP Spectre x360");

        device.turn_on();
        device.turn_on();
        assert!(device.is_on());

        device.turn_off();
        device.turn_off();
        assert!(!device.is_on());

        device.turn_on();
        assert!(device.is_on());
        assert_eq!(device.label(), "HP Spectre x360");
    }

    #[test]
    fn test_tags() {
        for kind in [DeviceKind::Phone, DeviceKind::Laptop] {
            assert_eq!(DeviceKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(DeviceKind::from_tag("Tipo"), None);
        assert_eq!(DeviceKind::from_tag("telefono"), None);
    }

    #[test]
    fn test_display() {
        let mut phone = Device::phone("iPhone X");
        phone.turn_on();
        assert_eq!(phone.to_string(), "Phone - Model: iPhone X, On: true");
        assert_eq!(
            Device::laptop("Dell XPS 13").to_string(),
            "Laptop - Brand: Dell XPS 13, On: false"
        );
    }
}
