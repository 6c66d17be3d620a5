use crate::domain::model::Device;

/// Ordered collection of devices. Insertion order is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    devices: Vec<Device>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, device: Device) {
        self.devices.push(device);
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Device> {
        self.devices.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Device> {
        self.devices.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.devices.iter()
    }

    pub fn as_slice(&self) -> &[Device] {
        &self.devices
    }
}

impl FromIterator<Device> for Registry {
    fn from_iter<I: IntoIterator<Item = Device>>(iter: I) -> Self {
        Self {
            devices: iter.into_iter().collect(),
        }
    }
}

impl Extend<Device> for Registry {
    fn extend<I: IntoIterator<Item = Device>>(&mut self, iter: I) {
        self.devices.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order_and_duplicates() {
        let mut registry = Registry::new();
        registry.push(Device::phone("Pixel 7"));
        registry.push(Device::laptop("Lenovo"));
        registry.push(Device::phone("Pixel 7"));

        let labels: Vec<&str> = registry.iter().map(Device::label).collect();
        assert_eq!(labels, vec!["Pixel 7", "Lenovo", "Pixel 7"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_get_mut_toggles_in_place() {
        let mut registry: Registry = [Device::phone("a"), Device::laptop("b")]
            .into_iter()
            .collect();

        if let Some(device) = registry.get_mut(1) {
            device.turn_on();
        }

        assert!(!registry.as_slice()[0].is_on());
        assert!(registry.as_slice()[1].is_on());
        assert!(registry.get(2).is_none());
    }
}
