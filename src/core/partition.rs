use crate::domain::model::Device;

/// Devices split by power state. Both sides borrow from the source collection.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    pub on: Vec<&'a Device>,
    pub off: Vec<&'a Device>,
}

impl Partition<'_> {
    pub fn len(&self) -> usize {
        self.on.len() + self.off.len()
    }

    pub fn is_empty(&self) -> bool {
        self.on.is_empty() && self.off.is_empty()
    }
}

pub fn partition<'a, I>(devices: I) -> Partition<'a>
where
    I: IntoIterator<Item = &'a Device>,
{
    let mut result = Partition::default();
    for device in devices {
        if device.is_on() {
            result.on.push(device);
        } else {
            result.off.push(device);
        }
    }
    result
}
