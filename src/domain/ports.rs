use crate::domain::model::Device;
use crate::utils::error::Result;

/// Byte-level file access used by the device store.
///
/// Implementations open and close the underlying resource within each call.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn csv_path(&self) -> &str;
    /// Devices to register at startup, in order, with their initial power state applied.
    fn inventory(&self) -> Vec<Device>;
}
