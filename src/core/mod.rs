pub mod codec;
pub mod engine;
#[cfg(test)]
pub(crate) mod mock_storage;
pub mod partition;
pub mod store;

pub use crate::domain::model::{Device, DeviceKind};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::domain::registry::Registry;
pub use crate::utils::error::Result;
