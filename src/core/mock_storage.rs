use crate::domain::ports::Storage;
use crate::utils::error::{Result, StoreError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory [`Storage`] for unit tests.
#[derive(Default)]
pub(crate) struct MockStorage {
    files: RefCell<HashMap<String, Vec<u8>>>,
    fail_writes: bool,
}

impl MockStorage {
    pub(crate) fn with_file(path: &str, data: &[u8]) -> Self {
        let storage = Self::default();
        storage
            .files
            .borrow_mut()
            .insert(path.to_string(), data.to_vec());
        storage
    }

    pub(crate) fn read_only() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }
}

impl Storage for MockStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            StoreError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path),
            ))
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        if self.fail_writes {
            return Err(StoreError::IoError(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only storage",
            )));
        }
        self.files
            .borrow_mut()
            .insert(path.to_string(), data.to_vec());
        Ok(())
    }
}
