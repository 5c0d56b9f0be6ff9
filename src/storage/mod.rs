mod codec;
mod local;

pub use codec::{deserialize_dataset, serialize_dataset};
pub use local::LocalStorageStore;

use std::cell::RefCell;
use thiserror::Error;

use crate::import::StationDataset;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Something was saved but it cannot be turned back into a network
    #[error("Saved network is unreadable: {0}")]
    Unreadable(String),

    #[error("Storage is not available: {0}")]
    Unavailable(String),

    #[error("Failed to save network: {0}")]
    Write(String),
}

/// Where the station network is kept between sessions
pub trait NetworkStore {
    /// Load the saved network. `Ok(None)` means nothing has been saved yet.
    ///
    /// # Errors
    /// `StorageError::Unreadable` when saved data exists but cannot be parsed,
    /// `StorageError::Unavailable` when the store cannot be reached
    fn load(&self) -> Result<Option<StationDataset>, StorageError>;

    /// Replace the saved network
    ///
    /// # Errors
    /// Returns an error if the dataset cannot be serialized or written
    fn save(&self, dataset: &StationDataset) -> Result<(), StorageError>;
}

/// Keeps the serialized network in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: RefCell<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds `raw`, as if a previous session had written it
    #[must_use]
    pub fn with_contents(raw: impl Into<String>) -> Self {
        Self {
            contents: RefCell::new(Some(raw.into())),
        }
    }

    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl NetworkStore for MemoryStore {
    fn load(&self) -> Result<Option<StationDataset>, StorageError> {
        self.contents.borrow().as_deref().map(deserialize_dataset).transpose()
    }

    fn save(&self, dataset: &StationDataset) -> Result<(), StorageError> {
        let raw = serialize_dataset(dataset)?;
        *self.contents.borrow_mut() = Some(raw);
        Ok(())
    }
}
