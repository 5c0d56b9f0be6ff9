use web_sys::Storage;

use super::{deserialize_dataset, serialize_dataset, NetworkStore, StorageError};
use crate::constants::STORAGE_KEY;
use crate::import::StationDataset;

/// Keeps the network in the browser's `localStorage`
pub struct LocalStorageStore {
    key: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(STORAGE_KEY)
    }
}

impl LocalStorageStore {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("No window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage not available".to_string()))
    }
}

impl NetworkStore for LocalStorageStore {
    fn load(&self) -> Result<Option<StationDataset>, StorageError> {
        let raw = Self::storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?;
        raw.as_deref().map(deserialize_dataset).transpose()
    }

    fn save(&self, dataset: &StationDataset) -> Result<(), StorageError> {
        let raw = serialize_dataset(dataset)?;
        Self::storage()?
            .set_item(&self.key, &raw)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trip_through_local_storage() {
        let store = LocalStorageStore::new("metro_map_test");
        let dataset = StationDataset {
            connections: Some(vec![("A".to_string(), "B".to_string())]),
            ..StationDataset::default()
        };

        store.save(&dataset).expect("save succeeds");
        assert_eq!(store.load().expect("load succeeds"), Some(dataset));
    }
}
