use super::StorageError;
use crate::import::StationDataset;

/// Serialize a network to the JSON shape it is loaded from
///
/// # Errors
/// Returns an error if JSON serialization fails
pub fn serialize_dataset(dataset: &StationDataset) -> Result<String, StorageError> {
    serde_json::to_string(dataset).map_err(|e| StorageError::Write(format!("Failed to serialize network: {e}")))
}

/// Parse a saved network
///
/// # Errors
/// Returns `StorageError::Unreadable` if `raw` is not a valid station dataset
pub fn deserialize_dataset(raw: &str) -> Result<StationDataset, StorageError> {
    serde_json::from_str(raw).map_err(|e| StorageError::Unreadable(format!("Failed to parse network: {e}")))
}
