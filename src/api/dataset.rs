use crate::import::StationDataset;

/// Absolute URL of a dataset served next to the app
#[must_use]
pub fn dataset_url(origin: &str, path: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Fetch the station dataset
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP request fails
/// - The response status is not ok
/// - The response body cannot be deserialized
pub async fn fetch_dataset(url: &str) -> Result<StationDataset, String> {
    reqwest::get(url)
        .await
        .map_err(|e| format!("Request failed: {e}"))?
        .error_for_status()
        .map_err(|e| format!("Request failed: {e}"))?
        .json::<StationDataset>()
        .await
        .map_err(|e| format!("Failed to deserialize: {e}"))
}
