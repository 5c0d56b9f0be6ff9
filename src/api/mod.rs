mod dataset;

pub use dataset::{dataset_url, fetch_dataset};
