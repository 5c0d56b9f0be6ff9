pub mod dataset;

pub use dataset::{PointGeometry, StationDataset, StationFeature, StationProperties};
