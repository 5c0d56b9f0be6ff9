use serde::{Deserialize, Serialize};

use crate::constants::{MAX_ZOOM_SCALE, MIN_ZOOM_SCALE, SENSOR_RANGE_PIXELS, VIEWPORT_MARGIN, ZOOM_STEP};
use crate::geometry::DistanceUnit;

/// Tunable values for hover detection, zoom and route reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    pub sensor_range_pixels: f64,
    pub min_zoom_scale: f64,
    pub max_zoom_scale: f64,
    pub zoom_step: f64,
    pub viewport_margin: f64,
    pub distance_unit: DistanceUnit,
    /// Maximum number of stations a single path search may expand
    pub path_search_limit: Option<usize>,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            sensor_range_pixels: SENSOR_RANGE_PIXELS,
            min_zoom_scale: MIN_ZOOM_SCALE,
            max_zoom_scale: MAX_ZOOM_SCALE,
            zoom_step: ZOOM_STEP,
            viewport_margin: VIEWPORT_MARGIN,
            distance_unit: DistanceUnit::default(),
            path_search_limit: None,
        }
    }
}
