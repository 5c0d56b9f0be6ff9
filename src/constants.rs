/// Pixel radius within which the pointer counts as being over a station
pub const SENSOR_RANGE_PIXELS: f64 = 10.0;

/// Smallest allowed viewport scale; wheel requests below it are ignored
pub const MIN_ZOOM_SCALE: f64 = 1.0;

/// Largest allowed viewport scale
pub const MAX_ZOOM_SCALE: f64 = 25.0;

/// Multiplicative scale change per wheel notch
pub const ZOOM_STEP: f64 = 1.1;

/// Screen margin kept free around the projected network
pub const VIEWPORT_MARGIN: f64 = 25.0;

/// Mean earth radius used by the haversine distance, in miles
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Mean earth radius used by the haversine distance, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6373.0;

/// Where the station dataset is fetched from when nothing has been saved yet
pub const DATASET_PATH: &str = "Metrolink_Stops_Functional.json";

/// `localStorage` key holding the saved network
pub const STORAGE_KEY: &str = "data";
