use serde::{Deserialize, Serialize};

use crate::constants::{EARTH_RADIUS_KM, EARTH_RADIUS_MILES};

/// Unit used when reporting great-circle distances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
}

impl DistanceUnit {
    #[must_use]
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Miles => EARTH_RADIUS_MILES,
            DistanceUnit::Kilometers => EARTH_RADIUS_KM,
        }
    }

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "mi",
            DistanceUnit::Kilometers => "km",
        }
    }
}

/// Great-circle distance between two `(longitude, latitude)` pairs given in degrees.
///
/// Uses the haversine formula with the mean earth radius of `unit`.
///
/// # Examples
/// ```
/// use metro_map::geometry::{haversine_distance, DistanceUnit};
///
/// let manchester = (-2.2426, 53.4808);
/// assert_eq!(haversine_distance(manchester, manchester, DistanceUnit::Miles), 0.0);
/// ```
#[must_use]
pub fn haversine_distance(start: (f64, f64), end: (f64, f64), unit: DistanceUnit) -> f64 {
    let lon1 = start.0.to_radians();
    let lat1 = start.1.to_radians();
    let lon2 = end.0.to_radians();
    let lat2 = end.1.to_radians();

    let dlon = lon2 - lon1;
    let dlat = lat2 - lat1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair outside [0, 1] for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    unit.earth_radius() * c
}

/// Euclidean distance between two screen points
#[must_use]
pub fn pixel_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}
