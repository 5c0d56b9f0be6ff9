use crate::models::{Station, StationGraph};

/// Geographic extent of a set of stations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self {
            min_lon: 0.0,
            max_lon: 0.0,
            min_lat: 0.0,
            max_lat: 0.0,
        }
    }
}

impl GeoBounds {
    /// Bounds of `(longitude, latitude)` pairs in a single pass.
    /// An empty input yields zero bounds at the origin.
    pub fn from_coordinates<I>(coordinates: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut min_lon = f64::MAX;
        let mut max_lon = f64::MIN;
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut any = false;

        for (lon, lat) in coordinates {
            any = true;
            min_lon = min_lon.min(lon);
            max_lon = max_lon.max(lon);
            min_lat = min_lat.min(lat);
            max_lat = max_lat.max(lat);
        }

        if !any {
            return Self::default();
        }

        Self {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        }
    }

    /// Longitude span; 1.0 when every station shares one longitude
    #[must_use]
    pub fn lon_span(&self) -> f64 {
        non_degenerate(self.max_lon - self.min_lon)
    }

    /// Latitude span; 1.0 when every station shares one latitude
    #[must_use]
    pub fn lat_span(&self) -> f64 {
        non_degenerate(self.max_lat - self.min_lat)
    }
}

fn non_degenerate(span: f64) -> f64 {
    if span > 0.0 && span.is_finite() {
        span
    } else {
        1.0
    }
}

/// Scan all station coordinates once
pub fn compute_bounds<'a, I>(stations: I) -> GeoBounds
where
    I: IntoIterator<Item = &'a Station>,
{
    GeoBounds::from_coordinates(stations.into_iter().map(|station| station.coordinates))
}

/// Maps geographic coordinates onto the drawing surface.
///
/// Longitude grows to the right. Latitude is inverted because north is up on
/// a map but the surface's vertical axis grows downward. Pan and zoom are
/// not part of this mapping; they are applied on top by the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    pub bounds: GeoBounds,
    pub viewport_size: (f64, f64),
    pub margin: f64,
}

impl Projector {
    #[must_use]
    pub fn new(bounds: GeoBounds, viewport_size: (f64, f64), margin: f64) -> Self {
        Self {
            bounds,
            viewport_size,
            margin,
        }
    }

    #[must_use]
    pub fn for_graph(graph: &StationGraph, viewport_size: (f64, f64), margin: f64) -> Self {
        Self::new(compute_bounds(graph.graph.node_weights()), viewport_size, margin)
    }

    /// Screen position of a `(longitude, latitude)` pair
    #[must_use]
    pub fn project(&self, coordinates: (f64, f64)) -> (f64, f64) {
        let (lon, lat) = coordinates;
        let (width, height) = self.viewport_size;
        let drawable_width = (width - 2.0 * self.margin).max(0.0);
        let drawable_height = (height - 2.0 * self.margin).max(0.0);

        let x_scale = drawable_width / self.bounds.lon_span();
        let y_scale = drawable_height / self.bounds.lat_span();

        let x = self.margin + (lon - self.bounds.min_lon) * x_scale;
        let y = self.margin + (self.bounds.max_lat - lat) * y_scale;
        (x, y)
    }

    /// Write the projected position into every station of `graph`
    pub fn project_all(&self, graph: &mut StationGraph) {
        for station in graph.graph.node_weights_mut() {
            station.position = self.project(station.coordinates);
        }
    }
}
