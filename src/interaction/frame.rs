use petgraph::graph::NodeIndex;

use super::viewport::Viewport;
use crate::geometry::DistanceUnit;

/// A station as it should be drawn, in projected coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct StationView {
    pub index: NodeIndex,
    pub code: String,
    pub name: String,
    pub position: (f64, f64),
    pub highlighted: bool,
    pub hovered: bool,
}

/// One connection, drawn once regardless of how many records back it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeView {
    pub start: (f64, f64),
    pub end: (f64, f64),
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionView {
    pub source: Option<String>,
    pub source_position: Option<(f64, f64)>,
    pub hover_target: Option<String>,
    /// Pointer in projected coordinates
    pub pointer: (f64, f64),
    pub dragging: bool,
    pub path_follow: bool,
}

impl SelectionView {
    /// Segment from the selected station to the pointer while a connection is being drawn
    #[must_use]
    pub fn rubber_band(&self) -> Option<((f64, f64), (f64, f64))> {
        self.source_position.map(|start| (start, self.pointer))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteStop {
    pub code: String,
    pub name: String,
    pub distance_from_previous: f64,
}

/// Result of the last route query. `stops` is empty when no route exists.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteView {
    pub from: String,
    pub to: String,
    pub stops: Vec<RouteStop>,
    pub total_distance: f64,
    pub unit: DistanceUnit,
}

impl RouteView {
    #[must_use]
    pub fn is_found(&self) -> bool {
        !self.stops.is_empty()
    }

    /// Stops after the first, which are the hops of the route
    pub fn hops(&self) -> impl Iterator<Item = &RouteStop> {
        self.stops.iter().skip(1)
    }
}

/// Read-only picture of the map handed to the renderer each frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub stations: Vec<StationView>,
    pub edges: Vec<EdgeView>,
    pub selection: SelectionView,
    pub viewport: Viewport,
    pub route: Option<RouteView>,
}
