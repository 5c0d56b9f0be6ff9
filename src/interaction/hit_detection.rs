use petgraph::graph::NodeIndex;

use crate::geometry::pixel_distance;
use crate::models::StationGraph;

/// Stations strictly closer than `range` to `(x, y)` in projected
/// coordinates, in station insertion order
#[must_use]
pub fn stations_in_range(graph: &StationGraph, x: f64, y: f64, range: f64) -> Vec<NodeIndex> {
    graph
        .stations()
        .filter(|(_, station)| pixel_distance(station.position, (x, y)) < range)
        .map(|(idx, _)| idx)
        .collect()
}
