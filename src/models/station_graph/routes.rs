use petgraph::graph::NodeIndex;

use super::edges::Edges;
use super::StationGraph;
use crate::geometry::{haversine_distance, DistanceUnit};
use crate::models::MapSettings;

/// Knobs for a single path search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub unit: DistanceUnit,
    /// Give up once this many stations have been expanded
    pub step_limit: Option<usize>,
}

impl From<&MapSettings> for SearchOptions {
    fn from(settings: &MapSettings) -> Self {
        Self {
            unit: settings.distance_unit,
            step_limit: settings.path_search_limit,
        }
    }
}

/// Ordered stations from a source to a destination, with the great-circle
/// length of every hop
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub stations: Vec<NodeIndex>,
    /// `hop_distances[i]` is the distance from `stations[i]` to `stations[i + 1]`
    pub hop_distances: Vec<f64>,
    pub total_distance: f64,
    pub unit: DistanceUnit,
}

/// Extension trait for route queries on `StationGraph`
pub trait Routes {
    /// Find a route from `start` to `destination`.
    ///
    /// Depth-first search that at every station tries the untraversed
    /// neighbors nearest to the destination first, backtracking when a branch
    /// dead-ends. A station is never entered twice within one search, so the
    /// walk always terminates, but the route returned is the first one found
    /// and not necessarily the shortest.
    ///
    /// Returns `None` when the stations are not connected, either index is
    /// unknown, or the step limit runs out.
    fn find_path(&mut self, start: NodeIndex, destination: NodeIndex, options: SearchOptions) -> Option<Route>;

    /// Mark the stations of `route` and the records it runs along as highlighted
    fn highlight_route(&mut self, route: &Route);

    /// Great-circle distance between two stations
    fn station_distance(&self, a: NodeIndex, b: NodeIndex, unit: DistanceUnit) -> Option<f64>;
}

struct Frame {
    candidates: Vec<NodeIndex>,
    next: usize,
}

impl Routes for StationGraph {
    fn find_path(&mut self, start: NodeIndex, destination: NodeIndex, options: SearchOptions) -> Option<Route> {
        let target = self.graph.node_weight(destination)?.coordinates;
        self.graph.node_weight(start)?;

        // Flags from an earlier search would hide stations from this one
        for station in self.graph.node_weights_mut() {
            station.set_traversed(false);
        }

        let mut route = Vec::new();
        let mut stack: Vec<Frame> = Vec::new();
        let mut expanded = 0usize;
        let mut entering = Some(start);

        loop {
            if let Some(current) = entering.take() {
                if options.step_limit.is_some_and(|limit| expanded >= limit) {
                    crate::log!("Path search gave up after expanding {} stations", expanded);
                    return None;
                }
                expanded += 1;

                if let Some(station) = self.graph.node_weight_mut(current) {
                    station.set_traversed(true);
                }
                route.push(current);

                if current == destination {
                    #[cfg(feature = "perf_timing")]
                    crate::log!("Path search expanded {} stations for a {}-stop route", expanded, route.len());
                    return Some(self.build_route(route, options.unit));
                }

                let candidates = self.ordered_candidates(current, target);
                stack.push(Frame { candidates, next: 0 });
                continue;
            }

            let frame = stack.last_mut()?;
            let mut next = None;
            while frame.next < frame.candidates.len() {
                let candidate = frame.candidates[frame.next];
                frame.next += 1;
                // A sibling branch may have reached it since the list was built
                if !self.graph[candidate].is_traversed() {
                    next = Some(candidate);
                    break;
                }
            }

            if next.is_some() {
                entering = next;
            } else {
                stack.pop();
                route.pop();
            }
        }
    }

    fn highlight_route(&mut self, route: &Route) {
        for &index in &route.stations {
            if let Some(station) = self.graph.node_weight_mut(index) {
                station.set_highlighted(true);
            }
        }
        for pair in route.stations.windows(2) {
            let Some(edge) = self.find_edge(pair[0], pair[1]) else { continue };
            if let Some(weight) = self.graph.edge_weight_mut(edge) {
                weight.set_highlighted(true);
            }
        }
    }

    fn station_distance(&self, a: NodeIndex, b: NodeIndex, unit: DistanceUnit) -> Option<f64> {
        let a = self.graph.node_weight(a)?;
        let b = self.graph.node_weight(b)?;
        Some(haversine_distance(a.coordinates, b.coordinates, unit))
    }
}

impl StationGraph {
    /// Untraversed neighbors of `current`, nearest to `target` first.
    /// The sort is stable so equally distant neighbors keep connection order.
    fn ordered_candidates(&self, current: NodeIndex, target: (f64, f64)) -> Vec<NodeIndex> {
        let mut candidates: Vec<(NodeIndex, f64)> = self
            .neighbors(current)
            .into_iter()
            .filter(|&idx| !self.graph[idx].is_traversed())
            .map(|idx| {
                let distance = haversine_distance(self.graph[idx].coordinates, target, DistanceUnit::Miles);
                (idx, distance)
            })
            .collect();
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
        candidates.into_iter().map(|(idx, _)| idx).collect()
    }

    fn build_route(&self, stations: Vec<NodeIndex>, unit: DistanceUnit) -> Route {
        let hop_distances: Vec<f64> = stations
            .windows(2)
            .map(|pair| self.station_distance(pair[0], pair[1], unit).unwrap_or(0.0))
            .collect();
        let total_distance = hop_distances.iter().sum();

        Route {
            stations,
            hop_distances,
            total_distance,
            unit,
        }
    }
}
