use petgraph::graph::NodeIndex;

use super::StationGraph;
use crate::models::Station;

/// Extension trait for station-related operations on `StationGraph`
pub trait Stations {
    /// Add a station, returning its `NodeIndex`.
    ///
    /// Codes are unique: when the code is already present the existing station
    /// is kept untouched and its index returned.
    fn add_station(&mut self, station: Station) -> NodeIndex;

    /// Get a station by its code
    fn get_station(&self, code: &str) -> Option<&Station>;

    /// Get `NodeIndex` by station code
    fn get_station_index(&self, code: &str) -> Option<NodeIndex>;

    /// Get a station by `NodeIndex`
    fn station(&self, index: NodeIndex) -> Option<&Station>;

    /// Update the projected screen position of a station
    fn set_station_position(&mut self, index: NodeIndex, position: (f64, f64));

    /// Get the projected screen position of a station
    fn get_station_position(&self, index: NodeIndex) -> Option<(f64, f64)>;
}

impl Stations for StationGraph {
    fn add_station(&mut self, station: Station) -> NodeIndex {
        if let Some(&index) = self.code_to_index.get(&station.code) {
            return index;
        }
        let code = station.code.clone();
        let index = self.graph.add_node(station);
        self.code_to_index.insert(code, index);
        index
    }

    fn get_station(&self, code: &str) -> Option<&Station> {
        self.get_station_index(code)
            .and_then(|index| self.graph.node_weight(index))
    }

    fn get_station_index(&self, code: &str) -> Option<NodeIndex> {
        self.code_to_index.get(code).copied()
    }

    fn station(&self, index: NodeIndex) -> Option<&Station> {
        self.graph.node_weight(index)
    }

    fn set_station_position(&mut self, index: NodeIndex, position: (f64, f64)) {
        if let Some(station) = self.graph.node_weight_mut(index) {
            station.position = position;
        }
    }

    fn get_station_position(&self, index: NodeIndex) -> Option<(f64, f64)> {
        self.graph.node_weight(index).map(|station| station.position)
    }
}
