mod edges;
mod routes;
mod stations;

pub use edges::Edges;
pub use routes::{Route, Routes, SearchOptions};
pub use stations::Stations;

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

use super::{Edge, Station};

/// The station network: stations keyed by code plus the connections between them
#[derive(Debug, Clone, Default)]
pub struct StationGraph {
    pub graph: DiGraph<Station, Edge>,
    pub code_to_index: HashMap<String, NodeIndex>,
}

impl StationGraph {
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            code_to_index: HashMap::new(),
        }
    }

    #[must_use]
    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of stored directed records, which is twice the number of connections
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Stations in insertion order
    pub fn stations(&self) -> impl Iterator<Item = (NodeIndex, &Station)> {
        self.graph
            .node_indices()
            .filter_map(move |idx| self.graph.node_weight(idx).map(|station| (idx, station)))
    }

    /// Clear every traversal and highlight flag left behind by a previous search
    pub fn reset(&mut self) {
        for station in self.graph.node_weights_mut() {
            station.clear_flags();
        }
        for edge in self.graph.edge_weights_mut() {
            edge.set_highlighted(false);
        }
    }
}
