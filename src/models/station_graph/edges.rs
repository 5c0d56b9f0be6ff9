use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashSet;

use super::stations::Stations;
use super::StationGraph;
use crate::models::Edge;

/// Extension trait for connection-related operations on `StationGraph`
pub trait Edges {
    /// Connect two stations by code.
    ///
    /// Unknown codes, self-loops and pairs that are already connected (in
    /// either direction) are ignored. Returns `true` when a new connection
    /// was stored.
    fn add_edge(&mut self, start_code: &str, end_code: &str) -> bool;

    /// Stations one connection away from `index`, in the order the connections were created
    fn neighbors(&self, index: NodeIndex) -> Vec<NodeIndex>;

    /// Directed record running from `from` to `to`
    fn find_edge(&self, from: NodeIndex, to: NodeIndex) -> Option<EdgeIndex>;

    /// Get an edge record by `EdgeIndex`
    fn edge(&self, index: EdgeIndex) -> Option<&Edge>;

    /// Whether `a` and `b` are connected, regardless of direction
    fn are_connected(&self, a: NodeIndex, b: NodeIndex) -> bool;

    /// One `(start, end)` code pair per stored directed record, so every
    /// connection appears twice
    fn serialized_connections(&self) -> Vec<(String, String)>;

    /// One `(start, end)` code pair per connection, in the direction it was first created
    fn unique_connections(&self) -> Vec<(String, String)>;
}

impl Edges for StationGraph {
    fn add_edge(&mut self, start_code: &str, end_code: &str) -> bool {
        let Some(start) = self.get_station_index(start_code) else {
            return false;
        };
        let Some(end) = self.get_station_index(end_code) else {
            return false;
        };

        if start == end || self.are_connected(start, end) {
            return false;
        }

        self.graph.add_edge(start, end, Edge::new());
        self.graph.add_edge(end, start, Edge::new());
        true
    }

    fn neighbors(&self, index: NodeIndex) -> Vec<NodeIndex> {
        // petgraph walks outgoing edges newest first
        let mut outgoing: Vec<(EdgeIndex, NodeIndex)> = self
            .graph
            .edges(index)
            .map(|edge| (edge.id(), edge.target()))
            .collect();
        outgoing.sort_by_key(|(edge, _)| edge.index());
        outgoing.into_iter().map(|(_, target)| target).collect()
    }

    fn find_edge(&self, from: NodeIndex, to: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(from, to)
    }

    fn edge(&self, index: EdgeIndex) -> Option<&Edge> {
        self.graph.edge_weight(index)
    }

    fn are_connected(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.graph.find_edge(a, b).is_some() || self.graph.find_edge(b, a).is_some()
    }

    fn serialized_connections(&self) -> Vec<(String, String)> {
        self.graph
            .edge_references()
            .filter_map(|edge| {
                let start = self.graph.node_weight(edge.source())?;
                let end = self.graph.node_weight(edge.target())?;
                Some((start.code.clone(), end.code.clone()))
            })
            .collect()
    }

    fn unique_connections(&self) -> Vec<(String, String)> {
        let mut seen = HashSet::new();
        self.graph
            .edge_references()
            .filter(|edge| {
                let (a, b) = (edge.source(), edge.target());
                seen.insert(if a < b { (a, b) } else { (b, a) })
            })
            .filter_map(|edge| {
                let start = self.graph.node_weight(edge.source())?;
                let end = self.graph.node_weight(edge.target())?;
                Some((start.code.clone(), end.code.clone()))
            })
            .collect()
    }
}
