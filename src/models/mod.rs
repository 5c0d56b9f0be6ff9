mod edge;
mod settings;
mod station;
mod station_graph;

pub use edge::Edge;
pub use settings::MapSettings;
pub use station::{Station, StationDetails};
pub use station_graph::{Edges, Route, Routes, SearchOptions, StationGraph, Stations};
