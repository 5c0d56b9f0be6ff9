mod controller;
mod frame;
pub mod hit_detection;
mod viewport;

pub use controller::{InteractionController, InteractionOutcome, InteractionState, RouteDisplay};
pub use frame::{EdgeView, FrameSnapshot, RouteStop, RouteView, SelectionView, StationView};
pub use viewport::Viewport;

use crate::import::StationDataset;
use crate::models::{MapSettings, StationGraph};
use crate::projection::Projector;

/// The loaded network together with the interaction state layered on it
#[derive(Debug, Clone)]
pub struct MapSession {
    pub graph: StationGraph,
    pub controller: InteractionController,
    viewport_size: (f64, f64),
}

impl MapSession {
    #[must_use]
    pub fn new(graph: StationGraph, settings: MapSettings) -> Self {
        Self {
            graph,
            controller: InteractionController::new(settings),
            viewport_size: (0.0, 0.0),
        }
    }

    #[must_use]
    pub fn viewport_size(&self) -> (f64, f64) {
        self.viewport_size
    }

    /// Re-project every station for a drawing surface of `width` x `height`.
    /// Returns `false` when the size did not change.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        if self.viewport_size == (width, height) {
            return false;
        }
        self.viewport_size = (width, height);
        let margin = self.controller.settings().viewport_margin;
        Projector::for_graph(&self.graph, self.viewport_size, margin).project_all(&mut self.graph);
        true
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.controller.pointer_move(&self.graph, x, y);
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.controller.pointer_down(&mut self.graph, x, y);
    }

    pub fn pointer_up(&mut self) -> InteractionOutcome {
        self.controller.pointer_up(&mut self.graph)
    }

    pub fn pointer_leave(&mut self) {
        self.controller.pointer_leave();
    }

    pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64) -> bool {
        self.controller.wheel(x, y, delta_y)
    }

    pub fn toggle_path_follow(&mut self) {
        self.controller.toggle_path_follow();
    }

    #[must_use]
    pub fn frame(&self) -> FrameSnapshot {
        self.controller.frame(&self.graph)
    }

    #[must_use]
    pub fn route_view(&self) -> Option<RouteView> {
        self.controller.route_view(&self.graph)
    }

    /// The network in its saved form
    #[must_use]
    pub fn to_dataset(&self) -> StationDataset {
        StationDataset::from_graph(&self.graph)
    }
}
