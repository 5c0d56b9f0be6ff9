use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

use super::frame::{EdgeView, FrameSnapshot, RouteStop, RouteView, SelectionView, StationView};
use super::hit_detection;
use super::viewport::Viewport;
use crate::geometry::DistanceUnit;
use crate::models::{Edges, MapSettings, Route, Routes, SearchOptions, StationGraph};

/// Which phase of a gesture the controller is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Hovering,
    Selecting,
    Dragging,
    PathDisplay,
}

/// What a pointer release asks the outside world to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionOutcome {
    Nothing,
    /// A connection was stored; the network should be persisted
    EdgeCommitted { start: String, end: String },
    RouteFound,
    NoRoute,
}

/// Result of the last route query, kept on screen until the next gesture starts
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDisplay {
    pub from: NodeIndex,
    pub to: NodeIndex,
    pub route: Option<Route>,
}

/// Turns pointer and wheel events into hover, selection, pan, zoom and route state
#[derive(Debug, Clone)]
pub struct InteractionController {
    settings: MapSettings,
    viewport: Viewport,
    pointer: (f64, f64),
    drag_anchor: Option<(f64, f64)>,
    hover: Vec<NodeIndex>,
    source: Option<NodeIndex>,
    path_follow: bool,
    route_display: Option<RouteDisplay>,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(MapSettings::default())
    }
}

impl InteractionController {
    #[must_use]
    pub fn new(settings: MapSettings) -> Self {
        let viewport = Viewport::new(settings.viewport_margin);
        Self {
            settings,
            viewport,
            pointer: (0.0, 0.0),
            drag_anchor: None,
            hover: Vec::new(),
            source: None,
            path_follow: false,
            route_display: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        if self.drag_anchor.is_some() {
            InteractionState::Dragging
        } else if self.source.is_some() {
            InteractionState::Selecting
        } else if self.route_display.is_some() {
            InteractionState::PathDisplay
        } else if !self.hover.is_empty() {
            InteractionState::Hovering
        } else {
            InteractionState::Idle
        }
    }

    #[must_use]
    pub fn settings(&self) -> &MapSettings {
        &self.settings
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Stations currently under the pointer
    #[must_use]
    pub fn hover_set(&self) -> &[NodeIndex] {
        &self.hover
    }

    /// The station a release would target
    #[must_use]
    pub fn hover_target(&self) -> Option<NodeIndex> {
        self.hover.first().copied()
    }

    #[must_use]
    pub fn source(&self) -> Option<NodeIndex> {
        self.source
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    #[must_use]
    pub fn path_follow(&self) -> bool {
        self.path_follow
    }

    pub fn set_path_follow(&mut self, enabled: bool) {
        self.path_follow = enabled;
    }

    pub fn toggle_path_follow(&mut self) {
        self.path_follow = !self.path_follow;
    }

    #[must_use]
    pub fn route_display(&self) -> Option<&RouteDisplay> {
        self.route_display.as_ref()
    }

    /// Pointer position with pan and zoom removed
    #[must_use]
    pub fn pointer_world(&self) -> (f64, f64) {
        self.viewport.screen_to_world(self.pointer.0, self.pointer.1)
    }

    pub fn pointer_move(&mut self, graph: &StationGraph, x: f64, y: f64) {
        if let Some((anchor_x, anchor_y)) = self.drag_anchor {
            self.viewport.pan_by(x - anchor_x, y - anchor_y);
            self.drag_anchor = Some((x, y));
        }
        self.update_hover(graph, x, y);
    }

    /// Start a gesture: select the hovered station, or start panning
    pub fn pointer_down(&mut self, graph: &mut StationGraph, x: f64, y: f64) {
        graph.reset();
        self.route_display = None;
        self.source = None;
        self.drag_anchor = None;
        self.update_hover(graph, x, y);

        if let Some(target) = self.hover_target() {
            self.source = Some(target);
        } else {
            self.drag_anchor = Some((x, y));
        }
    }

    /// Finish a gesture: connect or route between the selected and hovered stations
    pub fn pointer_up(&mut self, graph: &mut StationGraph) -> InteractionOutcome {
        if self.drag_anchor.take().is_some() {
            return InteractionOutcome::Nothing;
        }

        let Some(source) = self.source.take() else {
            return InteractionOutcome::Nothing;
        };
        let Some(target) = self.hover_target().filter(|&target| target != source) else {
            return InteractionOutcome::Nothing;
        };

        if self.path_follow {
            self.show_route(graph, source, target)
        } else {
            Self::commit_edge(graph, source, target)
        }
    }

    /// Zoom around the pointer; the sign of `delta_y` picks the direction
    pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64) -> bool {
        if delta_y == 0.0 {
            return false;
        }
        let factor = if delta_y < 0.0 {
            self.settings.zoom_step
        } else {
            1.0 / self.settings.zoom_step
        };
        self.viewport
            .zoom_at(factor, x, y, self.settings.min_zoom_scale, self.settings.max_zoom_scale)
    }

    /// The pointer left the surface: abandon the gesture and forget the hover set
    pub fn pointer_leave(&mut self) {
        self.drag_anchor = None;
        self.source = None;
        self.hover.clear();
    }

    fn update_hover(&mut self, graph: &StationGraph, x: f64, y: f64) {
        self.pointer = (x, y);
        let (world_x, world_y) = self.viewport.screen_to_world(x, y);
        self.hover = hit_detection::stations_in_range(graph, world_x, world_y, self.settings.sensor_range_pixels);
    }

    fn show_route(&mut self, graph: &mut StationGraph, from: NodeIndex, to: NodeIndex) -> InteractionOutcome {
        let route = graph.find_path(from, to, SearchOptions::from(&self.settings));
        let outcome = if let Some(route) = &route {
            graph.highlight_route(route);
            InteractionOutcome::RouteFound
        } else {
            InteractionOutcome::NoRoute
        };
        self.route_display = Some(RouteDisplay { from, to, route });
        outcome
    }

    fn commit_edge(graph: &mut StationGraph, from: NodeIndex, to: NodeIndex) -> InteractionOutcome {
        let (Some(start), Some(end)) = (graph.graph.node_weight(from), graph.graph.node_weight(to)) else {
            return InteractionOutcome::Nothing;
        };
        let (start, end) = (start.code.clone(), end.code.clone());

        if graph.add_edge(&start, &end) {
            crate::log!("Connected {} to {}", start, end);
            InteractionOutcome::EdgeCommitted { start, end }
        } else {
            InteractionOutcome::Nothing
        }
    }

    /// The last route query with station names resolved
    #[must_use]
    pub fn route_view(&self, graph: &StationGraph) -> Option<RouteView> {
        self.route_display
            .as_ref()
            .map(|display| route_view(graph, display, self.settings.distance_unit))
    }

    /// Everything the renderer needs for one frame
    #[must_use]
    pub fn frame(&self, graph: &StationGraph) -> FrameSnapshot {
        let stations = graph
            .stations()
            .map(|(index, station)| StationView {
                index,
                code: station.code.clone(),
                name: station.name.clone(),
                position: station.position,
                highlighted: station.is_highlighted(),
                hovered: self.hover.contains(&index),
            })
            .collect();

        // One view per connection, in creation order; highlighted if either record is
        let mut edges: Vec<EdgeView> = Vec::with_capacity(graph.edge_count() / 2);
        let mut slots: HashMap<(NodeIndex, NodeIndex), usize> = HashMap::with_capacity(graph.edge_count() / 2);
        for edge in graph.graph.edge_references() {
            let (a, b) = (edge.source(), edge.target());
            let key = if a < b { (a, b) } else { (b, a) };
            let highlighted = edge.weight().is_highlighted();
            if let Some(&slot) = slots.get(&key) {
                edges[slot].highlighted |= highlighted;
                continue;
            }
            slots.insert(key, edges.len());
            edges.push(EdgeView {
                start: graph.graph[a].position,
                end: graph.graph[b].position,
                highlighted,
            });
        }

        let code_of = |index: NodeIndex| graph.graph.node_weight(index).map(|s| s.code.clone());
        let selection = SelectionView {
            source: self.source.and_then(code_of),
            source_position: self.source.and_then(|index| graph.graph.node_weight(index)).map(|s| s.position),
            hover_target: self.hover_target().and_then(code_of),
            pointer: self.pointer_world(),
            dragging: self.is_dragging(),
            path_follow: self.path_follow,
        };

        FrameSnapshot {
            stations,
            edges,
            selection,
            viewport: self.viewport,
            route: self.route_view(graph),
        }
    }
}

fn route_view(graph: &StationGraph, display: &RouteDisplay, unit: DistanceUnit) -> RouteView {
    let name_of = |index: NodeIndex| {
        graph
            .graph
            .node_weight(index)
            .map(|s| s.name.clone())
            .unwrap_or_default()
    };

    let (stops, total_distance, unit) = match &display.route {
        Some(route) => {
            let stops = route
                .stations
                .iter()
                .enumerate()
                .map(|(i, &index)| RouteStop {
                    code: graph.graph.node_weight(index).map(|s| s.code.clone()).unwrap_or_default(),
                    name: name_of(index),
                    distance_from_previous: if i == 0 { 0.0 } else { route.hop_distances[i - 1] },
                })
                .collect();
            (stops, route.total_distance, route.unit)
        }
        None => (Vec::new(), 0.0, unit),
    };

    RouteView {
        from: name_of(display.from),
        to: name_of(display.to),
        stops,
        total_distance,
        unit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Station, Stations};

    /// Stations on a horizontal line at projected x = 100, 200, 300, 400
    fn setup() -> (StationGraph, InteractionController) {
        let mut graph = StationGraph::new();
        for (i, code) in ["A", "B", "C", "D"].iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let offset = i as f64;
            let idx = graph.add_station(Station::new(*code, format!("Station {code}"), (offset * 0.01, 53.0)));
            graph.set_station_position(idx, (100.0 + 100.0 * offset, 100.0));
        }
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        (graph, InteractionController::default())
    }

    fn idx(graph: &StationGraph, code: &str) -> NodeIndex {
        graph.get_station_index(code).expect("station should exist")
    }

    fn drag_between(
        graph: &mut StationGraph,
        controller: &mut InteractionController,
        from: (f64, f64),
        to: (f64, f64),
    ) -> InteractionOutcome {
        controller.pointer_move(graph, from.0, from.1);
        controller.pointer_down(graph, from.0, from.1);
        controller.pointer_move(graph, to.0, to.1);
        controller.pointer_up(graph)
    }

    #[test]
    fn test_idle_then_hovering() {
        let (graph, mut controller) = setup();
        assert_eq!(controller.state(), InteractionState::Idle);

        controller.pointer_move(&graph, 103.0, 101.0);
        assert_eq!(controller.state(), InteractionState::Hovering);
        assert_eq!(controller.hover_target(), Some(idx(&graph, "A")));

        controller.pointer_move(&graph, 150.0, 150.0);
        assert_eq!(controller.state(), InteractionState::Idle);
        assert!(controller.hover_set().is_empty());
    }

    #[test]
    fn test_hover_uses_strict_range() {
        let (graph, mut controller) = setup();
        let range = controller.settings().sensor_range_pixels;

        controller.pointer_move(&graph, 100.0 + range, 100.0);
        assert!(controller.hover_set().is_empty());

        controller.pointer_move(&graph, 100.0 + range - 1e-6, 100.0);
        assert_eq!(controller.hover_set(), &[idx(&graph, "A")]);
    }

    #[test]
    fn test_hover_accounts_for_pan_and_zoom() {
        let (graph, mut controller) = setup();
        controller.wheel(0.0, 0.0, -1.0);
        let (sx, sy) = controller.viewport().world_to_screen(200.0, 100.0);

        controller.pointer_move(&graph, sx, sy);
        assert_eq!(controller.hover_target(), Some(idx(&graph, "B")));
    }

    #[test]
    fn test_drag_between_stations_commits_edge() {
        let (mut graph, mut controller) = setup();
        let before = graph.edge_count();

        let outcome = drag_between(&mut graph, &mut controller, (300.0, 100.0), (400.0, 100.0));

        assert_eq!(
            outcome,
            InteractionOutcome::EdgeCommitted { start: "C".to_string(), end: "D".to_string() }
        );
        assert_eq!(graph.edge_count(), before + 2);
        assert!(controller.source().is_none());
        assert_eq!(controller.state(), InteractionState::Hovering);
    }

    #[test]
    fn test_existing_edge_is_not_committed_again() {
        let (mut graph, mut controller) = setup();
        let before = graph.edge_count();

        let outcome = drag_between(&mut graph, &mut controller, (200.0, 100.0), (100.0, 100.0));

        assert_eq!(outcome, InteractionOutcome::Nothing);
        assert_eq!(graph.edge_count(), before);
    }

    #[test]
    fn test_release_on_source_does_nothing() {
        let (mut graph, mut controller) = setup();
        let before = graph.edge_count();

        let outcome = drag_between(&mut graph, &mut controller, (100.0, 100.0), (102.0, 100.0));

        assert_eq!(outcome, InteractionOutcome::Nothing);
        assert_eq!(graph.edge_count(), before);
        assert!(controller.source().is_none());
    }

    #[test]
    fn test_release_on_empty_space_clears_selection() {
        let (mut graph, mut controller) = setup();

        let outcome = drag_between(&mut graph, &mut controller, (100.0, 100.0), (150.0, 300.0));

        assert_eq!(outcome, InteractionOutcome::Nothing);
        assert_eq!(controller.state(), InteractionState::Idle);
    }

    #[test]
    fn test_selecting_state_while_button_held() {
        let (mut graph, mut controller) = setup();
        controller.pointer_move(&graph, 100.0, 100.0);
        controller.pointer_down(&mut graph, 100.0, 100.0);

        assert_eq!(controller.state(), InteractionState::Selecting);
        assert_eq!(controller.source(), Some(idx(&graph, "A")));
    }

    #[test]
    fn test_path_follow_finds_route() {
        let (mut graph, mut controller) = setup();
        controller.set_path_follow(true);

        let outcome = drag_between(&mut graph, &mut controller, (100.0, 100.0), (300.0, 100.0));

        assert_eq!(outcome, InteractionOutcome::RouteFound);
        assert_eq!(controller.state(), InteractionState::PathDisplay);
        let display = controller.route_display().expect("route shown");
        let route = display.route.as_ref().expect("route found");
        assert_eq!(route.stations, vec![idx(&graph, "A"), idx(&graph, "B"), idx(&graph, "C")]);
        assert!(graph.station(idx(&graph, "B")).expect("exists").is_highlighted());
        // Path-follow never creates connections
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_path_follow_without_route() {
        let (mut graph, mut controller) = setup();
        controller.toggle_path_follow();

        let outcome = drag_between(&mut graph, &mut controller, (100.0, 100.0), (400.0, 100.0));

        assert_eq!(outcome, InteractionOutcome::NoRoute);
        assert_eq!(controller.state(), InteractionState::PathDisplay);
        assert!(controller.route_display().expect("result shown").route.is_none());
    }

    #[test]
    fn test_next_gesture_clears_route() {
        let (mut graph, mut controller) = setup();
        controller.set_path_follow(true);
        drag_between(&mut graph, &mut controller, (100.0, 100.0), (300.0, 100.0));

        controller.pointer_move(&graph, 150.0, 300.0);
        assert_eq!(controller.state(), InteractionState::PathDisplay);

        controller.pointer_down(&mut graph, 150.0, 300.0);
        assert!(controller.route_display().is_none());
        assert!(graph.stations().all(|(_, s)| !s.is_highlighted() && !s.is_traversed()));
        assert!(graph.graph.edge_weights().all(|e| !e.is_highlighted()));
    }

    #[test]
    fn test_drag_pans_viewport() {
        let (mut graph, mut controller) = setup();
        controller.pointer_move(&graph, 50.0, 50.0);
        controller.pointer_down(&mut graph, 50.0, 50.0);
        assert_eq!(controller.state(), InteractionState::Dragging);

        controller.pointer_move(&graph, 60.0, 45.0);
        controller.pointer_move(&graph, 80.0, 40.0);
        assert_eq!(controller.viewport().translate_x, 30.0);
        assert_eq!(controller.viewport().translate_y, -10.0);

        assert_eq!(controller.pointer_up(&mut graph), InteractionOutcome::Nothing);
        assert!(!controller.is_dragging());

        controller.pointer_move(&graph, 90.0, 40.0);
        assert_eq!(controller.viewport().translate_x, 30.0);
    }

    #[test]
    fn test_drag_release_over_station_returns_to_hovering() {
        let (mut graph, mut controller) = setup();
        controller.pointer_move(&graph, 50.0, 100.0);
        controller.pointer_down(&mut graph, 50.0, 100.0);
        controller.pointer_move(&graph, 60.0, 100.0);
        // Station A is now drawn at x = 110
        controller.pointer_up(&mut graph);
        controller.pointer_move(&graph, 108.0, 100.0);

        assert_eq!(controller.state(), InteractionState::Hovering);
        assert_eq!(controller.hover_target(), Some(idx(&graph, "A")));
    }

    #[test]
    fn test_wheel_never_below_minimum() {
        let (_, mut controller) = setup();
        for _ in 0..5 {
            controller.wheel(200.0, 200.0, -100.0);
        }
        for _ in 0..50 {
            controller.wheel(200.0, 200.0, 100.0);
            assert!(controller.viewport().scale >= controller.settings().min_zoom_scale);
        }
    }

    #[test]
    fn test_wheel_out_at_minimum_changes_nothing() {
        let (_, mut controller) = setup();
        let before = *controller.viewport();
        assert!(!controller.wheel(123.0, 45.0, 3.0));
        assert_eq!(*controller.viewport(), before);
    }

    #[test]
    fn test_pointer_leave_ends_drag() {
        let (mut graph, mut controller) = setup();
        controller.pointer_down(&mut graph, 10.0, 10.0);
        controller.pointer_leave();
        assert_eq!(controller.state(), InteractionState::Idle);
    }

    #[test]
    fn test_leaving_mid_selection_drops_source() {
        let (mut graph, mut controller) = setup();
        controller.pointer_move(&graph, 100.0, 100.0);
        controller.pointer_down(&mut graph, 100.0, 100.0);
        assert_eq!(controller.state(), InteractionState::Selecting);

        controller.pointer_leave();
        assert!(controller.source().is_none());
        assert_eq!(controller.state(), InteractionState::Idle);
        assert!(controller.frame(&graph).selection.rubber_band().is_none());

        // Back on the surface: a pan must end in Idle, not in a stale selection
        controller.pointer_move(&graph, 250.0, 300.0);
        controller.pointer_down(&mut graph, 250.0, 300.0);
        assert_eq!(controller.state(), InteractionState::Dragging);
        controller.pointer_move(&graph, 260.0, 300.0);

        assert_eq!(controller.pointer_up(&mut graph), InteractionOutcome::Nothing);
        assert_eq!(controller.state(), InteractionState::Idle);
        assert!(controller.source().is_none());
    }

    #[test]
    fn test_release_after_leaving_commits_nothing() {
        let (mut graph, mut controller) = setup();
        let before = graph.edge_count();
        controller.pointer_move(&graph, 300.0, 100.0);
        controller.pointer_down(&mut graph, 300.0, 100.0);
        controller.pointer_leave();

        controller.pointer_move(&graph, 400.0, 100.0);
        assert_eq!(controller.pointer_up(&mut graph), InteractionOutcome::Nothing);
        assert_eq!(graph.edge_count(), before);
    }

    #[test]
    fn test_frame_edges_follow_creation_order() {
        let (mut graph, mut controller) = setup();
        controller.set_path_follow(true);
        // Route runs C -> B -> A, against the direction the connections were created in
        drag_between(&mut graph, &mut controller, (300.0, 100.0), (100.0, 100.0));

        let frame = controller.frame(&graph);

        assert_eq!(frame.edges.len(), 2);
        assert_eq!(frame.edges[0].start, (100.0, 100.0));
        assert_eq!(frame.edges[0].end, (200.0, 100.0));
        assert_eq!(frame.edges[1].start, (200.0, 100.0));
        assert!(frame.edges.iter().all(|edge| edge.highlighted));
    }

    #[test]
    fn test_frame_snapshot() {
        let (mut graph, mut controller) = setup();
        controller.set_path_follow(true);
        drag_between(&mut graph, &mut controller, (100.0, 100.0), (300.0, 100.0));

        let frame = controller.frame(&graph);

        assert_eq!(frame.stations.len(), 4);
        assert_eq!(frame.edges.len(), 2);
        assert!(frame.edges.iter().all(|edge| edge.highlighted));
        assert_eq!(frame.selection.hover_target.as_deref(), Some("C"));
        assert!(frame.selection.source.is_none());
        assert!(frame.selection.path_follow);

        let route = frame.route.expect("route in frame");
        assert!(route.is_found());
        let codes: Vec<&str> = route.stops.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B", "C"]);
        assert_eq!(route.stops[0].distance_from_previous, 0.0);
        let hops: f64 = route.stops.iter().map(|s| s.distance_from_previous).sum();
        assert!((hops - route.total_distance).abs() < 1e-9);
        assert_eq!(route.from, "Station A");
        assert_eq!(route.to, "Station C");
    }
}
