use std::f64::consts::PI;
use web_sys::CanvasRenderingContext2d;

use crate::interaction::{EdgeView, FrameSnapshot, SelectionView, StationView};

const CANVAS_BACKGROUND_COLOR: &str = "#0a0a0a";
const EMPTY_MESSAGE_COLOR: &str = "#666";
const EMPTY_MESSAGE_FONT: &str = "16px sans-serif";
const EMPTY_MESSAGE_TEXT: &str = "No stations loaded";
const EMPTY_MESSAGE_OFFSET_X: f64 = 70.0;

const EDGE_COLOR: &str = "#4a9eff";
const EDGE_HIGHLIGHT_COLOR: &str = "#ffaa00";
const EDGE_WIDTH: f64 = 2.0;
const EDGE_HIGHLIGHT_WIDTH: f64 = 4.0;

const PENDING_EDGE_COLOR: &str = "#888";
const PENDING_EDGE_DASH: f64 = 4.0;

const NODE_RADIUS: f64 = 4.0;
const NODE_FILL_COLOR: &str = "#2a2a2a";
const NODE_STROKE_COLOR: &str = "#4a9eff";
const NODE_HIGHLIGHT_COLOR: &str = "#ffaa00";
const HOVER_RING_OFFSET: f64 = 3.0;

const LABEL_COLOR: &str = "#fff";
const LABEL_FONT_SIZE: f64 = 12.0;
const LABEL_OFFSET: f64 = 8.0;

/// Paint one frame. Pan and zoom apply to geometry only; line widths, node
/// sizes and labels keep their on-screen size at every zoom level.
pub fn draw_frame(ctx: &CanvasRenderingContext2d, frame: &FrameSnapshot, (width, height): (f64, f64)) {
    ctx.set_fill_style_str(CANVAS_BACKGROUND_COLOR);
    ctx.fill_rect(0.0, 0.0, width, height);

    if frame.stations.is_empty() {
        ctx.set_fill_style_str(EMPTY_MESSAGE_COLOR);
        ctx.set_font(EMPTY_MESSAGE_FONT);
        let _ = ctx.fill_text(EMPTY_MESSAGE_TEXT, width / 2.0 - EMPTY_MESSAGE_OFFSET_X, height / 2.0);
        return;
    }

    let zoom = frame.viewport.scale;
    ctx.save();
    let _ = ctx.translate(frame.viewport.translate_x, frame.viewport.translate_y);
    let _ = ctx.scale(zoom, zoom);

    draw_edges(ctx, &frame.edges, zoom);
    draw_pending_edge(ctx, &frame.selection, zoom);
    draw_stations(ctx, &frame.stations, zoom);
    draw_labels(ctx, &frame.stations, zoom);

    ctx.restore();
}

fn draw_edges(ctx: &CanvasRenderingContext2d, edges: &[EdgeView], zoom: f64) {
    // Highlighted edges last so they sit on top
    for highlighted in [false, true] {
        let (color, width) = if highlighted {
            (EDGE_HIGHLIGHT_COLOR, EDGE_HIGHLIGHT_WIDTH)
        } else {
            (EDGE_COLOR, EDGE_WIDTH)
        };
        ctx.set_stroke_style_str(color);
        ctx.set_line_width(width / zoom);
        ctx.begin_path();
        for edge in edges.iter().filter(|e| e.highlighted == highlighted) {
            ctx.move_to(edge.start.0, edge.start.1);
            ctx.line_to(edge.end.0, edge.end.1);
        }
        ctx.stroke();
    }
}

/// The connection being drawn, from the selected station to the pointer
fn draw_pending_edge(ctx: &CanvasRenderingContext2d, selection: &SelectionView, zoom: f64) {
    let Some((start, end)) = selection.rubber_band() else { return };

    ctx.save();
    ctx.set_stroke_style_str(PENDING_EDGE_COLOR);
    ctx.set_line_width(EDGE_WIDTH / zoom);
    let dash = js_dash(PENDING_EDGE_DASH / zoom);
    let _ = ctx.set_line_dash(&dash);
    ctx.begin_path();
    ctx.move_to(start.0, start.1);
    ctx.line_to(end.0, end.1);
    ctx.stroke();
    ctx.restore();
}

fn js_dash(length: f64) -> wasm_bindgen::JsValue {
    let array = web_sys::js_sys::Array::new();
    array.push(&length.into());
    array.push(&length.into());
    array.into()
}

fn draw_stations(ctx: &CanvasRenderingContext2d, stations: &[StationView], zoom: f64) {
    let radius = NODE_RADIUS / zoom;
    ctx.set_line_width(1.5 / zoom);

    for station in stations {
        let (x, y) = station.position;
        let stroke = if station.highlighted { NODE_HIGHLIGHT_COLOR } else { NODE_STROKE_COLOR };

        ctx.set_fill_style_str(NODE_FILL_COLOR);
        ctx.set_stroke_style_str(stroke);
        ctx.begin_path();
        let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
        ctx.fill();
        ctx.stroke();

        if station.hovered {
            ctx.begin_path();
            let _ = ctx.arc(x, y, radius + HOVER_RING_OFFSET / zoom, 0.0, 2.0 * PI);
            ctx.stroke();
        }
    }
}

/// Names of hovered and highlighted stations
fn draw_labels(ctx: &CanvasRenderingContext2d, stations: &[StationView], zoom: f64) {
    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font(&format!("{}px sans-serif", LABEL_FONT_SIZE / zoom));

    for station in stations.iter().filter(|s| s.hovered || s.highlighted) {
        let (x, y) = station.position;
        let _ = ctx.fill_text(&station.name, x + LABEL_OFFSET / zoom, y + LABEL_FONT_SIZE / (3.0 * zoom));
    }
}
