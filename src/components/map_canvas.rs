pub mod renderer;

use leptos::{
    component, create_effect, create_node_ref, create_signal, ev, html, view, window_event_listener, wasm_bindgen,
    web_sys, Callable, Callback, IntoView, NodeRef, RwSignal, SignalGetUntracked, SignalSet,
    SignalUpdate, SignalWith, SignalWithUntracked,
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use crate::interaction::{InteractionOutcome, InteractionState, MapSession};

/// Pointer position relative to the canvas' top-left corner
fn canvas_position(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (f64::from(client_x) - rect.left(), f64::from(client_y) - rect.top())
}

/// Match the canvas' backing store to its layout size and re-project when it changed
fn fit_to_container(canvas: &HtmlCanvasElement, session: RwSignal<MapSession>) {
    // Browser dimensions are always non-negative
    #[allow(clippy::cast_sign_loss)]
    let width = canvas.client_width() as u32;
    #[allow(clippy::cast_sign_loss)]
    let height = canvas.client_height() as u32;
    if width == 0 || height == 0 {
        return;
    }

    if canvas.width() != width || canvas.height() != height {
        canvas.set_width(width);
        canvas.set_height(height);
    }

    let size = (f64::from(width), f64::from(height));
    if session.with_untracked(MapSession::viewport_size) != size {
        session.update(|s| {
            s.resize(size.0, size.1);
        });
    }
}

fn setup_resize(canvas_ref: NodeRef<html::Canvas>, session: RwSignal<MapSession>) {
    // Runs on mount and again whenever a freshly loaded network has not been projected yet
    create_effect(move |_| {
        let unprojected = session.with(|s| s.viewport_size() == (0.0, 0.0));
        let Some(canvas) = canvas_ref.get() else { return };
        if unprojected {
            fit_to_container(&canvas, session);
        }
    });

    let _ = window_event_listener(ev::resize, move |_| {
        if let Some(canvas) = canvas_ref.get_untracked() {
            fit_to_container(&canvas, session);
        }
    });
}

fn setup_render_effect(canvas_ref: NodeRef<html::Canvas>, session: RwSignal<MapSession>) {
    let (render_requested, set_render_requested) = create_signal(false);

    create_effect(move |_| {
        session.with(|_| ());

        if render_requested.get_untracked() {
            return;
        }
        let Some(window) = web_sys::window() else { return };
        set_render_requested.set(true);

        let callback = Closure::once(move || {
            set_render_requested.set(false);

            let Some(canvas) = canvas_ref.get_untracked() else { return };
            let Some(ctx) = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            else {
                return;
            };

            let frame = session.with_untracked(MapSession::frame);
            let size = (f64::from(canvas.width()), f64::from(canvas.height()));
            renderer::draw_frame(&ctx, &frame, size);
        });

        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        callback.forget();
    });
}

fn cursor_style(state: InteractionState) -> &'static str {
    match state {
        InteractionState::Dragging => "cursor: grabbing",
        InteractionState::Selecting => "cursor: crosshair",
        InteractionState::Hovering => "cursor: pointer",
        InteractionState::Idle | InteractionState::PathDisplay => "cursor: grab",
    }
}

#[component]
#[must_use]
pub fn MapCanvas(
    session: RwSignal<MapSession>,
    /// Called after a new connection was stored in the graph
    on_edge_committed: Callback<()>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    setup_resize(canvas_ref, session);
    setup_render_effect(canvas_ref, session);

    let handle_mouse_down = move |ev: MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else { return };
        let (x, y) = canvas_position(&canvas, ev.client_x(), ev.client_y());
        session.update(|s| s.pointer_down(x, y));
    };

    let handle_mouse_move = move |ev: MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else { return };
        let (x, y) = canvas_position(&canvas, ev.client_x(), ev.client_y());
        session.update(|s| s.pointer_move(x, y));
    };

    let handle_mouse_up = move |_ev: MouseEvent| {
        let outcome = session.try_update(MapSession::pointer_up);
        if let Some(InteractionOutcome::EdgeCommitted { .. }) = outcome {
            on_edge_committed.call(());
        }
    };

    let handle_mouse_leave = move |_ev: MouseEvent| {
        session.update(MapSession::pointer_leave);
    };

    let handle_wheel = move |ev: WheelEvent| {
        ev.prevent_default();
        let Some(canvas) = canvas_ref.get_untracked() else { return };
        let (x, y) = canvas_position(&canvas, ev.client_x(), ev.client_y());
        let delta = ev.delta_y();
        session.update(|s| {
            s.wheel(x, y, delta);
        });
    };

    let style = move || cursor_style(session.with(|s| s.controller.state()));

    view! {
        <div class="map-canvas-container">
            <canvas
                node_ref=canvas_ref
                class="map-canvas"
                on:mousedown=handle_mouse_down
                on:mousemove=handle_mouse_move
                on:mouseup=handle_mouse_up
                on:mouseleave=handle_mouse_leave
                on:wheel=handle_wheel
                on:contextmenu=|ev| ev.prevent_default()
                style=style
            />
        </div>
    }
}
