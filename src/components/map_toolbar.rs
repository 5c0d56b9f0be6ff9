use leptos::{component, view, IntoView, RwSignal, SignalGet, SignalUpdate, SignalWith};

use crate::components::app::LoadStatus;
use crate::interaction::MapSession;

#[component]
#[must_use]
pub fn MapToolbar(session: RwSignal<MapSession>, status: RwSignal<LoadStatus>) -> impl IntoView {
    let path_follow = move || session.with(|s| s.controller.path_follow());
    let station_count = move || session.with(|s| s.graph.station_count());
    let connection_count = move || session.with(|s| s.graph.edge_count() / 2);

    let status_text = move || match status.get() {
        LoadStatus::Loading => "Loading stations...".to_string(),
        LoadStatus::Ready => format!("{} stations, {} connections", station_count(), connection_count()),
        LoadStatus::Failed(message) => format!("Could not load the network: {message}"),
    };

    view! {
        <div class="map-toolbar">
            <button
                class=move || if path_follow() { "toolbar-button active" } else { "toolbar-button" }
                title="When on, dragging between two stations shows a route instead of connecting them"
                on:click=move |_| session.update(MapSession::toggle_path_follow)
            >
                {move || if path_follow() { "Route finding: on" } else { "Route finding: off" }}
            </button>
            <span
                class="map-status"
                class:error=move || matches!(status.get(), LoadStatus::Failed(_))
            >
                {status_text}
            </span>
        </div>
    }
}
