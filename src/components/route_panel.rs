use leptos::{component, view, For, IntoView, RwSignal, Show, SignalWith};

use crate::interaction::{MapSession, RouteView};

fn format_distance(distance: f64, route: &RouteView) -> String {
    format!("{distance:.2} {}", route.unit.suffix())
}

/// Stops and distances of the last route query
#[component]
#[must_use]
pub fn RoutePanel(session: RwSignal<MapSession>) -> impl IntoView {
    let route = move || session.with(MapSession::route_view);

    view! {
        <Show when=move || route().is_some()>
            {move || route().map(|route| {
                let title = format!("{} to {}", route.from, route.to);
                if route.is_found() {
                    let total = format_distance(route.total_distance, &route);
                    let hops: Vec<(usize, String, String)> = route
                        .hops()
                        .enumerate()
                        .map(|(i, stop)| (i, stop.name.clone(), format_distance(stop.distance_from_previous, &route)))
                        .collect();
                    view! {
                        <div class="route-panel">
                            <h3>{title}</h3>
                            <ol class="route-stops">
                                <li>{route.stops.first().map(|s| s.name.clone())}</li>
                                <For
                                    each=move || hops.clone()
                                    key=|(i, _, _)| *i
                                    children=|(_, name, distance)| view! {
                                        <li>{name}<span class="route-hop">{distance}</span></li>
                                    }
                                />
                            </ol>
                            <div class="route-total">"Total: " {total}</div>
                        </div>
                    }
                } else {
                    view! {
                        <div class="route-panel">
                            <h3>{title}</h3>
                            <p class="route-none">"No route between these stations"</p>
                        </div>
                    }
                }
            })}
        </Show>
    }
}
