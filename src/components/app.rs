use std::future::Future;

use leptos::logging::{error, warn};
use leptos::{component, create_rw_signal, spawn_local, view, Callback, IntoView, RwSignal, SignalSet, SignalWithUntracked};
use leptos_meta::{provide_meta_context, Stylesheet, Title};

use crate::api::{dataset_url, fetch_dataset};
use crate::components::map_canvas::MapCanvas;
use crate::components::map_toolbar::MapToolbar;
use crate::components::route_panel::RoutePanel;
use crate::constants::DATASET_PATH;
use crate::import::StationDataset;
use crate::interaction::MapSession;
use crate::models::{MapSettings, StationGraph};
use crate::storage::{LocalStorageStore, NetworkStore};

/// Where the app is in bringing up the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Saved network if there is one, otherwise the dataset from `fetch`, which is
/// then saved. A saved network that cannot be read is an error and is left as is.
async fn load_network<S, F, Fut>(store: &S, fetch: F) -> Result<StationDataset, String>
where
    S: NetworkStore,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<StationDataset, String>>,
{
    if let Some(saved) = store.load().map_err(|e| e.to_string())? {
        crate::log!("Restoring saved network");
        return Ok(saved);
    }

    let dataset = fetch().await?;

    if let Err(e) = store.save(&dataset) {
        warn!("Could not save network: {e}");
    }
    Ok(dataset)
}

/// The dataset shipped next to the app
async fn fetch_bundled_dataset() -> Result<StationDataset, String> {
    let origin = web_sys::window()
        .ok_or("No window")?
        .location()
        .origin()
        .map_err(|e| format!("Failed to read page origin: {e:?}"))?;
    fetch_dataset(&dataset_url(&origin, DATASET_PATH)).await
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let settings = MapSettings::default();
    let session: RwSignal<MapSession> = create_rw_signal(MapSession::new(StationGraph::new(), settings.clone()));
    let status = create_rw_signal(LoadStatus::Loading);

    spawn_local(async move {
        match load_network(&LocalStorageStore::default(), fetch_bundled_dataset).await {
            Ok(dataset) => {
                session.set(MapSession::new(dataset.build_graph(), settings));
                status.set(LoadStatus::Ready);
            }
            Err(e) => {
                error!("Failed to load station network: {e}");
                status.set(LoadStatus::Failed(e));
            }
        }
    });

    let on_edge_committed = Callback::new(move |()| {
        let dataset = session.with_untracked(MapSession::to_dataset);
        if let Err(e) = LocalStorageStore::default().save(&dataset) {
            error!("{e}");
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/metro_map.css"/>
        <Title text="Metro Map"/>

        <div class="app">
            <MapToolbar session=session status=status />
            <MapCanvas session=session on_edge_committed=on_edge_committed />
            <RoutePanel session=session />
        </div>
    }
}
