use std::sync::Arc;

use dioxus::{core::spawn_forever, prelude::*, signals::Signal};

use crate::{
    domain::{ListingAction, ListingState, LookupError, Workspace},
    infra::{
        geolocation::{geolocator_for, Geolocator},
        listing_source::{load_listings, HttpListingSource, ListingSource},
    },
    ui::{
        pages::{HomePage, WorkspaceDetailPage},
        shell::Shell,
    },
    util::{
        assets,
        config::{load_config, AppConfig},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/workspace/:id")]
    WorkspaceDetail { id: String },
}

/// Read-only collaborators shared by every view.
#[derive(Clone)]
pub struct AppServices {
    pub config: Arc<AppConfig>,
    pub geolocator: Arc<dyn Geolocator>,
}

impl AppServices {
    pub fn from_config(config: AppConfig) -> Self {
        let geolocator = geolocator_for(&config.geolocation.provider);
        Self {
            config: Arc::new(config),
            geolocator,
        }
    }
}

/// Handle over the listing collection. The signal is the single source of truth;
/// every mutation goes through [`ListingState::reduce`] or `select_by_id`.
#[derive(Clone)]
pub struct ListingStore {
    state: Signal<ListingState>,
    source: Option<Arc<dyn ListingSource>>,
}

impl ListingStore {
    pub fn new(state: Signal<ListingState>, source: Option<Arc<dyn ListingSource>>) -> Self {
        Self { state, source }
    }

    pub fn state(&self) -> Signal<ListingState> {
        self.state
    }

    /// Starts a fetch that outlives the calling view. Concurrent calls race;
    /// whichever response lands last wins.
    pub fn fetch_all(&self) {
        let mut state = self.state;
        let Some(source) = self.source.clone() else {
            state.with_mut(|st| {
                st.reduce(ListingAction::FetchStarted);
                st.reduce(ListingAction::FetchFailed(
                    "Listing source is not configured.".to_string(),
                ));
            });
            return;
        };

        spawn_forever(async move {
            load_listings(source.as_ref(), |action| {
                state.with_mut(|st| st.reduce(action));
            })
            .await;
        });
    }

    pub fn set_selected(&self, workspace: Option<Workspace>) {
        let mut state = self.state;
        state.with_mut(|st| st.reduce(ListingAction::SetSelected(workspace)));
    }

    pub fn select_by_id(&self, id: &str) -> Result<Workspace, LookupError> {
        let mut state = self.state;
        let result = state.with_mut(|st| st.select_by_id(id).cloned());
        if let Err(err) = &result {
            tracing::info!(%id, error = %err, "workspace lookup failed");
        }
        result
    }
}

#[component]
pub fn App() -> Element {
    let services = use_hook(|| AppServices::from_config(load_config()));
    use_context_provider(|| services.clone());

    let state = use_signal(ListingState::default);
    let store = use_hook({
        let config = services.config.clone();
        move || {
            let source = match HttpListingSource::new(&config.listings_url) {
                Ok(source) => {
                    tracing::info!(url = %source.url(), "listing source ready");
                    Some(Arc::new(source) as Arc<dyn ListingSource>)
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to initialise listing source");
                    None
                }
            };
            ListingStore::new(state, source)
        }
    });
    use_context_provider(|| store.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn WorkspaceDetail(id: String) -> Element {
    rsx! { Shell { WorkspaceDetailPage { id } } }
}
