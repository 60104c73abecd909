use dioxus::prelude::*;

use crate::app::{AppServices, ListingStore, Route};
use crate::domain::DetailStep;
use crate::ui::components::{Spinner, StatusLine, WorkspaceDetailView};

/// Detail route. Works for both in-app navigation (selection already set by
/// the card) and deep links, where the list may not be loaded yet.
#[component]
pub fn WorkspaceDetailPage(id: String) -> Element {
    let services = use_context::<AppServices>();
    let store = use_context::<ListingStore>();
    let nav = use_navigator();
    let state = store.state();

    use_effect(use_reactive((&id,), {
        let store = store.clone();
        move |(id,)| {
            let step = state.read().detail_step(&id);
            match step {
                DetailStep::Fetch => store.fetch_all(),
                DetailStep::Resolve => {
                    let _ = store.select_by_id(&id);
                }
                _ => {}
            }
        }
    }));

    let step = state.read().detail_step(&id);
    let content = match step {
        DetailStep::Show(workspace) => {
            let booked_id = workspace.id.clone();
            rsx! {
                WorkspaceDetailView {
                    workspace,
                    bulk_days: services.config.bulk_days,
                    map_url_template: services.config.map_url_template.clone(),
                    on_book: move |_| {
                        tracing::info!(workspace = %booked_id, "book now requested");
                    },
                }
            }
        }
        DetailStep::Failed(message) => rsx! { StatusLine { message, error: true } },
        DetailStep::NotFound => rsx! {
            StatusLine { message: "Workspace not found.".to_string() }
        },
        DetailStep::Fetch | DetailStep::Wait | DetailStep::Resolve => rsx! { Spinner {} },
    };

    rsx! {
        button {
            class: "back-button",
            onclick: move |_| {
                if nav.can_go_back() {
                    nav.go_back();
                } else {
                    nav.push(Route::Home {});
                }
            },
            "← Back to workspaces"
        }
        {content}
    }
}
