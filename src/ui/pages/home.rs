use dioxus::prelude::*;

use crate::app::{AppServices, ListingStore};
use crate::domain::{build_card_views, FetchStatus};
use crate::ui::components::{FeatureTile, StatusLine, WorkspaceCard};

const FEATURES: [(&str, &str); 8] = [
    ("🎉", "Community Events"),
    ("🏋️", "Gym Facilities"),
    ("📶", "High-Speed WiFi"),
    ("☕", "Cafe & Tea Bar"),
    ("💰", "Affordable"),
    ("🛋️", "Comfort Lounges"),
    ("⚡", "Quick Booking"),
    ("🏓", "Sports Area"),
];

#[component]
pub fn HomePage() -> Element {
    let services = use_context::<AppServices>();
    let store = use_context::<ListingStore>();
    let state = store.state();

    // Fetch once per mount.
    use_hook({
        let store = store.clone();
        move || store.fetch_all()
    });

    let config = services.config.clone();
    let (busy, listing) = {
        let snapshot = state.read();
        if snapshot.status == FetchStatus::Idle || snapshot.is_loading() {
            (
                true,
                rsx! { StatusLine { message: "Loading workspaces...".to_string() } },
            )
        } else if let Some(message) = snapshot.error() {
            (
                false,
                rsx! { StatusLine { message: message.to_string(), error: true } },
            )
        } else if snapshot.list.is_empty() {
            (
                false,
                rsx! { StatusLine { message: "No workspaces available at the moment.".to_string() } },
            )
        } else {
            let cards = build_card_views(
                &snapshot.list,
                config.display_count,
                config.bulk_days,
                &config.map_url_template,
            );
            (
                false,
                rsx! {
                    div { class: "card-grid",
                        for card in cards {
                            WorkspaceCard { key: "{card.id}", card }
                        }
                    }
                },
            )
        }
    };

    rsx! {
        section { class: "hero",
            h1 {
                "Host your meeting with world-class amenities. Starting at "
                span { class: "accent", "₹199/-" }
            }
        }

        h2 { class: "section-title", "Why Choose us?" }
        div { class: "feature-grid",
            for (icon, title) in FEATURES {
                FeatureTile { key: "{title}", icon, title }
            }
        }

        div { class: "listing-header",
            h2 { class: "section-title", "Our Space Overview" }
            button {
                class: "btn-secondary",
                disabled: busy,
                onclick: move |_| store.fetch_all(),
                "Refresh"
            }
        }
        {listing}
    }
}
