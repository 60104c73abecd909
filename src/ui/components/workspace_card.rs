use dioxus::prelude::*;
use tokio_util::sync::CancellationToken;

use crate::app::{AppServices, ListingStore, Route};
use crate::domain::format::{format_price, truncate_text};
use crate::domain::{CardView, DistanceState};
use crate::infra::geolocation::locate_distance;

const ADDRESS_CHARS: usize = 32;

/// Listing card. Owns its own position request, which is cancelled when the
/// card unmounts.
#[component]
pub fn WorkspaceCard(card: CardView) -> Element {
    let services = use_context::<AppServices>();
    let store = use_context::<ListingStore>();
    let nav = use_navigator();

    let cancel = use_hook(CancellationToken::new);
    use_drop({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let target = card.coordinates;
    let distance = use_resource({
        let geolocator = services.geolocator.clone();
        let timeout = services.config.geolocation.timeout();
        move || {
            let geolocator = geolocator.clone();
            let cancel = cancel.clone();
            async move { locate_distance(geolocator.as_ref(), target, timeout, &cancel).await }
        }
    });
    let distance_label = distance
        .cloned()
        .unwrap_or(DistanceState::Pending)
        .label();

    let id = card.id.clone();
    let open_detail = move |_: MouseEvent| {
        let selected = store.state().read().find(&id).cloned();
        store.set_selected(selected);
        nav.push(Route::WorkspaceDetail { id: id.clone() });
    };

    let address = truncate_text(&card.short_address, ADDRESS_CHARS);
    let day_price = format_price(card.day_price);

    let bulk_tile = match &card.bulk {
        Ok(quote) => {
            let price = format_price(quote.price as f64);
            rsx! {
                div { class: "pass bulk",
                    div { class: "pass-label",
                        "Bulk Pass"
                        span { class: "discount-badge", "{quote.discount_label()}" }
                    }
                    div {
                        span { class: "pass-price", "{price}" }
                        span { class: "pass-unit", "/ {quote.days} days" }
                    }
                }
            }
        }
        Err(err) => rsx! {
            div { class: "pass unavailable", title: "{err}",
                div { class: "pass-label", "Bulk Pass" }
                div { "Bulk pass unavailable" }
            }
        },
    };

    rsx! {
        article { class: "workspace-card", onclick: open_detail,
            div { class: "card-top",
                h4 { "{card.name}" }
                if let Some(url) = card.map_url.clone() {
                    a {
                        class: "distance",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        title: "Get directions",
                        onclick: move |evt: MouseEvent| evt.stop_propagation(),
                        "🧭 {distance_label}"
                    }
                } else {
                    span { class: "distance", "{distance_label}" }
                }
            }
            div { class: "card-media",
                img { src: "{card.image}", alt: "{card.name}" }
                span { class: "location-chip", "📍 {address}" }
            }
            div { class: "pass-row",
                div { class: "pass",
                    div { class: "pass-label", "Day Pass" }
                    div {
                        span { class: "pass-price", "{day_price}" }
                        span { class: "pass-unit", "/ Day" }
                    }
                }
                {bulk_tile}
            }
        }
    }
}
