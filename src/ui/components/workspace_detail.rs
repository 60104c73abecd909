use dioxus::prelude::*;

use crate::domain::format::{format_price, format_working_hours, slugify};
use crate::domain::{amenity_icon, bulk_pass_price, map_search_url, Workspace};

#[component]
pub fn WorkspaceDetailView(
    workspace: Workspace,
    bulk_days: u32,
    map_url_template: String,
    on_book: EventHandler<()>,
) -> Element {
    let locality = workspace.locality();
    let hours = format_working_hours(&workspace.working_hours_start, &workspace.working_hours_end);
    let map_url = map_search_url(&map_url_template, workspace.coordinates())
        .ok()
        .map(String::from);
    let day_price = format_price(workspace.day_pass_price);
    let bulk = bulk_pass_price(
        workspace.day_pass_price,
        &workspace.day_pass_discounts_percentage,
        bulk_days,
    );

    let bulk_line = match bulk {
        Ok(quote) => {
            let price = format_price(quote.price as f64);
            rsx! {
                div {
                    p { class: "muted", "Bulk Pass ({quote.days} days)" }
                    p { class: "price", "{price}" }
                    span { class: "discount-badge", "{quote.discount_label()}" }
                    if !quote.message.is_empty() {
                        p { class: "muted", "{quote.message}" }
                    }
                }
            }
        }
        Err(err) => rsx! {
            p { class: "muted", title: "{err}", "Bulk pass unavailable" }
        },
    };

    rsx! {
        img { class: "detail-hero", src: "{workspace.primary_image()}", alt: "{workspace.name}" }
        div { class: "detail-grid",
            section {
                h1 { "{workspace.name}" }
                p { class: "muted", "{workspace.address}" }
                if !locality.is_empty() {
                    p { class: "muted", "{locality}" }
                }
                if let Some(hours) = hours {
                    p { "🕘 {hours}" }
                }
                if let Some(description) = workspace.description.as_deref() {
                    p { "{description}" }
                }

                h2 { "Amenities" }
                if workspace.amenities.is_empty() {
                    p { class: "muted", "No amenities listed." }
                } else {
                    div { class: "amenity-grid",
                        for label in workspace.amenities.iter() {
                            div { key: "{label}", class: "amenity", id: "amenity-{slugify(label)}",
                                if let Some(icon) = amenity_icon(label) {
                                    span { "{icon}" }
                                }
                                span { "{label}" }
                            }
                        }
                    }
                }

                if !workspace.facilities.is_empty() {
                    h2 { "Facilities" }
                    ul {
                        for facility in workspace.facilities.iter() {
                            li { key: "{facility}", "{facility}" }
                        }
                    }
                }
                if let Some(rules) = workspace.rules.as_deref() {
                    h2 { "House rules" }
                    p { "{rules}" }
                }
                if let Some(contact) = workspace.contact_person_name.as_deref() {
                    p { class: "muted", "Contact: {contact}" }
                }
            }
            aside {
                div { class: "map-panel",
                    p { "Map would be displayed here" }
                    if let Some(url) = map_url {
                        a {
                            class: "btn-secondary",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Open in Maps"
                        }
                    }
                }
                div { class: "price-panel",
                    if workspace.is_day_pass_enabled {
                        p { class: "muted", "Day Pass" }
                        p { class: "price", "{day_price}/day" }
                    } else {
                        p { class: "muted", "Day passes are not offered here right now." }
                    }
                    hr {}
                    {bulk_line}
                    button { class: "btn-primary", onclick: move |_| on_book.call(()), "Book Now" }
                    p { class: "muted", "No credit card required to reserve" }
                }
            }
        }
    }
}
