use dioxus::prelude::*;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner", role: "status", aria_label: "Loading" }
    }
}

/// One-line loading, empty or error notice under a section title.
#[component]
pub fn StatusLine(message: String, #[props(default)] error: bool) -> Element {
    let class = if error { "status-line error" } else { "status-line" };
    rsx! {
        p { class: "{class}", "{message}" }
    }
}
