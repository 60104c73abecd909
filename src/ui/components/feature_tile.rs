use dioxus::prelude::*;

#[component]
pub fn FeatureTile(icon: &'static str, title: &'static str) -> Element {
    rsx! {
        div { class: "feature",
            span { class: "feature-icon", "{icon}" }
            h3 { "{title}" }
        }
    }
}
