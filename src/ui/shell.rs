use dioxus::prelude::*;

use crate::app::Route;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let version = version_label();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                div { class: "container",
                    Link { class: "brand", to: Route::Home {},
                        span { class: "brand-mark", "🐝" }
                        span { "BHive Workspace" }
                    }
                }
            }
            main { class: "container",
                {children}
            }
            footer { class: "app-footer",
                div { class: "container",
                    h2 { "Download our app now" }
                    p { class: "muted",
                        "Boost your productivity with the BHIVE Workspace app. "
                        "Elevate your workspace, collaborate efficiently, and unlock exclusive perks."
                    }
                    p { class: "version", "{APP_NAME} {version}" }
                }
            }
        }
    }
}
