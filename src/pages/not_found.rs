use bravonest_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::components::CtaLink;
use crate::platform::go_back;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!("No route for {}", path);

    rsx! {
        section { class: "page-hero not-found",
            div { class: "container page-hero-inner",
                h1 { class: "page-hero-title", "Page not found" }
                p { class: "page-hero-subtitle", "Nothing lives at {path}." }
                div { class: "cta-row",
                    CtaLink { to: "/".to_string(), "Back to Home" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            if let Err(e) = go_back() {
                                tracing::debug!("{}", e);
                            }
                        },
                        "Go Back"
                    }
                }
            }
        }
    }
}
