use std::time::Duration;

use bravonest_ui::SectionHeader;
use dioxus::prelude::*;

use crate::config::site_config;
use crate::hooks::use_scroll_reveal;

/// Content section with a header that reveals on scroll
#[component]
pub fn PageSection(
    title: String,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] eyebrow: Option<String>,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let mut reveal = use_scroll_reveal(site_config().effects.reveal_threshold, Duration::ZERO);
    let class = match class {
        Some(extra) => format!("page-section {}", extra),
        None => "page-section".to_string(),
    };

    rsx! {
        section { id, class: "{class}",
            div { class: "container",
                SectionHeader {
                    title,
                    subtitle,
                    eyebrow,
                    visible: reveal.is_visible(),
                    delay_ms: reveal.delay_ms(),
                    onmounted: move |evt| reveal.mounted(evt),
                }
                {children}
            }
        }
    }
}

/// Block that fades up once scrolled into view
#[component]
pub fn RevealBlock(
    #[props(default)] class: Option<String>,
    #[props(default)] delay_ms: u64,
    children: Element,
) -> Element {
    let mut reveal = use_scroll_reveal(
        site_config().effects.reveal_threshold,
        Duration::from_millis(delay_ms),
    );
    let class = match class {
        Some(extra) => format!("{} {}", reveal.class(), extra),
        None => reveal.class(),
    };

    rsx! {
        div {
            class: "{class}",
            style: "{reveal.style()}",
            onmounted: move |evt| reveal.mounted(evt),
            {children}
        }
    }
}
