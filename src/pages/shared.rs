//! Building blocks shared by the content pages

use bravonest_ui::{Card, CtaVariant};
use dioxus::prelude::*;

use crate::components::{CtaLink, RevealBlock, TiltCard};

/// Icon, title and blurb row of a content table
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Item {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl Item {
    pub const fn new(icon: &'static str, title: &'static str, description: &'static str) -> Self {
        Self {
            icon,
            title,
            description,
        }
    }
}

/// Page banner with a highlighted tail on the title
#[component]
pub fn PageHero(
    title: String,
    highlight: String,
    subtitle: String,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        section { class: "page-hero",
            div { class: "container page-hero-inner",
                h1 { class: "page-hero-title",
                    "{title} "
                    span { class: "text-gradient", "{highlight}" }
                }
                p { class: "page-hero-subtitle", "{subtitle}" }
                {children}
            }
        }
    }
}

/// Tilting cards, one per item, staggered by `stagger_ms`
#[component]
pub fn ItemGrid(
    items: &'static [Item],
    #[props(default = 4)] columns: u8,
    #[props(default = 70)] stagger_ms: u64,
) -> Element {
    rsx! {
        div { class: "card-grid cols-{columns}",
            for (index, item) in items.iter().enumerate() {
                TiltCard {
                    key: "{item.title}",
                    icon: item.icon.to_string(),
                    title: item.title.to_string(),
                    description: item.description.to_string(),
                    delay_ms: index as u64 * stagger_ms,
                }
            }
        }
    }
}

/// Plain cards without icons (featured solutions, use cases)
#[component]
pub fn TextCardGrid(items: &'static [Item], #[props(default = 3)] columns: u8) -> Element {
    rsx! {
        div { class: "card-grid cols-{columns}",
            for (index, item) in items.iter().enumerate() {
                RevealBlock { key: "{item.title}", delay_ms: index as u64 * 70,
                    Card { class: "hover-lift".to_string(),
                        if !item.icon.is_empty() {
                            div { class: "feature-icon", "aria-hidden": "true", "{item.icon}" }
                        }
                        h3 { class: "card-title", "{item.title}" }
                        p { class: "card-description", "{item.description}" }
                    }
                }
            }
        }
    }
}

/// Closing call to action. The course link is only shown when `course` is set.
#[component]
pub fn CtaBanner(title: String, body: String, #[props(default = true)] course: bool) -> Element {
    rsx! {
        section { class: "page-section cta-banner",
            RevealBlock { class: "container narrow centered".to_string(),
                h2 { class: "section-title", "{title}" }
                p { class: "lead", "{body}" }
                div { class: "cta-row",
                    CtaLink { to: "/contact#project-call".to_string(), "Book a Project Call" }
                    if course {
                        CtaLink {
                            to: "/learn#register".to_string(),
                            variant: CtaVariant::Secondary,
                            "Register for a Course"
                        }
                    }
                }
            }
        }
    }
}
