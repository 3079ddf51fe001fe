//! Landing hero: typed headline, subtitle, calls to action and the
//! feature strip.

use std::time::Duration;

use bravonest_core::reveal::stagger;
use bravonest_core::TypewriterOptions;
use bravonest_ui::{CtaVariant, ScrollingReel, DEFAULT_REEL_SECONDS};
use dioxus::prelude::*;

use crate::components::{CtaLink, TiltCard};
use crate::config::site_config;
use crate::hooks::use_typewriter;

/// Plain part of the headline
pub const HEADLINE_LEAD: &str = "Where Ideas Become ";

/// Highlighted part, typed after the lead
pub const HEADLINE_TARGET: &str = "Innovative Solutions...  ";

const FEATURE_STAGGER: Duration = Duration::from_millis(70);

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "\u{1F4BB}",
        title: "Web Apps",
        description: "Modern, scalable web applications.",
    },
    Feature {
        icon: "\u{1F50C}",
        title: "Embedded",
        description: "PCB design and embedded prototypes.",
    },
    Feature {
        icon: "\u{1F393}",
        title: "Courses",
        description: "Hands-on pre-engineering training.",
    },
    Feature {
        icon: "\u{1F4A1}",
        title: "Consulting",
        description: "Product strategy and prototyping.",
    },
];

const TAGLINES: [&str; 3] = [
    "Design \u{00B7} Build \u{00B7} Ship",
    "Web Apps \u{00B7} Embedded \u{00B7} Courses",
    "Prototypes \u{00B7} Education \u{00B7} Consulting",
];

#[component]
pub fn Hero() -> Element {
    let speed = Duration::from_millis(site_config().effects.typing_speed_ms);
    let heading = format!("{}{}", HEADLINE_LEAD, HEADLINE_TARGET);
    let typed = use_typewriter(heading, TypewriterOptions::with_speed(speed));

    let lead_len = HEADLINE_LEAD.chars().count();
    let target_len = HEADLINE_TARGET.chars().count();
    let complete = typed.is_complete();

    rsx! {
        section { id: "page-header", class: "hero",
            div { class: "hero-glow hero-glow-left" }
            div { class: "hero-glow hero-glow-right" }
            div { class: "container hero-inner",
                h1 { class: "hero-title", "aria-label": "{HEADLINE_LEAD}{HEADLINE_TARGET}",
                    span { class: "hero-lead", "{typed.segment(0, lead_len)}" }
                    span { class: "hero-target-line",
                        span { class: "text-gradient", "{typed.segment(lead_len, target_len)}" }
                        span {
                            class: if complete { "typing-caret done" } else { "typing-caret" },
                            "aria-hidden": "true",
                        }
                    }
                }
                p {
                    class: if complete { "hero-subtitle shown" } else { "hero-subtitle" },
                    style: if complete { "transition-delay: 160ms;" } else { "transition-delay: 0ms;" },
                    "Expert software development, PCB design, and hands-on pre-engineering courses \u{2014} bridging innovation with learning."
                }
                div { class: "hero-actions",
                    CtaLink { to: "/contact#project-call".to_string(), "Book a Project Call" }
                    CtaLink {
                        to: "/learn#register".to_string(),
                        variant: CtaVariant::Secondary,
                        "Register for a Course"
                    }
                }
                div { class: "hero-features",
                    for (index, feature) in FEATURES.iter().enumerate() {
                        TiltCard {
                            key: "{feature.title}",
                            icon: feature.icon.to_string(),
                            title: feature.title.to_string(),
                            description: feature.description.to_string(),
                            delay_ms: stagger(index, FEATURE_STAGGER).as_millis() as u64,
                        }
                    }
                }
            }
            ScrollingReel {
                items: TAGLINES.iter().map(|t| t.to_string()).collect::<Vec<_>>(),
                speed_secs: DEFAULT_REEL_SECONDS,
            }
        }
    }
}
