use bravonest_ui::{Card, TabItem, Tabs};
use dioxus::prelude::*;

use super::shared::PageHero;
use crate::components::{
    CourseEnquiryForm, CourseFormKind, PageSection, ProjectEnquiryForm, RevealBlock,
};
use crate::context::use_nav_request;

const PROJECT_TAB: &str = "project";
const COURSE_TAB: &str = "course";

/// Anchor of the project call card
const PROJECT_ANCHOR: &str = "project-call";

struct ContactChannel {
    icon: &'static str,
    title: &'static str,
    lines: [&'static str; 2],
}

const CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        icon: "\u{2709}\u{FE0F}",
        title: "Email",
        lines: ["hello@bravonest.com", "support@bravonest.com"],
    },
    ContactChannel {
        icon: "\u{1F4DE}",
        title: "Phone",
        lines: ["+1 (555) 123-4567", "Mon-Fri, 9AM-6PM PST"],
    },
    ContactChannel {
        icon: "\u{1F4CD}",
        title: "Location",
        lines: ["San Francisco, CA", "United States"],
    },
];

#[component]
pub fn Contact() -> Element {
    let mut tab = use_signal(|| PROJECT_TAB.to_string());
    let nav = use_nav_request();

    // A link to the call card must find it, even from the course tab
    use_effect(move || {
        if nav().fragment.as_deref() == Some(PROJECT_ANCHOR) && *tab.peek() != PROJECT_TAB {
            tab.set(PROJECT_TAB.to_string());
        }
    });

    let selected = tab();

    rsx! {
        PageHero {
            title: "Let's Build or Learn".to_string(),
            highlight: "Together".to_string(),
            subtitle: "Share your project needs or training goals, and we'll help you achieve them.".to_string(),
        }
        section { class: "page-section",
            div { class: "container narrow",
                Tabs {
                    tabs: vec![
                        TabItem::new(PROJECT_TAB, "Project Enquiry"),
                        TabItem::new(COURSE_TAB, "Course Enquiry"),
                    ],
                    selected: selected.clone(),
                    on_select: move |id| tab.set(id),
                    aria_label: "Enquiry type".to_string(),
                }
                if selected == PROJECT_TAB {
                    div { id: "panel-{PROJECT_TAB}", role: "tabpanel", class: "tab-panel",
                        Card { id: PROJECT_ANCHOR.to_string(),
                            h2 { class: "card-title large", "Book a Project Call" }
                            p { class: "card-description",
                                "Share a few details about your software or PCB project and we'll schedule a call."
                            }
                            ProjectEnquiryForm {}
                        }
                    }
                } else {
                    div { id: "panel-{COURSE_TAB}", role: "tabpanel", class: "tab-panel",
                        Card {
                            h2 { class: "card-title large", "Course Enquiry" }
                            p { class: "card-description",
                                "Interested in our courses? Let us know what you'd like to learn."
                            }
                            CourseEnquiryForm { kind: CourseFormKind::Enquiry }
                        }
                    }
                }
            }
        }
        PageSection {
            title: "Contact Information".to_string(),
            subtitle: "Other ways to reach us".to_string(),
            class: "muted".to_string(),
            div { class: "card-grid cols-3",
                for (index, channel) in CHANNELS.iter().enumerate() {
                    RevealBlock { key: "{channel.title}", delay_ms: index as u64 * 70,
                        Card { class: "centered".to_string(),
                            div { class: "feature-icon", "aria-hidden": "true", "{channel.icon}" }
                            h3 { class: "card-title", "{channel.title}" }
                            for line in channel.lines {
                                p { key: "{line}", class: "card-description", "{line}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
