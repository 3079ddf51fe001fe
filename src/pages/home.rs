use bravonest_ui::CtaVariant;
use dioxus::prelude::*;

use super::shared::{CtaBanner, Item, ItemGrid, TextCardGrid};
use crate::components::{CtaLink, Hero, PageSection, RevealBlock};

static PILLARS: [Item; 3] = [
    Item::new(
        "\u{1F4BB}",
        "Software Solutions",
        "Custom web applications, internal tools, dashboards, and API integrations tailored to your business needs.",
    ),
    Item::new(
        "\u{1F50C}",
        "PCB Design & Embedded",
        "From schematic to prototype, we design and validate PCB solutions for IoT, automation, and custom electronics.",
    ),
    Item::new(
        "\u{1F393}",
        "Pre-Engineering Courses",
        "Hands-on courses in electronics, programming, and embedded systems designed for students and early-career engineers.",
    ),
];

static FEATURED: [Item; 6] = [
    Item::new("", "Web Applications", "Scalable, responsive web apps built with modern frameworks"),
    Item::new("", "Internal Tools", "Custom dashboards and automation tools for your team"),
    Item::new("", "Embedded Prototypes", "IoT devices and embedded systems from concept to reality"),
    Item::new("", "Data Dashboards", "Real-time analytics and visualization platforms"),
    Item::new("", "API Integrations", "Seamless connectivity between your systems and services"),
    Item::new("", "PCB Manufacturing Support", "Design for manufacturing and assembly optimization"),
];

static WHY_US: [Item; 4] = [
    Item::new(
        "\u{1F4A1}",
        "Engineering + Education",
        "We don't just build\u{2014}we teach and empower teams with knowledge.",
    ),
    Item::new(
        "\u{1F3AF}",
        "Concept to Prototype",
        "End-to-end development from initial idea to working prototype.",
    ),
    Item::new(
        "\u{1F6E1}\u{FE0F}",
        "Practical & Future-Ready",
        "Solutions built for today's needs and tomorrow's scalability.",
    ),
    Item::new(
        "\u{26A1}",
        "Flexible Engagement",
        "Project-based work or ongoing partnerships\u{2014}we adapt to your needs.",
    ),
];

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        PageSection {
            title: "What We Do".to_string(),
            subtitle: "Three core pillars driving innovation and learning".to_string(),
            class: "muted".to_string(),
            ItemGrid { items: &PILLARS, columns: 3 }
        }
        PageSection {
            title: "Featured Solutions".to_string(),
            subtitle: "Explore our range of technical services".to_string(),
            TextCardGrid { items: &FEATURED }
        }
        section { class: "page-section muted",
            RevealBlock { class: "container narrow centered".to_string(),
                div { class: "highlight-icon", "aria-hidden": "true", "\u{1F393}" }
                h2 { class: "section-title", "Build Your Engineering Foundation" }
                p { class: "lead",
                    "Our pre-engineering courses combine theory with practical projects. Learn electronics, programming, and PCB design from industry professionals."
                }
                CtaLink {
                    to: "/learn#register".to_string(),
                    variant: CtaVariant::Secondary,
                    "Register for a Course"
                }
            }
        }
        PageSection {
            title: "Why Choose Bravonest".to_string(),
            subtitle: "What sets us apart".to_string(),
            ItemGrid { items: &WHY_US }
        }
        CtaBanner {
            title: "Have an Idea or Want to Learn?".to_string(),
            body: "Whether you need a technical solution built or want to develop your engineering skills, we're here to help.".to_string(),
        }
    }
}
