use std::time::Duration;

use bravonest_core::reveal::stagger;
use bravonest_ui::Card;
use dioxus::prelude::*;

use super::shared::{CtaBanner, Item, ItemGrid, PageHero, TextCardGrid};
use crate::components::{PageSection, RevealBlock};

struct SoftwareSolution {
    icon: &'static str,
    title: &'static str,
    bullets: [&'static str; 3],
    tag: &'static str,
}

const SOFTWARE: [SoftwareSolution; 4] = [
    SoftwareSolution {
        icon: "\u{1F4BB}",
        title: "Web Applications",
        bullets: [
            "Modern React/TypeScript stacks",
            "Responsive and accessible",
            "Cloud-ready deployment",
        ],
        tag: "For Startups",
    },
    SoftwareSolution {
        icon: "\u{2699}\u{FE0F}",
        title: "Internal Tools & Automation",
        bullets: ["Custom workflows", "Process automation", "Admin dashboards"],
        tag: "For SMEs",
    },
    SoftwareSolution {
        icon: "\u{1F50C}",
        title: "API & Integrations",
        bullets: [
            "RESTful and GraphQL APIs",
            "Third-party integrations",
            "Microservices architecture",
        ],
        tag: "Enterprise",
    },
    SoftwareSolution {
        icon: "\u{1F4CA}",
        title: "Data Dashboards",
        bullets: [
            "Real-time analytics",
            "Custom visualizations",
            "Business intelligence",
        ],
        tag: "Data-Driven",
    },
];

static PCB: [Item; 4] = [
    Item::new(
        "\u{1F5C2}\u{FE0F}",
        "PCB Schematic & Layout",
        "Professional PCB design from concept to Gerber files using industry-standard tools.",
    ),
    Item::new(
        "\u{1F527}",
        "Prototyping & Validation",
        "Rapid prototyping, assembly, and functional testing to validate your design.",
    ),
    Item::new(
        "\u{26A1}",
        "Component Selection",
        "Optimal component selection balancing performance, cost, and availability.",
    ),
    Item::new(
        "\u{1F9E0}",
        "Basic Firmware Support",
        "Simple firmware to get your embedded system up and running quickly.",
    ),
];

const PROCESS: [&str; 5] = ["Idea", "Schematic", "Layout", "Prototype", "Testing"];

const PROCESS_STEP: Duration = Duration::from_millis(220);

static USE_CASES: [Item; 6] = [
    Item::new("\u{1F4F6}", "IoT Sensors", "Environmental monitoring device with cloud connectivity"),
    Item::new("\u{1F3E0}", "Smart Home Hub", "Central controller for home automation systems"),
    Item::new("\u{1F3ED}", "Industrial Automation", "Custom PLCs and control panels for manufacturing"),
    Item::new("\u{26A1}", "Power Management", "Battery management systems for renewable energy"),
    Item::new("\u{1F5C4}\u{FE0F}", "Data Logger", "Multi-channel data acquisition for research labs"),
    Item::new("\u{2699}\u{FE0F}", "Educational Kits", "Learning platforms for electronics and programming"),
];

#[component]
fn ProcessTimeline() -> Element {
    let last = PROCESS.len() - 1;

    rsx! {
        RevealBlock { class: "process-timeline".to_string(),
            ol { class: "process-steps",
                for (index, step) in PROCESS.iter().enumerate() {
                    {
                        let delay = stagger(index, PROCESS_STEP).as_millis();
                        rsx! {
                            li {
                                key: "{step}",
                                class: "process-step",
                                style: "animation-delay: {delay}ms;",
                                span { class: "process-number", "{index + 1}" }
                                span { class: "process-label", "{step}" }
                                if index < last {
                                    span {
                                        class: "connector-arrow",
                                        "aria-hidden": "true",
                                        style: "animation-delay: {delay}ms;",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Solutions() -> Element {
    rsx! {
        PageHero {
            title: "Solutions That".to_string(),
            highlight: "Scale".to_string(),
            subtitle: "From software to silicon\u{2014}we build integrated solutions for the modern world.".to_string(),
        }
        section { class: "page-section",
            RevealBlock { class: "container narrow centered".to_string(),
                p { class: "lead",
                    "Bravonest is your combined software and hardware solutions partner. Whether you need a web application, an embedded device, or both working together, we deliver end-to-end engineering."
                }
            }
        }
        PageSection {
            title: "Software Solutions".to_string(),
            subtitle: "Modern applications built for performance and scalability".to_string(),
            class: "muted".to_string(),
            div { class: "card-grid cols-4",
                for (index, solution) in SOFTWARE.iter().enumerate() {
                    RevealBlock { key: "{solution.title}", delay_ms: index as u64 * 70,
                        Card { class: "hover-lift".to_string(),
                            div { class: "card-top",
                                div { class: "feature-icon", "aria-hidden": "true", "{solution.icon}" }
                                span { class: "badge", "{solution.tag}" }
                            }
                            h3 { class: "card-title", "{solution.title}" }
                            ul { class: "feature-points",
                                for bullet in solution.bullets {
                                    li { key: "{bullet}", "{bullet}" }
                                }
                            }
                        }
                    }
                }
            }
        }
        PageSection {
            title: "PCB Design & Embedded Systems".to_string(),
            subtitle: "Hardware solutions from schematic to production".to_string(),
            ItemGrid { items: &PCB }
            ProcessTimeline {}
        }
        PageSection {
            title: "Use Cases".to_string(),
            subtitle: "Real-world applications we've built".to_string(),
            class: "muted".to_string(),
            TextCardGrid { items: &USE_CASES }
        }
        CtaBanner {
            title: "Ready to Start Your Next Build?".to_string(),
            body: "Let's discuss your software or hardware project and create a solution that works.".to_string(),
            course: false,
        }
    }
}
