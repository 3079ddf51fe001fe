use bravonest_ui::{ButtonVariant, Card, CtaVariant};
use dioxus::prelude::*;

use super::shared::{Item, ItemGrid, PageHero};
use crate::components::{
    CourseEnquiryForm, CourseFormKind, CtaLink, PageSection, RevealBlock, SiteLink,
};

struct CourseInfo {
    title: &'static str,
    level: &'static str,
    duration: &'static str,
    points: [&'static str; 3],
}

const COURSES: [CourseInfo; 4] = [
    CourseInfo {
        title: "Foundations of Electronics & Circuits",
        level: "Beginner",
        duration: "4-6 weeks",
        points: [
            "Basic circuit theory and components",
            "Hands-on breadboard projects",
            "Multimeter and oscilloscope fundamentals",
        ],
    },
    CourseInfo {
        title: "Programming Basics for Engineering",
        level: "Beginner",
        duration: "4-5 weeks",
        points: [
            "C and Python fundamentals",
            "Writing clean, maintainable code",
            "Data structures for embedded systems",
        ],
    },
    CourseInfo {
        title: "Introduction to PCB Design",
        level: "Intermediate",
        duration: "6-8 weeks",
        points: [
            "Schematic capture and component selection",
            "PCB layout best practices",
            "Manufacturing considerations",
        ],
    },
    CourseInfo {
        title: "Embedded Systems Starter",
        level: "Intermediate",
        duration: "6-8 weeks",
        points: [
            "Microcontroller basics (Arduino, STM32)",
            "Sensor integration and data acquisition",
            "Communication protocols (I2C, SPI, UART)",
        ],
    },
];

static EXPERIENCE: [Item; 4] = [
    Item::new("\u{1F3AF}", "Project-Based", "Build real devices and systems, not just theory"),
    Item::new("\u{1F465}", "Doubt Support", "Direct access to instructors for questions"),
    Item::new("\u{1F4C4}", "Structured Notes", "Comprehensive materials and reference guides"),
    Item::new("\u{1F4D6}", "Flexible Delivery", "Online, in-person, or hybrid options"),
];

const FAQ: [(&str, &str); 5] = [
    (
        "Who are these courses for?",
        "Our courses are designed for students, early-career engineers, hobbyists, and anyone looking to build practical engineering skills. No prior experience is required for beginner courses.",
    ),
    (
        "What format are the courses?",
        "We offer flexible formats including online live sessions, in-person workshops, and hybrid models. Each course includes hands-on projects and direct instructor support.",
    ),
    (
        "Do I need any equipment?",
        "We provide a list of recommended tools and components for each course. For some courses, starter kits are available for purchase or included in the course fee.",
    ),
    (
        "Can institutions book courses for their students?",
        "Yes! We offer custom course packages for universities, colleges, and training centers. Contact us to discuss curriculum integration and scheduling.",
    ),
    (
        "What happens after I register?",
        "After registering, we'll contact you with the next available batch details, course materials list, and payment information. You'll also receive access to pre-course resources.",
    ),
];

fn level_class(level: &str) -> &'static str {
    if level == "Beginner" {
        "badge"
    } else {
        "badge badge-secondary"
    }
}

#[component]
pub fn Learn() -> Element {
    rsx! {
        PageHero {
            title: "Pre-Engineering Courses with".to_string(),
            highlight: "Real-World Focus".to_string(),
            subtitle: "Build practical skills in electronics, programming, and PCB design from industry professionals.".to_string(),
            CtaLink {
                to: "/learn#register".to_string(),
                variant: CtaVariant::Secondary,
                "Register for a Course"
            }
        }
        PageSection {
            title: "Course Catalogue".to_string(),
            subtitle: "Choose from our range of practical engineering courses".to_string(),
            div { class: "card-grid cols-2",
                for (index, course) in COURSES.iter().enumerate() {
                    RevealBlock { key: "{course.title}", delay_ms: index as u64 * 70,
                        Card { class: "hover-lift course-card".to_string(),
                            div { class: "card-top",
                                span { class: level_class(course.level), "{course.level}" }
                                span { class: "course-duration", "{course.duration}" }
                            }
                            h3 { class: "card-title", "{course.title}" }
                            ul { class: "feature-points checklist",
                                for point in course.points {
                                    li { key: "{point}", "{point}" }
                                }
                            }
                            SiteLink {
                                to: "/learn#register".to_string(),
                                class: format!("{} btn-block", ButtonVariant::Outline.class()),
                                "View Details"
                            }
                        }
                    }
                }
            }
        }
        PageSection {
            title: "Learning Experience".to_string(),
            subtitle: "What makes our courses different".to_string(),
            class: "muted".to_string(),
            ItemGrid { items: &EXPERIENCE }
        }
        PageSection {
            title: "Frequently Asked Questions".to_string(),
            div { class: "faq narrow",
                for (question, answer) in FAQ {
                    details { key: "{question}", class: "faq-item",
                        summary { class: "faq-question", "{question}" }
                        p { class: "faq-answer", "{answer}" }
                    }
                }
            }
        }
        section { id: "register", class: "page-section cta-banner",
            div { class: "container register-grid",
                RevealBlock { class: "register-copy".to_string(),
                    h2 { class: "section-title", "Ready to Start Learning?" }
                    p { class: "lead",
                        "Fill out this form to register your interest. We'll contact you with the next available batch details."
                    }
                }
                Card {
                    h3 { class: "card-title", "Course Registration" }
                    p { class: "card-description", "Tell us about your learning goals" }
                    CourseEnquiryForm { kind: CourseFormKind::Registration }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beginner_courses_use_primary_badge() {
        assert_eq!(level_class("Beginner"), "badge");
        assert_eq!(level_class("Intermediate"), "badge badge-secondary");
    }
}
