use bravonest_ui::Card;
use dioxus::prelude::*;

use super::shared::{CtaBanner, Item, ItemGrid, PageHero};
use crate::components::{PageSection, RevealBlock};

const STORY: [&str; 3] = [
    "Bravonest started with a simple observation: the best engineers are those who never stop learning, and the best learning happens through building real things.",
    "We've combined our expertise in software development and PCB design with a commitment to education. Whether we're building a custom IoT device for a client or teaching students the fundamentals of embedded systems, we apply the same rigorous, hands-on approach.",
    "Today, we serve startups, SMEs, educational institutions, and aspiring engineers\u{2014}helping them turn ideas into reality and knowledge into capability.",
];

static APPROACH: [Item; 4] = [
    Item::new("\u{1F442}", "Listen", "We start by understanding your goals, constraints, and vision"),
    Item::new("\u{1F4A1}", "Design", "We create solutions that are practical, scalable, and elegant"),
    Item::new("\u{1F527}", "Build & Validate", "Iterative development with testing at every stage"),
    Item::new("\u{1F393}", "Teach & Support", "We document, train, and ensure you can maintain what we build"),
];

static VALUES: [Item; 4] = [
    Item::new("\u{1F6E1}\u{FE0F}", "Clarity", "Clear communication, honest timelines, no hidden complexity"),
    Item::new("\u{1F3AF}", "Reliability", "We deliver what we promise, when we promise it"),
    Item::new("\u{1F393}", "Learning", "Every project is an opportunity to grow\u{2014}for us and our clients"),
    Item::new("\u{2764}\u{FE0F}", "Integrity", "We do the right thing, even when no one is watching"),
];

struct Member {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
}

const TEAM: [Member; 6] = [
    Member {
        name: "Alex Chen",
        role: "Founder & Software Lead",
        bio: "Full-stack engineer with 10+ years building scalable systems",
    },
    Member {
        name: "Sarah Martinez",
        role: "PCB Design Lead",
        bio: "Expert in high-speed PCB design and embedded systems integration",
    },
    Member {
        name: "Jordan Lee",
        role: "Course Director",
        bio: "Educator and engineer passionate about making tech accessible",
    },
    Member {
        name: "Priya Sharma",
        role: "Embedded Systems Engineer",
        bio: "Specializes in IoT and firmware development",
    },
    Member {
        name: "Marcus Thompson",
        role: "Web Development Lead",
        bio: "React and Node.js specialist with startup experience",
    },
    Member {
        name: "Emily Wang",
        role: "Student Success Manager",
        bio: "Ensures every learner achieves their goals",
    },
];

/// First letter of each word, for the avatar badge
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[component]
pub fn About() -> Element {
    rsx! {
        PageHero {
            title: "About".to_string(),
            highlight: "Bravonest".to_string(),
            subtitle: "We bridge the gap between real-world engineering projects and practical education.".to_string(),
        }
        PageSection {
            title: "Our Story".to_string(),
            subtitle: "Born from a passion for building and teaching".to_string(),
            RevealBlock { class: "narrow prose".to_string(),
                for paragraph in STORY {
                    p { "{paragraph}" }
                }
            }
        }
        section { class: "page-section muted",
            div { class: "container card-grid cols-2 narrow",
                RevealBlock {
                    Card {
                        div { class: "feature-icon", "aria-hidden": "true", "\u{1F3AF}" }
                        h3 { class: "card-title", "Our Mission" }
                        p { class: "card-description",
                            "To deliver engineering excellence while empowering the next generation of builders. We create solutions that work and courses that inspire."
                        }
                    }
                }
                RevealBlock { delay_ms: 70,
                    Card {
                        div { class: "feature-icon", "aria-hidden": "true", "\u{1F441}\u{FE0F}" }
                        h3 { class: "card-title", "Our Vision" }
                        p { class: "card-description",
                            "A world where innovative ideas are quickly realized and where practical engineering knowledge is accessible to everyone who wants to learn."
                        }
                    }
                }
            }
        }
        PageSection {
            title: "Our Approach".to_string(),
            subtitle: "How we work with clients and students".to_string(),
            ItemGrid { items: &APPROACH }
        }
        PageSection {
            title: "Our Values".to_string(),
            subtitle: "The principles that guide our work".to_string(),
            class: "muted".to_string(),
            ItemGrid { items: &VALUES }
        }
        PageSection {
            title: "Meet the Bravonest Team".to_string(),
            subtitle: "The engineers and educators behind our work".to_string(),
            div { class: "card-grid cols-3",
                for (index, member) in TEAM.iter().enumerate() {
                    RevealBlock { key: "{member.name}", delay_ms: index as u64 * 70,
                        Card { class: "hover-lift team-card".to_string(),
                            div { class: "avatar", "aria-hidden": "true", "{initials(member.name)}" }
                            h3 { class: "card-title", "{member.name}" }
                            p { class: "team-role", "{member.role}" }
                            p { class: "card-description", "{member.bio}" }
                        }
                    }
                }
            }
        }
        CtaBanner {
            title: "Want to Work With Our Team or Learn From Us?".to_string(),
            body: "We're always excited to take on new projects and welcome new students.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_letters() {
        assert_eq!(initials("Alex Chen"), "AC");
        assert_eq!(initials("  Emily   Wang "), "EW");
        assert_eq!(initials(""), "");
    }
}
