//! Section Header
//!
//! Title and optional subtitle at the top of a page section. The header
//! fades up once it scrolls into view; whoever observes the viewport passes
//! the result in through `visible` and receives the element via `onmounted`.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeaderProps {
    pub title: String,
    #[props(default)]
    pub subtitle: Option<String>,
    /// Small label above the title
    #[props(default)]
    pub eyebrow: Option<String>,
    #[props(default = true)]
    pub centered: bool,
    /// Whether the reveal transition has fired
    #[props(default = false)]
    pub visible: bool,
    /// Transition delay in milliseconds
    #[props(default = 0)]
    pub delay_ms: u64,
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
}

/// Class list for a header in the given state
pub fn section_header_class(centered: bool, visible: bool) -> String {
    let mut class = String::from("section-header reveal");
    if centered {
        class.push_str(" centered");
    }
    if visible {
        class.push_str(" visible");
    }
    class
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    let class = section_header_class(props.centered, props.visible);
    let onmounted = props.onmounted;

    rsx! {
        div {
            class: "{class}",
            style: "transition-delay: {props.delay_ms}ms;",
            onmounted: move |evt| {
                if let Some(handler) = &onmounted {
                    handler.call(evt);
                }
            },
            if let Some(eyebrow) = &props.eyebrow {
                span { class: "section-eyebrow", "{eyebrow}" }
            }
            h2 { class: "section-title", "{props.title}" }
            if let Some(subtitle) = &props.subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_class_reflects_state() {
        assert_eq!(section_header_class(true, false), "section-header reveal centered");
        assert_eq!(section_header_class(false, true), "section-header reveal visible");
    }
}
