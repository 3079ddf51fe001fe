//! Card Components
//!
//! Surfaces for grouped content. `FeatureCard` is the icon/title/blurb tile
//! used by the hero, the home page pillars and the solution lists; callers
//! may pass an inline style, which is how the tilt effect and the staggered
//! reveal reach the card without this crate knowing about either.

use dioxus::prelude::*;

use super::button::class_list;

#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub id: Option<String>,
}

/// Plain bordered surface
#[component]
pub fn Card(props: CardProps) -> Element {
    let full_class = class_list("card", props.class.as_deref());

    rsx! {
        div {
            class: "{full_class}",
            id: props.id.as_deref(),
            {props.children}
        }
    }
}

/// Properties for the FeatureCard component
#[derive(Clone, PartialEq, Props)]
pub struct FeatureCardProps {
    /// Glyph shown in the icon badge
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Optional bullet points under the description
    #[props(default)]
    pub points: Vec<String>,
    #[props(default)]
    pub class: Option<String>,
    /// Inline style (transform, transition-delay)
    #[props(default)]
    pub style: Option<String>,
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
    #[props(default)]
    pub onmouseenter: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub onmousemove: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub onmouseleave: Option<EventHandler<MouseEvent>>,
}

/// Icon, title and blurb tile
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FeatureCard {
///         icon: "⚡".to_string(),
///         title: "PCB Design".to_string(),
///         description: "Schematic capture to manufacturing files.".to_string(),
///     }
/// }
/// ```
#[component]
pub fn FeatureCard(props: FeatureCardProps) -> Element {
    let full_class = class_list("feature-card", props.class.as_deref());
    let FeatureCardProps {
        onmounted,
        onmouseenter,
        onmousemove,
        onmouseleave,
        ..
    } = props.clone();

    rsx! {
        div {
            class: "{full_class}",
            style: props.style.as_deref().unwrap_or(""),
            onmounted: move |evt| {
                if let Some(handler) = &onmounted {
                    handler.call(evt);
                }
            },
            onmouseenter: move |evt| {
                if let Some(handler) = &onmouseenter {
                    handler.call(evt);
                }
            },
            onmousemove: move |evt| {
                if let Some(handler) = &onmousemove {
                    handler.call(evt);
                }
            },
            onmouseleave: move |evt| {
                if let Some(handler) = &onmouseleave {
                    handler.call(evt);
                }
            },
            div { class: "feature-icon", "aria-hidden": "true", "{props.icon}" }
            h3 { class: "feature-title", "{props.title}" }
            p { class: "feature-description", "{props.description}" }
            if !props.points.is_empty() {
                ul { class: "feature-points",
                    for point in props.points.iter() {
                        li { key: "{point}", "{point}" }
                    }
                }
            }
        }
    }
}
