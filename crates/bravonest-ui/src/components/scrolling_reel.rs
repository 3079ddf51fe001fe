//! Scrolling Reel
//!
//! Marquee of taglines. The text is rendered twice in one track so the CSS
//! animation can translate by half the track width and loop seamlessly.

use dioxus::prelude::*;

pub const REEL_SEPARATOR: &str = " \u{2014} ";

/// Default loop duration in seconds
pub const DEFAULT_REEL_SECONDS: u32 = 20;

/// One pass of the reel text, with a trailing separator so the copies join
pub fn reel_text(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    format!("{}{}", items.join(REEL_SEPARATOR), REEL_SEPARATOR)
}

#[derive(Clone, PartialEq, Props)]
pub struct ScrollingReelProps {
    pub items: Vec<String>,
    /// Seconds for one full loop
    #[props(default = DEFAULT_REEL_SECONDS)]
    pub speed_secs: u32,
}

#[component]
pub fn ScrollingReel(props: ScrollingReelProps) -> Element {
    let text = reel_text(&props.items);
    if text.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "reel", "aria-label": "{text}",
            div {
                class: "reel-track",
                style: "animation-duration: {props.speed_secs}s;",
                "aria-hidden": "true",
                span { class: "reel-item", "{text}" }
                span { class: "reel-item", "{text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reel_text_joins_with_separator() {
        let items = vec!["Design".to_string(), "Build".to_string()];
        assert_eq!(reel_text(&items), "Design \u{2014} Build \u{2014} ");
        assert_eq!(reel_text(&[]), "");
    }
}
