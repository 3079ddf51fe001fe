use std::time::Duration;

use bravonest_core::TiltOptions;
use bravonest_ui::FeatureCard;
use dioxus::prelude::*;

use crate::config::site_config;
use crate::hooks::{use_scroll_reveal, use_tilt};

/// [`FeatureCard`] that fades in when scrolled to and tilts under the pointer
#[component]
pub fn TiltCard(
    icon: String,
    title: String,
    description: String,
    #[props(default)] points: Vec<String>,
    #[props(default)] delay_ms: u64,
) -> Element {
    let effects = &site_config().effects;
    let mut tilt = use_tilt(TiltOptions {
        max_tilt: effects.tilt_max_deg,
        scale: effects.tilt_scale,
    });
    let mut reveal = use_scroll_reveal(effects.reveal_threshold, Duration::from_millis(delay_ms));

    let class = format!("tilt-card {}", reveal.class());
    let style = format!("{} {}", reveal.style(), tilt.style());

    rsx! {
        FeatureCard {
            icon,
            title,
            description,
            points,
            class,
            style,
            onmounted: move |evt: MountedEvent| {
                tilt.mounted(evt.clone());
                reveal.mounted(evt);
            },
            onmouseenter: move |evt| tilt.track(evt),
            onmousemove: move |evt| tilt.track(evt),
            onmouseleave: move |_| tilt.settle(),
        }
    }
}
