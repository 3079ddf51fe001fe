use bravonest_ui::CtaVariant;
use dioxus::prelude::*;

use crate::components::SiteLink;

/// Call-to-action styled site link
#[component]
pub fn CtaLink(
    to: String,
    #[props(default)] variant: CtaVariant,
    children: Element,
) -> Element {
    rsx! {
        SiteLink { to, class: variant.class().to_string(), {children} }
    }
}
