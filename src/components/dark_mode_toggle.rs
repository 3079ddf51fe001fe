use bravonest_core::theme::toggle_theme;
use dioxus::prelude::*;

use crate::context::use_theme;
use crate::platform::LocalPreferenceStore;

/// Light/dark switch in the header. The choice is saved to `localStorage`
/// when possible; a refused write still switches the current page.
#[component]
pub fn DarkModeToggle() -> Element {
    let mut theme = use_theme();
    let current = theme();

    rsx! {
        button {
            class: "icon-btn theme-toggle",
            r#type: "button",
            title: current.toggle_title(),
            "aria-pressed": if current.is_dark() { "true" } else { "false" },
            onclick: move |_| {
                let next = toggle_theme(&mut LocalPreferenceStore, theme());
                theme.set(next);
            },
            span { "aria-hidden": "true",
                if current.is_dark() { "\u{2600}\u{FE0F}" } else { "\u{1F319}" }
            }
            span { class: "sr-only", "Toggle dark mode" }
        }
    }
}
