//! Slide-in navigation drawer for narrow screens.
//!
//! While open, a document `keydown` listener keeps Tab inside the panel and
//! closes on Escape. Focus moves to the first link once the panel has slid
//! in and returns to the previously focused element on close.

use bravonest_core::focus_trap::{item_transition_delay, INITIAL_FOCUS_DELAY};
use bravonest_core::{FocusTrap, TrapAction, TrapKey};
use bravonest_ui::CloseButton;
use dioxus::prelude::*;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};

use crate::app::Route;
use crate::components::{NavLink, SiteLink};
use crate::platform::{active_index, document, focus_element, focusable_elements};

fn focus_logged(element: &HtmlElement) {
    if let Err(e) = focus_element(element) {
        tracing::debug!("Drawer focus failed: {}", e);
    }
}

/// The trap cancels the browser's own Tab move, so the listener must not be
/// passive (gloo's `EventListener::new` is)
fn key_listener_options() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}

#[component]
pub fn MobileDrawer(open: Signal<bool>) -> Element {
    let mut open = open;
    let current = use_route::<Route>().to_string();

    let mut panel = use_signal(|| None::<web_sys::Element>);
    let mut trap = use_signal(FocusTrap::<HtmlElement>::new);
    let mut focus_timer = use_signal(|| None::<Timeout>);
    let mut key_listener = use_signal(|| None::<EventListener>);

    use_effect(move || {
        if !open() {
            focus_timer.set(None);
            key_listener.set(None);
            if let Some(previous) = trap.write().close() {
                focus_logged(&previous);
            }
            return;
        }

        let previous = document()
            .and_then(|doc| doc.active_element())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        trap.write().open(previous);

        focus_timer.set(Some(Timeout::new(
            INITIAL_FOCUS_DELAY.as_millis() as u32,
            move || {
                let Some(panel) = panel.peek().clone() else {
                    return;
                };
                let items = focusable_elements(&panel);
                if let Some(first) = trap.peek().initial_focus(items.len()) {
                    focus_logged(&items[first]);
                }
            },
        )));

        let Some(doc) = document() else {
            return;
        };
        key_listener.set(Some(EventListener::new_with_options(
            &doc,
            "keydown",
            key_listener_options(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let Some(panel) = panel.peek().clone() else {
                    return;
                };
                let key = TrapKey::from_key(&event.key(), event.shift_key());
                let items = focusable_elements(&panel);
                let action = trap.peek().on_key(key, active_index(&items), items.len());
                if action.prevents_default() {
                    event.prevent_default();
                }
                match action {
                    TrapAction::Focus(index) => {
                        if let Some(item) = items.get(index) {
                            focus_logged(item);
                        }
                    }
                    TrapAction::Close => open.set(false),
                    TrapAction::Pass => {}
                }
            },
        )));
    });

    let is_open = open();
    let count = NavLink::ALL.len();

    rsx! {
        div {
            class: if is_open { "drawer open" } else { "drawer" },
            "aria-hidden": if is_open { "false" } else { "true" },
            div {
                class: "drawer-backdrop",
                onclick: move |_| open.set(false),
            }
            aside {
                id: "mobile-drawer",
                class: "drawer-panel",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "Menu",
                onmounted: move |evt| {
                    if let Some(element) = evt.downcast::<web_sys::Element>() {
                        panel.set(Some(element.clone()));
                    }
                },
                div { class: "drawer-header",
                    span { class: "drawer-title", "Menu" }
                    CloseButton {
                        onclick: move |_| open.set(false),
                        aria_label: "Close menu".to_string(),
                    }
                }
                nav { class: "drawer-nav",
                    for (index, link) in NavLink::ALL.iter().enumerate() {
                        {
                            let delay = item_transition_delay(index, count, is_open).as_millis();
                            rsx! {
                                div {
                                    key: "{link.path()}",
                                    class: "drawer-item",
                                    style: "transition-delay: {delay}ms;",
                                    SiteLink {
                                        to: link.path().to_string(),
                                        class: link.class(&current).to_string(),
                                        onclick: move |_| open.set(false),
                                        "{link.label()}"
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
