//! Custom pointer overlay: a dot on the pointer and an outline that eases
//! after it.
//!
//! Skipped entirely on devices without hover. All document listeners and
//! the animation frame live in one [`CursorView`] that is torn down when
//! the component unmounts. The frame loop stops while the pointer is
//! outside the document.

use std::cell::RefCell;
use std::rc::Rc;

use bravonest_core::cursor::{is_interactive_target, CURSOR_MARKER};
use bravonest_core::CursorFollower;
use dioxus::prelude::*;
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::config::site_config;
use crate::platform::{document, supports_hover};

/// Elements that count as interactive for the hover state
fn interactive_selector() -> String {
    format!("a, button, [{}]", CURSOR_MARKER)
}

fn layer_class(base: &str, follower: &CursorFollower) -> String {
    let mut class = String::from(base);
    if !follower.is_visible() {
        class.push_str(" hidden");
    }
    if follower.is_hovering() {
        class.push_str(" hovering");
    }
    class
}

struct CursorView {
    follower: RefCell<CursorFollower>,
    dot: Element,
    outline: Element,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl CursorView {
    fn new(dot: Element, outline: Element, ease: f64) -> Rc<Self> {
        Rc::new(Self {
            follower: RefCell::new(CursorFollower::new(ease)),
            dot,
            outline,
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        })
    }

    fn render(&self) {
        let mut follower = self.follower.borrow_mut();
        let frame = follower.frame();
        let layers = [
            (&self.dot, "cursor-dot", frame.dot_transform()),
            (&self.outline, "cursor-outline", frame.outline_transform()),
        ];
        for (element, base, transform) in layers {
            let _ = element.set_attribute("class", &layer_class(base, &follower));
            let _ = element.set_attribute("style", &format!("transform: {};", transform));
        }
    }

    fn ensure_frame(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let view = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            view.frame.borrow_mut().take();
            view.render();
            if view.follower.borrow().is_visible() {
                view.ensure_frame();
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn install_listeners(self: &Rc<Self>) {
        let Some(doc) = document() else {
            return;
        };
        let mut listeners = Vec::new();

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&doc, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            view.follower
                .borrow_mut()
                .pointer_moved(event.client_x() as f64, event.client_y() as f64);
            view.ensure_frame();
        }));

        let view = Rc::clone(self);
        let selector = interactive_selector();
        listeners.push(EventListener::new(&doc, "mouseover", move |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let hovering = match target.closest(&selector) {
                Ok(Some(found)) => {
                    is_interactive_target(&found.tag_name(), found.has_attribute(CURSOR_MARKER))
                }
                _ => false,
            };
            view.follower.borrow_mut().set_hovering(hovering);
        }));

        if let Some(root) = doc.document_element() {
            let view = Rc::clone(self);
            listeners.push(EventListener::new(&root, "mouseenter", move |_| {
                view.follower.borrow_mut().pointer_entered();
                view.ensure_frame();
            }));

            let view = Rc::clone(self);
            listeners.push(EventListener::new(&root, "mouseleave", move |_| {
                view.follower.borrow_mut().pointer_left();
                view.ensure_frame();
            }));
        }

        *self.listeners.borrow_mut() = listeners;
    }

    /// Drop every listener and the pending frame (both hold `Rc`s to the view)
    fn teardown(&self) {
        self.listeners.borrow_mut().clear();
        self.frame.borrow_mut().take();
    }
}

/// Renders the overlay and reports through `active` whether it is running,
/// so the shell can hide the native cursor only while it is.
#[component]
pub fn CustomCursor(active: Signal<bool>) -> dioxus::prelude::Element {
    let mut active = active;
    let mut dot = use_signal(|| None::<Element>);
    let mut outline = use_signal(|| None::<Element>);
    let mut view = use_signal(|| None::<Rc<CursorView>>);

    use_effect(move || {
        let (Some(dot), Some(outline)) = (dot(), outline()) else {
            return;
        };
        if view.peek().is_some() || !supports_hover() {
            return;
        }
        let cursor = CursorView::new(dot, outline, site_config().effects.cursor_ease);
        cursor.install_listeners();
        cursor.render();
        view.set(Some(cursor));
        active.set(true);
        tracing::debug!("Custom cursor enabled");
    });

    use_drop(move || {
        if let Some(cursor) = view.write().take() {
            cursor.teardown();
        }
        // The shell may already be gone when the whole app unmounts
        if let Ok(mut active) = active.try_write() {
            *active = false;
        }
    });

    rsx! {
        div {
            class: "cursor-dot hidden",
            "aria-hidden": "true",
            onmounted: move |evt| {
                if let Some(element) = evt.downcast::<Element>() {
                    dot.set(Some(element.clone()));
                }
            },
        }
        div {
            class: "cursor-outline hidden",
            "aria-hidden": "true",
            onmounted: move |evt| {
                if let Some(element) = evt.downcast::<Element>() {
                    outline.set(Some(element.clone()));
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_includes_marker() {
        assert_eq!(interactive_selector(), "a, button, [data-cursor]");
    }

    #[test]
    fn layer_class_tracks_state() {
        let mut follower = CursorFollower::default();
        assert_eq!(layer_class("cursor-dot", &follower), "cursor-dot hidden");
        follower.pointer_moved(10.0, 10.0);
        follower.set_hovering(true);
        assert_eq!(layer_class("cursor-outline", &follower), "cursor-outline hovering");
    }
}
