//! Fade-in on first scroll into view.
//!
//! Each reveal owns an `IntersectionObserver` on its element. Observations
//! feed the [`ScrollReveal`] latch. The observer disconnects itself once the
//! element is revealed and is dropped with the component.

use std::time::Duration;

use bravonest_core::ScrollReveal;
use dioxus::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct Reveal {
    state: Signal<ScrollReveal>,
    observer: Signal<Option<RevealObserver>>,
}

impl Reveal {
    pub fn is_visible(&self) -> bool {
        self.state.read().is_visible()
    }

    /// `"reveal"` plus `"visible"` once flipped
    pub fn class(&self) -> String {
        let state = self.state.read();
        if state.is_visible() {
            format!("reveal {}", state.class())
        } else {
            "reveal".to_string()
        }
    }

    pub fn style(&self) -> String {
        self.state.read().delay_style()
    }

    pub fn delay_ms(&self) -> u64 {
        self.state.read().delay().as_millis() as u64
    }

    /// Start observing the mounted element
    pub fn mounted(&mut self, evt: MountedEvent) {
        let Some(element) = evt.downcast::<web_sys::Element>() else {
            return;
        };
        if self.state.peek().is_visible() {
            return;
        }

        let mut state = self.state;
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let mut next = *state.peek();
                let mut flipped = false;
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    flipped |= next.observe(entry.is_intersecting(), entry.intersection_ratio());
                }
                if flipped {
                    state.set(next);
                    observer.disconnect();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.state.peek().threshold()));
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(element);
                self.observer.set(Some(RevealObserver {
                    observer,
                    _callback: callback,
                }));
            }
            Err(e) => {
                // Without an observer the content would stay hidden
                tracing::debug!("IntersectionObserver unavailable: {:?}", e);
                self.state.with_mut(|s| {
                    s.observe(true, 1.0);
                });
            }
        }
    }
}

/// Reveal latch with the configured threshold and a stagger `delay`
pub fn use_scroll_reveal(threshold: f64, delay: Duration) -> Reveal {
    let state = use_signal(|| ScrollReveal::new(threshold).with_delay(delay));
    let observer = use_signal(|| None);
    Reveal { state, observer }
}
