//! Pointer tilt for cards.
//!
//! The element is captured on mount; each move reads its bounding box and
//! writes the resulting transform into a style signal the card renders.

use bravonest_core::tilt::{settle_style, tracking_style};
use bravonest_core::{Point, Rect, TiltOptions};
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct Tilt {
    element: Signal<Option<web_sys::Element>>,
    style: Signal<String>,
    options: TiltOptions,
}

impl Tilt {
    pub fn mounted(&mut self, evt: MountedEvent) {
        if let Some(element) = evt.downcast::<web_sys::Element>() {
            self.element.set(Some(element.clone()));
        }
    }

    /// Follow the pointer (used for both enter and move)
    pub fn track(&mut self, evt: MouseEvent) {
        let Some(element) = self.element.peek().clone() else {
            return;
        };
        let bounds = element.get_bounding_client_rect();
        let rect = Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height());
        let client = evt.client_coordinates();
        let style = tracking_style(Point::new(client.x, client.y), rect, self.options);
        self.style.set(style.to_style());
    }

    pub fn settle(&mut self) {
        self.style.set(settle_style().to_style());
    }

    pub fn style(&self) -> String {
        self.style.read().clone()
    }
}

pub fn use_tilt(options: TiltOptions) -> Tilt {
    let element = use_signal(|| None);
    let style = use_signal(String::new);
    Tilt {
        element,
        style,
        options,
    }
}
