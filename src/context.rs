//! Shared state for the Bravonest site.
//!
//! Provided once by `App` and read through the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! // In a form component
//! let dispatcher = use_dispatcher();
//! let mut toasts = use_toasts();
//!
//! spawn(async move {
//!     match dispatcher.submit(&form).await { /* ... */ }
//! });
//! ```

use std::rc::Rc;

use bravonest_core::{EmailDispatcher, NavRequest, Theme};
use bravonest_ui::{ToastQueue, ToastVariant, TOAST_DURATION};
use dioxus::prelude::*;
use gloo::timers::future::TimeoutFuture;

/// Enquiry dispatcher shared by every form.
///
/// Built once from the site configuration with the browser transport and
/// mail client.
pub type SharedDispatcher = Rc<EmailDispatcher>;

/// Hook to access the enquiry dispatcher
pub fn use_dispatcher() -> SharedDispatcher {
    use_context::<SharedDispatcher>()
}

/// Hook to access the active colour theme
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

/// Most recent link click (path, fragment and click counter).
///
/// [`crate::components::SiteLink`] bumps this just before the router
/// navigates; the route scroll coordinator reads it to find the anchor.
pub fn use_nav_request() -> Signal<NavRequest> {
    use_context::<Signal<NavRequest>>()
}

/// Toast notifications with automatic dismissal
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
}

impl Toasts {
    pub fn new(queue: Signal<ToastQueue>) -> Self {
        Self { queue }
    }

    pub fn show(&mut self, title: &str, description: &str) {
        self.push(title, description, ToastVariant::Default);
    }

    pub fn error(&mut self, title: &str, description: &str) {
        self.push(title, description, ToastVariant::Destructive);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.queue.write().dismiss(id);
    }

    pub fn queue(&self) -> Signal<ToastQueue> {
        self.queue
    }

    fn push(&mut self, title: &str, description: &str, variant: ToastVariant) {
        let id = self.queue.write().push(title, description, variant);
        let mut queue = self.queue;
        // Root scope, so the timer survives the page that raised the toast
        spawn_forever(async move {
            TimeoutFuture::new(TOAST_DURATION.as_millis() as u32).await;
            queue.write().dismiss(id);
        });
    }
}

/// Hook to raise toast notifications
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}
