use std::rc::Rc;

use bravonest_core::theme::resolve_theme;
use bravonest_core::{EmailDispatcher, HttpTransport, NavRequest};
use bravonest_ui::ToastQueue;
use dioxus::prelude::*;

use crate::components::SiteShell;
use crate::config::site_config;
use crate::context::{SharedDispatcher, Toasts};
use crate::pages::{About, Contact, Home, Learn, NotFound, Solutions};
use crate::platform::{prefers_dark, BrowserMailClient, LocalPreferenceStore};
use crate::theme::{theme_variables, GLOBAL_STYLES};

/// Site routes.
///
/// - `/` - Landing page with the typewriter hero
/// - `/about` - Story, approach and team
/// - `/solutions` - Software and PCB services
/// - `/learn` - Courses, with the registration form at `#register`
/// - `/contact` - Enquiry forms, with the project call card at `#project-call`
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteShell)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/solutions")]
        Solutions {},
        #[route("/learn")]
        Learn {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Navigation the page was loaded with, so a deep link such as
/// `/learn#register` scrolls to its anchor on first render
fn initial_nav_request() -> NavRequest {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return NavRequest::default();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let fragment = location
        .hash()
        .ok()
        .map(|hash| hash.trim_start_matches('#').to_string())
        .filter(|hash| !hash.is_empty());
    NavRequest {
        path,
        fragment,
        key: 0,
    }
}

/// Root application component.
///
/// Provides global styles, the enquiry dispatcher, theme, navigation and
/// toast contexts, and routing.
#[component]
pub fn App() -> Element {
    let config = site_config();

    use_context_provider(|| -> SharedDispatcher {
        let dispatcher = EmailDispatcher::from_config(
            config,
            Rc::new(HttpTransport::new()),
            Rc::new(BrowserMailClient),
        );
        tracing::info!("Enquiry chain: {:?}", dispatcher.chain());
        Rc::new(dispatcher)
    });
    use_context_provider(|| Signal::new(resolve_theme(&LocalPreferenceStore, prefers_dark())));
    use_context_provider(|| Signal::new(initial_nav_request()));
    use_context_provider(|| Toasts::new(Signal::new(ToastQueue::new())));

    rsx! {
        style { {theme_variables()} }
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
