//! Scroll handling after each navigation.
//!
//! Watches the current route and the latest link request. Each new
//! navigation schedules one scroll after the configured delay; a newer
//! navigation replaces (and so cancels) a scroll that has not fired yet.

use bravonest_core::RouteScrollCoordinator;
use dioxus::prelude::*;
use gloo::timers::callback::Timeout;

use crate::app::Route;
use crate::config::site_config;
use crate::context::use_nav_request;
use crate::platform::WebScrollSurface;

#[component]
pub fn RouteScroll() -> Element {
    let route = use_route::<Route>();
    let request = use_nav_request()();
    let path = route.to_string();
    let delay_ms = site_config().effects.route_scroll_delay_ms as u32;

    let mut coordinator = use_signal(RouteScrollCoordinator::new);
    let mut pending = use_signal(|| None::<Timeout>);

    use_effect(use_reactive((&path, &request), move |(path, request)| {
        let navigation = request.navigation_for(&path);
        let Some(target) = coordinator.write().on_navigate(navigation) else {
            return;
        };
        pending.set(Some(Timeout::new(delay_ms, move || {
            let outcome = RouteScrollCoordinator::apply(&target, &mut WebScrollSurface::new());
            tracing::debug!(?outcome, "Route scroll done");
        })));
    }));

    rsx! {}
}
