//! Internal link that remembers its fragment.
//!
//! The router navigates by route only, so the `#anchor` part of `to` and a
//! fresh click key are written to the navigation request before the router
//! takes over. Hrefs that are not site routes (`mailto:`, `tel:`) render as
//! plain anchors.

use bravonest_core::Navigation;
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_nav_request;

#[derive(Props, Clone, PartialEq)]
pub struct SiteLinkProps {
    /// Path with optional fragment, e.g. `/learn#register`
    pub to: String,
    #[props(default)]
    pub class: Option<String>,
    /// Extra click handler (closing the drawer)
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    pub children: Element,
}

#[component]
pub fn SiteLink(props: SiteLinkProps) -> Element {
    let mut nav = use_nav_request();
    let target = Navigation::from_href(&props.to, 0);
    let class = props.class.clone().unwrap_or_default();

    let Ok(route) = target.path.parse::<Route>() else {
        return rsx! {
            a { href: "{props.to}", class: "{class}", {props.children} }
        };
    };

    let onclick = props.onclick;
    rsx! {
        Link {
            to: route,
            class: class,
            onclick: move |_| {
                let next = nav.peek().next(target.path.clone(), target.fragment.clone());
                nav.set(next);
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
