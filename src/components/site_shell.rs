//! Page chrome around every route: header, drawer, footer and the
//! site-wide overlays (cursor, toasts, route scrolling).

use bravonest_core::Theme;
use bravonest_ui::{IconButton, ToastViewport};
use chrono::Datelike;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CustomCursor, DarkModeToggle, MobileDrawer, NavLink, RouteScroll, SiteLink};
use crate::context::{use_theme, use_toasts};

const LOGO_SRC: &str = "/bravonest.png";

/// Root class: theme plus the native-cursor override while the overlay runs
fn shell_class(theme: Theme, cursor_active: bool) -> String {
    if cursor_active {
        format!("{} custom-cursor", theme.root_class())
    } else {
        theme.root_class().to_string()
    }
}

#[component]
fn Logo() -> Element {
    let mut failed = use_signal(|| false);

    rsx! {
        SiteLink {
            to: "/".to_string(),
            class: if failed() { "logo logo-fallback".to_string() } else { "logo".to_string() },
            img {
                src: LOGO_SRC,
                alt: "Bravonest",
                class: "logo-img",
                hidden: failed(),
                onerror: move |_| {
                    tracing::debug!("Logo image failed to load");
                    failed.set(true);
                },
            }
            span { class: "logo-text", "Bravonest" }
        }
    }
}

#[component]
fn SiteFooter() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-grid",
                div { class: "footer-brand",
                    span { class: "logo-text", "Bravonest" }
                    p { "Engineering excellence meets practical education. Building software, PCB designs, and future engineers." }
                }
                div { class: "footer-column",
                    h4 { "Services" }
                    SiteLink { to: "/solutions".to_string(), "Software Solutions" }
                    SiteLink { to: "/solutions".to_string(), "PCB Design" }
                    SiteLink { to: "/learn".to_string(), "Courses" }
                }
                div { class: "footer-column",
                    h4 { "Company" }
                    SiteLink { to: "/about".to_string(), "About Us" }
                    SiteLink { to: "/contact".to_string(), "Contact" }
                }
                div { class: "footer-column",
                    h4 { "Contact" }
                    a { href: "mailto:hello@bravonest.com", "hello@bravonest.com" }
                    a { href: "tel:+15551234567", "+1 (555) 123-4567" }
                    span { "San Francisco, CA" }
                }
            }
            p { class: "footer-copyright", "\u{00A9} {year} Bravonest. All rights reserved." }
        }
    }
}

/// Layout shared by every route
#[component]
pub fn SiteShell() -> Element {
    let theme = use_theme();
    let mut toasts = use_toasts();
    let current = use_route::<Route>().to_string();
    let mut drawer_open = use_signal(|| false);
    let cursor_active = use_signal(|| false);

    // History navigation bypasses the drawer links, so close it here too
    use_effect(use_reactive((&current,), move |_| {
        if *drawer_open.peek() {
            drawer_open.set(false);
        }
    }));

    let root_class = shell_class(theme(), cursor_active());
    let visible_toasts = toasts.queue().read().toasts().to_vec();

    rsx! {
        div { class: "{root_class}",
            header { class: "site-header",
                div { class: "container header-inner",
                    Logo {}
                    nav { class: "desktop-nav", "aria-label": "Primary",
                        for link in NavLink::ALL {
                            SiteLink {
                                key: "{link.path()}",
                                to: link.path().to_string(),
                                class: link.class(&current).to_string(),
                                "{link.label()}"
                            }
                        }
                    }
                    div { class: "header-actions",
                        DarkModeToggle {}
                        IconButton {
                            onclick: move |_| drawer_open.set(true),
                            aria_label: "Open menu".to_string(),
                            class: "menu-btn".to_string(),
                            "\u{2630}"
                        }
                    }
                }
            }
            MobileDrawer { open: drawer_open }
            main { class: "site-main", Outlet::<Route> {} }
            SiteFooter {}
            RouteScroll {}
            CustomCursor { active: cursor_active }
            ToastViewport {
                toasts: visible_toasts,
                on_dismiss: move |id| toasts.dismiss(id),
            }
        }
    }
}
