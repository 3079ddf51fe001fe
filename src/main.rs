#![allow(non_snake_case)]

mod app;
mod components;
mod config;
pub mod context;
mod hooks;
mod pages;
mod platform;
mod theme;

use tracing::Level;

fn main() {
    // Fails only if a subscriber is already installed (hot reload)
    if dioxus::logger::init(Level::INFO).is_err() {
        tracing::debug!("Logger already initialised");
    }

    let config = config::site_config();
    tracing::info!(
        "Starting {} site, relays configured: {:?}",
        config.contact.site_name,
        config.configured_relays()
    );

    dioxus::launch(app::App);
}
