//! Bravonest UI Components
//!
//! Presentational Dioxus components shared by every page of the site.
//! They hold no routing or browser state of their own: values come in as
//! props and user actions leave through `EventHandler`s.
//!
//! ## Visual Language
//!
//! - **Primary (#2563eb)**: calls to action, focus rings, links
//! - **Accent gradient**: headline highlights and feature icons
//! - **Surface / muted**: cards and secondary copy, swapped by the `dark`
//!   class on the site root

pub mod components;

pub use components::*;
