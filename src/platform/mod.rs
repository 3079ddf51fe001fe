//! Browser bindings for the core seams.
//!
//! Everything that touches `window`, `document` or `localStorage` lives here;
//! components and hooks go through these helpers so a missing API degrades
//! to a logged no-op instead of a panic.

mod dom;
mod mail;
mod storage;

pub use dom::{
    active_index, document, element_by_id, focus_element, focusable_elements, go_back,
    media_matches, prefers_dark, supports_hover, WebScrollSurface,
};
pub use mail::BrowserMailClient;
pub use storage::LocalPreferenceStore;
