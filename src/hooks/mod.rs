//! Hooks that drive the core interaction state from the browser

mod use_scroll_reveal;
mod use_tilt;
mod use_typewriter;

pub use use_scroll_reveal::{use_scroll_reveal, Reveal};
pub use use_tilt::{use_tilt, Tilt};
pub use use_typewriter::{use_typewriter, TypewriterHandle};
