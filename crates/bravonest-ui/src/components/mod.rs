//! Reusable UI components
//!
//! All components render plain semantic HTML with BEM-ish class names that
//! the site stylesheet targets. Light and dark appearance both come from CSS
//! variables, so nothing here depends on the active theme.

mod button;
mod card;
mod input;
mod interactive_button;
mod scrolling_reel;
mod section_header;
mod tabs;
mod toast;

pub use button::*;
pub use card::*;
pub use input::*;
pub use interactive_button::*;
pub use scrolling_reel::*;
pub use section_header::*;
pub use tabs::*;
pub use toast::*;
