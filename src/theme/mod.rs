//! Site styling: static rules plus per-theme colour variables

mod colors;
mod styles;

pub use colors::theme_variables;
pub use styles::GLOBAL_STYLES;
