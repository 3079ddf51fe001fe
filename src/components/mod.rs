//! Site components.
//!
//! Interactive pieces that need the router, the shared contexts or the
//! browser. Purely presentational building blocks live in `bravonest-ui`.

mod cta_link;
mod custom_cursor;
mod dark_mode_toggle;
mod enquiry_forms;
mod hero;
mod mobile_drawer;
mod nav_link;
mod page_section;
mod route_scroll;
mod site_link;
mod site_shell;
mod tilt_card;

pub use cta_link::CtaLink;
pub use custom_cursor::CustomCursor;
pub use dark_mode_toggle::DarkModeToggle;
pub use enquiry_forms::{CourseEnquiryForm, CourseFormKind, ProjectEnquiryForm};
pub use hero::Hero;
pub use mobile_drawer::MobileDrawer;
pub use nav_link::NavLink;
pub use page_section::{PageSection, RevealBlock};
pub use route_scroll::RouteScroll;
pub use site_link::SiteLink;
pub use site_shell::SiteShell;
pub use tilt_card::TiltCard;
