//! Bravonest Core Library
//!
//! Platform-independent behaviour behind the Bravonest website.
//!
//! ## Overview
//!
//! The site is a handful of static pages with an interaction layer on top.
//! Each interaction is a small state machine or pure function here, driven
//! from the browser by the web app:
//!
//! - [`typewriter`]: timed character-by-character reveal
//! - [`cursor`]: eased cursor follower
//! - [`tilt`]: pointer-driven 3-D card tilt
//! - [`reveal`]: one-shot scroll reveal latch
//! - [`route_scroll`]: post-navigation scroll target selection
//! - [`focus_trap`]: drawer keyboard focus cycling
//! - [`dispatch`]: enquiry delivery through an ordered strategy chain
//!
//! Supporting modules cover [`enquiry`] validation, [`theme`] preference,
//! [`config`] and [`error`] types.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::rc::Rc;
//! use bravonest_core::{EmailDispatcher, HttpTransport, ProjectForm, SiteConfig};
//!
//! let config = SiteConfig::load("site.toml")?;
//! let dispatcher = EmailDispatcher::from_config(&config, Rc::new(HttpTransport::new()), mail_client);
//!
//! let form = ProjectForm { name: "Grace".into(), /* ... */ ..Default::default() };
//! match dispatcher.submit(&form).await {
//!     Ok(outcome) => println!("sent via {}", outcome.provider()),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod config;
pub mod cursor;
pub mod dispatch;
pub mod enquiry;
pub mod error;
pub mod focus_trap;
pub mod reveal;
pub mod route_scroll;
pub mod theme;
pub mod tilt;
pub mod typewriter;

// Re-exports
pub use config::{ConfigOverrides, EffectsConfig, SiteConfig};
pub use cursor::{CursorFollower, CursorFrame, Point};
pub use dispatch::{
    mailto_url, DeliveryStrategy, DispatchOutcome, EmailDispatcher, HttpTransport, MailClient,
    RelayTransport, SubmitError,
};
pub use enquiry::{
    Course, CourseEnquiry, CourseForm, EnquiryForm, FormPayload, Intent, ProjectEnquiry,
    ProjectForm, ProjectType, ValidationErrors,
};
pub use error::{DispatchError, DispatchResult, SiteError, SiteResult};
pub use focus_trap::{FocusTrap, TrapAction, TrapKey};
pub use reveal::ScrollReveal;
pub use route_scroll::{
    NavRequest, Navigation, RouteScrollCoordinator, ScrollMode, ScrollOutcome, ScrollSurface,
    ScrollTarget,
};
pub use theme::{PreferenceStore, Theme};
pub use tilt::{Rect, TiltOptions, TiltStyle, TiltTransform};
pub use typewriter::{Tick, Typewriter, TypewriterOptions};
