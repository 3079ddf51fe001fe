//! Routed pages. Copy lives in `const` tables at the top of each file.

mod about;
mod contact;
mod home;
mod learn;
mod not_found;
mod shared;
mod solutions;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use learn::Learn;
pub use not_found::NotFound;
pub use solutions::Solutions;
