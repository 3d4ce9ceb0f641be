//! This crate contains all shared UI for the workspace.

// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

mod head;
pub use head::SiteHead;

mod hero;
pub use hero::Hero;

mod footer;
pub use footer::Footer;

pub mod listing;
