#![forbid(unsafe_code)]

//! Example profile form built on fform.

pub mod app;
pub mod prefs;
pub mod profile;
pub mod session;

pub use app::ProfileApp;
pub use prefs::{Language, Preferences, Theme};
pub use profile::{ProfileValues, validate_profile};
