//! Routed pages.

pub mod blog;
pub mod home;
pub mod projects;
