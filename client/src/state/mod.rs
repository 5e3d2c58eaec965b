//! Client state shared through Leptos context.

pub mod content;
pub mod preferences;
