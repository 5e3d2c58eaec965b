//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own storage access and upstream calls so route handlers
//! can stay focused on protocol translation and auth plumbing.

pub mod content;
pub mod documents;
pub mod github;
pub mod timestamp;
pub mod translate;
