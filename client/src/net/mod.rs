//! Networking: REST helpers for the JSON API.

pub mod api;
