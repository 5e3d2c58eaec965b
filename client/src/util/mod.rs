//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` isolates every `web-sys` call behind the `hydrate` feature so
//! pages, state, and SSR builds never touch browser APIs directly.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod markdown;
