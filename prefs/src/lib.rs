//! Language and theme preference handling shared by `server` and `client`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server seeds each render from the request cookies. The browser
//! re-reads cookies plus `localStorage` after hydration and corrects the
//! page at most once. Both sides share the types in this crate so the
//! markup the server emits and the attributes the client writes can never
//! drift apart.
//!
//! ARCHITECTURE
//! ============
//! - `preference`: closed enumerations and defaults.
//! - `channel`: raw key/value storage seams (cookies, memory).
//! - `backend`: precedence-aware reads and best-effort writes.
//! - `store`: the in-memory source of truth with presentation observers.
//! - `presentation`: root element attribute mapping.
//! - `hydration`: the single-shot reconciliation state machine.

pub mod backend;
pub mod channel;
pub mod hydration;
pub mod preference;
pub mod presentation;
pub mod store;

pub use backend::{Backend, Context, PersistenceBackend, Precedence};
pub use channel::{CookieChannel, MemoryChannel, StorageChannel, StorageError};
pub use hydration::{HydrationCoordinator, Phase, Reconciliation};
pub use preference::{Language, ParseError, Preference, StoredPreference, Theme, ThemeMode};
pub use presentation::{DocumentRoot, Presentation};
pub use store::PreferenceStore;

/// Cookie and `localStorage` key for the language axis.
pub const LANGUAGE_KEY: &str = "tuta-lang";

/// Cookie and `localStorage` key for the theme axis.
pub const THEME_KEY: &str = "tuta-theme";

#[cfg(test)]
pub(crate) mod test_support;
