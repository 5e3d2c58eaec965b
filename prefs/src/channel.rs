//! Key/value storage channels backing a [`crate::Backend`].
//!
//! A channel is one physical place a preference can live: the request or
//! document cookie, browser `localStorage`, or plain memory in tests. Browser
//! channels are implemented in the `client` crate against `web-sys`; this
//! module holds the portable ones plus the shared cookie attribute policy.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use std::collections::HashMap;

use cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie lifetime for persisted preferences.
pub const COOKIE_MAX_AGE_DAYS: i64 = 365;

/// Failure talking to a storage channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The channel does not exist in this context (disabled, privacy mode, no window).
    #[error("{0} storage unavailable")]
    Unavailable(&'static str),

    /// The channel exists but refused the operation (quota, security error).
    #[error("{channel} storage rejected operation: {reason}")]
    Rejected { channel: &'static str, reason: String },
}

/// A single durable key/value location.
pub trait StorageChannel {
    /// Short label used in diagnostics.
    fn name(&self) -> &'static str;

    /// Read a raw value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the channel cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a raw value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the channel cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<C: StorageChannel + ?Sized> StorageChannel for Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Build the cookie used to persist one preference axis.
///
/// Readable by client script (not HTTP-only), `SameSite=Lax`, one year.
#[must_use]
pub fn persistent_cookie(name: &str, value: &str, secure: bool) -> Cookie<'static> {
    Cookie::build((name.to_owned(), value.to_owned()))
        .path("/")
        .http_only(false)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(COOKIE_MAX_AGE_DAYS))
        .build()
}

/// Find a cookie value in a raw `Cookie` header / `document.cookie` string.
///
/// Malformed pairs are skipped.
#[must_use]
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_owned())
}

// =============================================================================
// COOKIE CHANNEL
// =============================================================================

/// Cookies sent with an HTTP request.
///
/// Reads come from the request header. Writes are recorded in the jar delta
/// so a handler can forward them as `Set-Cookie` response headers.
#[derive(Debug, Clone, Default)]
pub struct CookieChannel {
    jar: CookieJar,
    secure: bool,
}

impl CookieChannel {
    /// Parse one or more `Cookie` header values.
    #[must_use]
    pub fn from_headers<'a>(values: impl IntoIterator<Item = &'a str>, secure: bool) -> Self {
        let mut jar = CookieJar::new();
        for header in values {
            for cookie in Cookie::split_parse(header).filter_map(Result::ok) {
                jar.add_original(cookie.into_owned());
            }
        }
        Self { jar, secure }
    }

    /// Convenience for a single optional `Cookie` header.
    #[must_use]
    pub fn from_header(header: Option<&str>, secure: bool) -> Self {
        Self::from_headers(header, secure)
    }

    /// `Set-Cookie` values for every cookie written through this channel.
    #[must_use]
    pub fn set_cookie_headers(&self) -> Vec<String> {
        self.jar.delta().map(ToString::to_string).collect()
    }
}

impl StorageChannel for CookieChannel {
    fn name(&self) -> &'static str {
        "cookie"
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.jar.get(key).map(|c| c.value().to_owned()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.jar.add(persistent_cookie(key, value, self.secure));
        Ok(())
    }
}

// =============================================================================
// MEMORY CHANNEL
// =============================================================================

/// In-process storage. An unavailable instance fails every call, which is
/// how disabled or privacy-mode storage behaves in a browser.
#[derive(Debug, Clone)]
pub struct MemoryChannel {
    label: &'static str,
    values: HashMap<String, String>,
    available: bool,
}

impl MemoryChannel {
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self { label, values: HashMap::new(), available: true }
    }

    #[must_use]
    pub fn unavailable(label: &'static str) -> Self {
        Self { label, values: HashMap::new(), available: false }
    }

    /// Builder-style insert for test setup.
    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl StorageChannel for MemoryChannel {
    fn name(&self) -> &'static str {
        self.label
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable(self.label));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable(self.label));
        }
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
