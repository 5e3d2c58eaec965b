//! Persistence backend: precedence-aware reads over storage channels.
//!
//! DESIGN
//! ======
//! The capability check happens once, when the backend is built: a server
//! backend has only the request cookie; a client backend has the document
//! cookie and, when the browser allows it, `localStorage`. Call sites never
//! check storage availability themselves.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error. Unreadable channels and out-of-range values
//! are treated as absent; failed writes are logged at debug level and the
//! in-memory store stays authoritative for the session.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::str::FromStr;

use crate::channel::{CookieChannel, StorageChannel};
use crate::preference::{ParseError, Preference, StoredPreference};
use crate::{LANGUAGE_KEY, THEME_KEY};

/// Which side of the hydration boundary a backend serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Context {
    /// Request-time rendering. Only the cookie is visible.
    Server,
    /// Browser after takeover. Cookie and on-device storage are visible.
    Client,
}

/// Order in which client channels are consulted when they disagree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Precedence {
    /// `localStorage` wins over the cookie.
    #[default]
    LocalFirst,
    /// The cookie wins over `localStorage`.
    CookieFirst,
    /// `localStorage` is written but never read.
    CookieOnly,
}

impl Precedence {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LocalFirst => "local-first",
            Self::CookieFirst => "cookie-first",
            Self::CookieOnly => "cookie-only",
        }
    }
}

impl FromStr for Precedence {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "local-first" => Ok(Self::LocalFirst),
            "cookie-first" => Ok(Self::CookieFirst),
            "cookie-only" => Ok(Self::CookieOnly),
            other => Err(ParseError { axis: "precedence", value: other.to_owned() }),
        }
    }
}

/// Durable storage for a [`Preference`].
pub trait PersistenceBackend {
    fn context(&self) -> Context;

    /// Read whatever is stored. Never fails; missing data is `None` per axis.
    fn read(&self) -> StoredPreference;

    /// Best-effort, idempotent write to every available channel.
    fn write(&mut self, preference: &Preference);
}

/// Channel-backed [`PersistenceBackend`].
#[derive(Debug)]
pub struct Backend<C = Box<dyn StorageChannel>, L = Box<dyn StorageChannel>> {
    context: Context,
    cookie: C,
    local: Option<L>,
    precedence: Precedence,
}

impl Backend<CookieChannel, CookieChannel> {
    /// Server-side backend over the request cookies.
    #[must_use]
    pub fn server(cookie: CookieChannel) -> Self {
        Self { context: Context::Server, cookie, local: None, precedence: Precedence::CookieOnly }
    }
}

impl<C: StorageChannel, L: StorageChannel> Backend<C, L> {
    /// Client-side backend. Pass `local: None` when on-device storage is
    /// inaccessible; reads then fall back to the cookie alone.
    #[must_use]
    pub fn client(cookie: C, local: Option<L>, precedence: Precedence) -> Self {
        Self { context: Context::Client, cookie, local, precedence }
    }

    #[must_use]
    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    #[must_use]
    pub fn cookie(&self) -> &C {
        &self.cookie
    }

    #[must_use]
    pub fn local(&self) -> Option<&L> {
        self.local.as_ref()
    }
}

impl<C: StorageChannel, L: StorageChannel> PersistenceBackend for Backend<C, L> {
    fn context(&self) -> Context {
        self.context
    }

    fn read(&self) -> StoredPreference {
        let cookie = read_channel(&self.cookie);
        let Some(local) = self.local.as_ref() else {
            return cookie;
        };
        match self.precedence {
            Precedence::LocalFirst => read_channel(local).or(cookie),
            Precedence::CookieFirst => cookie.or(read_channel(local)),
            Precedence::CookieOnly => cookie,
        }
    }

    fn write(&mut self, preference: &Preference) {
        write_channel(&mut self.cookie, preference);
        if let Some(local) = self.local.as_mut() {
            write_channel(local, preference);
        }
    }
}

fn read_key(channel: &impl StorageChannel, key: &str) -> Option<String> {
    match channel.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("preference read from {} failed for {key}: {e}", channel.name());
            None
        }
    }
}

/// Read both axes from one channel, dropping values outside the enumeration.
pub fn read_channel(channel: &impl StorageChannel) -> StoredPreference {
    let language = read_key(channel, LANGUAGE_KEY);
    let theme = read_key(channel, THEME_KEY);
    let stored = StoredPreference::parse(language.as_deref(), theme.as_deref());
    if language.is_some() && stored.language.is_none() {
        log::debug!("ignoring invalid {LANGUAGE_KEY} in {}: {language:?}", channel.name());
    }
    if theme.is_some() && stored.theme.is_none() {
        log::debug!("ignoring invalid {THEME_KEY} in {}: {theme:?}", channel.name());
    }
    stored
}

/// Write both axes to one channel, swallowing failures.
pub fn write_channel(channel: &mut impl StorageChannel, preference: &Preference) {
    for (key, value) in [(LANGUAGE_KEY, preference.language.as_str()), (THEME_KEY, preference.theme.as_str())] {
        if let Err(e) = channel.set(key, value) {
            log::debug!("preference write to {} failed for {key}: {e}", channel.name());
        }
    }
}
