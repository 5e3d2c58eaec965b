//! Browser adapters for the preference subsystem.
//!
//! Storage channels over `document.cookie` and `localStorage`, the
//! `<html>` element as a [`DocumentRoot`], and the `prefers-color-scheme`
//! media query. Everything here is best effort: a missing window, document,
//! or storage object degrades to "absent" and never panics.

use prefs::channel::{cookie_value, persistent_cookie};
use prefs::{Backend, DocumentRoot, Presentation, PreferenceStore, StorageChannel, StorageError, Theme};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::state::preferences::{ClientStore, PRECEDENCE_META, RenderPolicy, SECURE_COOKIE_META};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn rejected(channel: &'static str, err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Rejected { channel, reason: format!("{err:?}") }
}

// =============================================================================
// STORAGE CHANNELS
// =============================================================================

/// `window.localStorage`. Absent in private modes and sandboxed frames.
pub struct LocalStorageChannel {
    storage: web_sys::Storage,
}

impl LocalStorageChannel {
    /// Open once; `None` when the browser refuses access.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

impl StorageChannel for LocalStorageChannel {
    fn name(&self) -> &'static str {
        "localStorage"
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| rejected(self.name(), &e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|e| rejected(self.name(), &e))
    }
}

/// `document.cookie`, written with the same attributes the server uses.
pub struct DocumentCookieChannel {
    document: Option<web_sys::HtmlDocument>,
    secure: bool,
}

impl DocumentCookieChannel {
    pub fn new(secure: bool) -> Self {
        let document = document().and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok());
        Self { document, secure }
    }
}

impl StorageChannel for DocumentCookieChannel {
    fn name(&self) -> &'static str {
        "document.cookie"
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let document = self.document.as_ref().ok_or(StorageError::Unavailable(self.name()))?;
        let header = document.cookie().map_err(|e| rejected(self.name(), &e))?;
        Ok(cookie_value(&header, key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let document = self.document.as_ref().ok_or(StorageError::Unavailable(self.name()))?;
        let cookie = persistent_cookie(key, value, self.secure);
        document.set_cookie(&cookie.to_string()).map_err(|e| rejected(self.name(), &e))
    }
}

// =============================================================================
// DOCUMENT ROOT
// =============================================================================

/// The `<html>` element.
pub struct HtmlRoot(web_sys::Element);

impl HtmlRoot {
    pub fn current() -> Option<Self> {
        document()?.document_element().map(Self)
    }
}

impl DocumentRoot for HtmlRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn replace_class(&mut self, remove: &[&str], add: &str) {
        let classes = self.0.class_list();
        for token in remove {
            let _ = classes.remove_1(token);
        }
        let _ = classes.add_1(add);
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        if let Some(html) = self.0.dyn_ref::<web_sys::HtmlElement>() {
            let _ = html.style().set_property(name, value);
        }
    }
}

/// Write a presentation to the live document root.
pub fn apply_to_root(presentation: &Presentation) {
    if let Some(mut root) = HtmlRoot::current() {
        prefs::presentation::apply(&mut root, presentation);
    }
}

/// What the server rendered, recovered from the root attributes.
pub fn rendered_presentation() -> Presentation {
    HtmlRoot::current()
        .map(|root| prefs::presentation::read_rendered(&root))
        .unwrap_or_default()
}

// =============================================================================
// POLICY + DEVICE SIGNAL
// =============================================================================

fn meta_content(name: &str) -> Option<String> {
    document()?
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()?
        .get_attribute("content")
}

/// Policy the server echoed into the shell.
pub fn policy_from_document() -> RenderPolicy {
    let precedence = meta_content(PRECEDENCE_META);
    let secure = meta_content(SECURE_COOKIE_META);
    RenderPolicy::from_meta(precedence.as_deref(), secure.as_deref())
}

fn dark_scheme_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}

/// Current device colour scheme; light when the query is unsupported.
pub fn system_theme() -> Theme {
    if dark_scheme_query().is_some_and(|mq| mq.matches()) { Theme::Dark } else { Theme::Light }
}

/// Call `on_change` whenever the device colour scheme flips. The listener
/// lives as long as the page.
pub fn watch_system_theme(on_change: impl Fn(Theme) + 'static) {
    let Some(query) = dark_scheme_query() else {
        return;
    };
    let listener = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
        on_change(if ev.matches() { Theme::Dark } else { Theme::Light });
    });
    query.set_onchange(Some(listener.as_ref().unchecked_ref()));
    listener.forget();
}

/// Build the page's store, seeded with what the markup shows.
pub fn client_store(rendered: Presentation, policy: RenderPolicy) -> ClientStore {
    let backend = Backend::client(
        DocumentCookieChannel::new(policy.secure_cookies),
        LocalStorageChannel::open(),
        policy.precedence,
    );
    if backend.local().is_none() {
        log::debug!("localStorage unavailable; preferences persist to the cookie only");
    }
    PreferenceStore::new(rendered.preference(), backend).with_system_theme(system_theme())
}
