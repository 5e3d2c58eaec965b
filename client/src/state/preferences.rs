//! Preference context: the reactive face of the hydration protocol.
//!
//! DESIGN
//! ======
//! The `prefs` store stays the source of truth. This module wraps it for
//! Leptos: a `RwSignal<Presentation>` drives every language- and
//! theme-dependent view, and on the client the store's single observer
//! writes the document root and that signal in the same call.
//!
//! SSR seeds the signal from the request cookies; hydration seeds it from the
//! root attributes the server wrote, so both sides start from identical
//! markup. The one correction the browser may need runs in an effect created
//! by [`provide_preferences`].

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use leptos::prelude::*;
use prefs::{Language, Precedence, Presentation, Theme, ThemeMode};

pub const PRECEDENCE_META: &str = "preference-precedence";
pub const SECURE_COOKIE_META: &str = "preference-cookie-secure";

/// Server-side persistence policy. Provided as context during SSR and echoed
/// into the shell as `<meta>` tags for the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderPolicy {
    pub precedence: Precedence,
    pub secure_cookies: bool,
}

impl RenderPolicy {
    /// Rebuild the policy from the shell's meta tag contents.
    #[must_use]
    pub fn from_meta(precedence: Option<&str>, secure: Option<&str>) -> Self {
        Self {
            precedence: precedence.and_then(|raw| raw.parse().ok()).unwrap_or_default(),
            secure_cookies: secure.is_some_and(|raw| raw.trim() == "true"),
        }
    }

    #[must_use]
    pub fn secure_meta(self) -> &'static str {
        if self.secure_cookies { "true" } else { "false" }
    }
}

#[cfg(feature = "hydrate")]
pub type ClientStore = prefs::PreferenceStore<
    prefs::Backend<crate::util::browser::DocumentCookieChannel, crate::util::browser::LocalStorageChannel>,
>;

/// Handle provided through context by the root component.
#[derive(Clone, Copy)]
pub struct PreferenceState {
    presentation: RwSignal<Presentation>,
    #[cfg(feature = "hydrate")]
    store: StoredValue<ClientStore, LocalStorage>,
}

impl PreferenceState {
    pub fn presentation(self) -> Presentation {
        self.presentation.get()
    }

    pub fn language(self) -> Language {
        self.presentation.get().language
    }

    pub fn theme(self) -> Theme {
        self.presentation.get().theme
    }

    pub fn toggle_language(self) {
        #[cfg(feature = "hydrate")]
        self.store.update_value(|store| {
            store.toggle_language();
        });
        #[cfg(not(feature = "hydrate"))]
        self.presentation.update(|p| *p = with_language_toggled(*p));
    }

    pub fn toggle_theme(self) {
        #[cfg(feature = "hydrate")]
        self.store.update_value(|store| {
            store.toggle_theme();
        });
        #[cfg(not(feature = "hydrate"))]
        self.presentation.update(|p| *p = with_theme_toggled(*p));
    }
}

/// Presentation after a language toggle, theme untouched.
#[must_use]
pub fn with_language_toggled(current: Presentation) -> Presentation {
    Presentation { language: current.language.toggled(), ..current }
}

/// Presentation after a theme toggle. The result is always an explicit
/// light or dark choice, never `system`.
#[must_use]
pub fn with_theme_toggled(current: Presentation) -> Presentation {
    let theme = current.theme.flipped();
    Presentation { theme, mode: ThemeMode::from(theme), ..current }
}

/// Policy in effect for this render.
pub fn current_policy() -> RenderPolicy {
    #[cfg(feature = "ssr")]
    {
        use_context::<RenderPolicy>().unwrap_or_default()
    }
    #[cfg(all(feature = "hydrate", not(feature = "ssr")))]
    {
        crate::util::browser::policy_from_document()
    }
    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    {
        RenderPolicy::default()
    }
}

/// What the document root shows before any client code runs.
pub fn initial_presentation(policy: RenderPolicy) -> Presentation {
    #[cfg(feature = "ssr")]
    {
        request_presentation(policy)
    }
    #[cfg(all(feature = "hydrate", not(feature = "ssr")))]
    {
        let _ = policy;
        crate::util::browser::rendered_presentation()
    }
    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    {
        let _ = policy;
        Presentation::default()
    }
}

/// Seed from the request `Cookie` headers. Outside a request (route list
/// generation) this is the default presentation.
#[cfg(feature = "ssr")]
fn request_presentation(policy: RenderPolicy) -> Presentation {
    use prefs::{Backend, CookieChannel, HydrationCoordinator};

    let Some(parts) = use_context::<http::request::Parts>() else {
        return Presentation::default();
    };
    let headers = parts
        .headers
        .get_all(http::header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok());
    let backend = Backend::server(CookieChannel::from_headers(headers, policy.secure_cookies));
    HydrationCoordinator::server(&backend).rendered()
}

/// Create the preference context for this page and, in the browser, schedule
/// the one reconciliation pass.
pub fn provide_preferences() -> PreferenceState {
    let policy = current_policy();
    let rendered = initial_presentation(policy);
    let presentation = RwSignal::new(rendered);

    #[cfg(feature = "hydrate")]
    let state = {
        use prefs::{HydrationCoordinator, Reconciliation};

        let mut store = crate::util::browser::client_store(rendered, policy);
        store.subscribe(move |next| {
            crate::util::browser::apply_to_root(next);
            presentation.set(*next);
        });
        let store = StoredValue::new_local(store);
        crate::util::browser::watch_system_theme(move |theme| {
            store.update_value(|s| s.set_system_theme(theme));
        });

        let coordinator = StoredValue::new_local(HydrationCoordinator::from_markup(rendered));
        Effect::new(move || {
            coordinator.update_value(|c| {
                store.update_value(|s| match c.reconcile(s) {
                    Reconciliation::Corrected { from, to } => {
                        log::info!("preference corrected after hydration: {from:?} -> {to:?}");
                    }
                    Reconciliation::Unchanged => log::debug!("server render matched stored preference"),
                    Reconciliation::Skipped => {}
                });
            });
        });

        PreferenceState { presentation, store }
    };
    #[cfg(not(feature = "hydrate"))]
    let state = PreferenceState { presentation };

    provide_context(state);
    state
}
