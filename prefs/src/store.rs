//! In-memory preference store.
//!
//! DESIGN
//! ======
//! The store is the single source of truth consulted by rendering. Mutations
//! update memory first, then write through to the backend, then run every
//! presentation observer inside the same call. Observers are where the
//! client hangs its DOM writes and reactive signal updates, which keeps a
//! theme change to a single visual step.
//!
//! One store exists per server request and one per page in the browser.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::backend::PersistenceBackend;
use crate::preference::{Language, Preference, Theme, ThemeMode};
use crate::presentation::Presentation;

/// Side effect run after every store mutation.
pub type Observer = Box<dyn FnMut(&Presentation)>;

pub struct PreferenceStore<B> {
    current: Preference,
    system_theme: Theme,
    backend: B,
    observers: Vec<Observer>,
}

impl<B: PersistenceBackend> PreferenceStore<B> {
    /// Start from a known value (for example what the server rendered).
    #[must_use]
    pub fn new(initial: Preference, backend: B) -> Self {
        Self { current: initial, system_theme: Theme::default(), backend, observers: Vec::new() }
    }

    /// Start from whatever the backend holds, defaults filling the gaps.
    #[must_use]
    pub fn from_backend(backend: B) -> Self {
        let initial = backend.read().resolve();
        Self::new(initial, backend)
    }

    /// Set the initial device colour-scheme signal without notifying.
    #[must_use]
    pub fn with_system_theme(mut self, theme: Theme) -> Self {
        self.system_theme = theme;
        self
    }

    #[must_use]
    pub fn get(&self) -> Preference {
        self.current
    }

    #[must_use]
    pub fn system_theme(&self) -> Theme {
        self.system_theme
    }

    #[must_use]
    pub fn presentation(&self) -> Presentation {
        Presentation::of(self.current, self.system_theme)
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Register a presentation side effect. It is not called for the
    /// current value; callers that need that apply it themselves.
    pub fn subscribe(&mut self, observer: impl FnMut(&Presentation) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replace the preference, persist it, and notify observers.
    pub fn set(&mut self, value: Preference) {
        self.current = value;
        self.backend.write(&value);
        self.notify();
    }

    /// Set from raw strings; anything outside the enumeration becomes the default.
    pub fn set_raw(&mut self, language: &str, theme: &str) {
        self.set(Preference::normalized(language, theme));
    }

    pub fn set_language(&mut self, language: Language) {
        self.set(Preference { language, ..self.current });
    }

    pub fn set_theme_mode(&mut self, theme: ThemeMode) {
        self.set(Preference { theme, ..self.current });
    }

    /// Flip the language and return the new one.
    pub fn toggle_language(&mut self) -> Language {
        let next = self.current.language.toggled();
        self.set_language(next);
        next
    }

    /// Flip between light and dark and return the new theme. A `system`
    /// choice is resolved against the device signal before flipping.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.current.theme.resolve(self.system_theme).flipped();
        self.set_theme_mode(next.into());
        next
    }

    /// Update the device colour-scheme signal. Only a `system` choice whose
    /// resolved theme actually changes reaches the observers. Nothing is
    /// persisted.
    pub fn set_system_theme(&mut self, theme: Theme) {
        let before = self.presentation();
        self.system_theme = theme;
        if self.current.theme == ThemeMode::System && before != self.presentation() {
            self.notify();
        }
    }

    fn notify(&mut self) {
        let presentation = self.presentation();
        for observer in &mut self.observers {
            observer(&presentation);
        }
    }
}
