//! Mapping between a preference and the document root element.
//!
//! The server writes these attributes into the `<html>` tag of the shell;
//! the browser writes them through [`apply`] and reads them back with
//! [`read_rendered`] to learn what the server assumed.

#[cfg(test)]
#[path = "presentation_test.rs"]
mod presentation_test;

use crate::preference::{Language, Preference, Theme, ThemeMode};

pub const LANG_ATTR: &str = "lang";
pub const THEME_ATTR: &str = "data-theme";
pub const THEME_MODE_ATTR: &str = "data-theme-mode";
pub const COLOR_SCHEME_PROPERTY: &str = "color-scheme";

/// Class tokens that encode the concrete theme.
pub const THEME_CLASSES: [&str; 2] = ["light-mode", "dark-mode"];

/// What the root element shows for a preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Presentation {
    pub language: Language,
    pub theme: Theme,
    pub mode: ThemeMode,
}

impl Presentation {
    /// Resolve a preference against the device colour-scheme signal.
    #[must_use]
    pub fn of(preference: Preference, system: Theme) -> Self {
        Self { language: preference.language, theme: preference.theme.resolve(system), mode: preference.theme }
    }

    #[must_use]
    pub fn preference(self) -> Preference {
        Preference { language: self.language, theme: self.mode }
    }

    #[must_use]
    pub fn class_token(self) -> &'static str {
        match self.theme {
            Theme::Light => THEME_CLASSES[0],
            Theme::Dark => THEME_CLASSES[1],
        }
    }

    /// Value for the `color-scheme` CSS property.
    #[must_use]
    pub fn color_scheme(self) -> &'static str {
        self.theme.as_str()
    }

    /// Inline `style` attribute for server-rendered markup.
    #[must_use]
    pub fn style_attr(self) -> String {
        format!("{COLOR_SCHEME_PROPERTY}: {}", self.color_scheme())
    }
}

/// The document root, or anything that records attribute writes like it.
pub trait DocumentRoot {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&mut self, name: &str, value: &str);
    /// Remove every token in `remove`, then add `add`.
    fn replace_class(&mut self, remove: &[&str], add: &str);
    fn set_style_property(&mut self, name: &str, value: &str);
}

/// Write every presentation attribute in one pass, so the language, theme
/// attribute, class token and colour scheme never disagree between frames.
pub fn apply(root: &mut (impl DocumentRoot + ?Sized), presentation: &Presentation) {
    root.set_attribute(LANG_ATTR, presentation.language.as_str());
    root.set_attribute(THEME_ATTR, presentation.theme.as_str());
    root.set_attribute(THEME_MODE_ATTR, presentation.mode.as_str());
    root.replace_class(&THEME_CLASSES, presentation.class_token());
    root.set_style_property(COLOR_SCHEME_PROPERTY, presentation.color_scheme());
}

/// Recover what the server rendered from the root attributes.
///
/// Missing or invalid attributes fall back to defaults. A missing mode
/// attribute falls back to the concrete `data-theme` value.
pub fn read_rendered(root: &(impl DocumentRoot + ?Sized)) -> Presentation {
    let language = root
        .attribute(LANG_ATTR)
        .and_then(|raw| raw.parse::<Language>().ok())
        .unwrap_or_default();
    let theme = root
        .attribute(THEME_ATTR)
        .and_then(|raw| raw.parse::<Theme>().ok())
        .unwrap_or_default();
    let mode = root
        .attribute(THEME_MODE_ATTR)
        .and_then(|raw| raw.parse::<ThemeMode>().ok())
        .unwrap_or_else(|| theme.into());
    Presentation { language, theme, mode }
}
