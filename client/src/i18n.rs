//! UI strings in both site languages.
//!
//! Content documents carry their own translations (`TranslatedText`); this
//! table only covers the chrome around them.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use prefs::Language;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    SiteTitle,
    SiteDescription,
    NavHome,
    NavProjects,
    NavBlog,
    SwitchLanguage,
    SwitchToDark,
    SwitchToLight,
    Loading,
    LoadFailed,
    NotFound,
    NoPosts,
    NoProjects,
    Experience,
    Education,
    Skills,
    Interests,
    Contents,
    Views,
    Published,
    Source,
    LiveDemo,
    Present,
}

impl Label {
    pub const ALL: [Self; 23] = [
        Self::SiteTitle,
        Self::SiteDescription,
        Self::NavHome,
        Self::NavProjects,
        Self::NavBlog,
        Self::SwitchLanguage,
        Self::SwitchToDark,
        Self::SwitchToLight,
        Self::Loading,
        Self::LoadFailed,
        Self::NotFound,
        Self::NoPosts,
        Self::NoProjects,
        Self::Experience,
        Self::Education,
        Self::Skills,
        Self::Interests,
        Self::Contents,
        Self::Views,
        Self::Published,
        Self::Source,
        Self::LiveDemo,
        Self::Present,
    ];
}

#[must_use]
pub fn t(language: Language, label: Label) -> &'static str {
    match language {
        Language::En => en(label),
        Language::Pl => pl(label),
    }
}

fn en(label: Label) -> &'static str {
    match label {
        Label::SiteTitle => "Portfolio",
        Label::SiteDescription => "Projects, resume and writing on software engineering.",
        Label::NavHome => "Home",
        Label::NavProjects => "Projects",
        Label::NavBlog => "Blog",
        Label::SwitchLanguage => "Przełącz na polski",
        Label::SwitchToDark => "Switch to dark theme",
        Label::SwitchToLight => "Switch to light theme",
        Label::Loading => "Loading…",
        Label::LoadFailed => "Could not load this page.",
        Label::NotFound => "Not found.",
        Label::NoPosts => "No posts yet.",
        Label::NoProjects => "No projects yet.",
        Label::Experience => "Experience",
        Label::Education => "Education",
        Label::Skills => "Skills",
        Label::Interests => "Interests",
        Label::Contents => "Contents",
        Label::Views => "views",
        Label::Published => "Published",
        Label::Source => "Source",
        Label::LiveDemo => "Live demo",
        Label::Present => "present",
    }
}

fn pl(label: Label) -> &'static str {
    match label {
        Label::SiteTitle => "Portfolio",
        Label::SiteDescription => "Projekty, CV i teksty o inżynierii oprogramowania.",
        Label::NavHome => "Start",
        Label::NavProjects => "Projekty",
        Label::NavBlog => "Blog",
        Label::SwitchLanguage => "Switch to English",
        Label::SwitchToDark => "Włącz ciemny motyw",
        Label::SwitchToLight => "Włącz jasny motyw",
        Label::Loading => "Ładowanie…",
        Label::LoadFailed => "Nie udało się wczytać strony.",
        Label::NotFound => "Nie znaleziono.",
        Label::NoPosts => "Brak wpisów.",
        Label::NoProjects => "Brak projektów.",
        Label::Experience => "Doświadczenie",
        Label::Education => "Wykształcenie",
        Label::Skills => "Umiejętności",
        Label::Interests => "Zainteresowania",
        Label::Contents => "Spis treści",
        Label::Views => "wyświetleń",
        Label::Published => "Opublikowano",
        Label::Source => "Kod źródłowy",
        Label::LiveDemo => "Demo",
        Label::Present => "obecnie",
    }
}
