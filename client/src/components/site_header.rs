//! Site header: navigation plus the language and theme toggles.
//!
//! Both toggles go through [`PreferenceState`], so the document root, the
//! persisted cookie/storage pair and every translated label change in the
//! same store notification.

use leptos::prelude::*;
use prefs::Theme;

use crate::i18n::{Label, t};
use crate::state::preferences::PreferenceState;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let prefs = expect_context::<PreferenceState>();
    let label = move |key| t(prefs.language(), key);

    let theme_title = move || match prefs.theme() {
        Theme::Light => label(Label::SwitchToDark),
        Theme::Dark => label(Label::SwitchToLight),
    };
    let theme_icon = move || match prefs.theme() {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    };

    view! {
        <header class="site-header">
            <nav class="site-header__nav">
                <a href="/" class="site-header__link">{move || label(Label::NavHome)}</a>
                <a href="/projects" class="site-header__link">{move || label(Label::NavProjects)}</a>
                <a href="/blog" class="site-header__link">{move || label(Label::NavBlog)}</a>
            </nav>
            <span class="site-header__spacer"></span>
            <button
                class="btn site-header__language"
                title=move || label(Label::SwitchLanguage)
                on:click=move |_| prefs.toggle_language()
            >
                {move || prefs.language().toggled().as_str().to_ascii_uppercase()}
            </button>
            <button
                class="btn site-header__theme"
                title=theme_title
                on:click=move |_| prefs.toggle_theme()
            >
                {theme_icon}
            </button>
        </header>
    }
}
