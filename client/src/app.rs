//! Root component, SSR shell, and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell owns the `<html>` element, which Leptos never hydrates. Its
//! attributes are the server's half of the preference handshake: the browser
//! reads them back to learn what was rendered before deciding whether one
//! correction is needed.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::site_header::SiteHeader;
use crate::i18n::{Label, t};
use crate::pages::blog::{BlogListPage, BlogPostPage};
use crate::pages::home::HomePage;
use crate::pages::projects::ProjectsPage;
use crate::state::preferences::{
    PRECEDENCE_META, SECURE_COOKIE_META, current_policy, initial_presentation, provide_preferences,
};

/// Full HTML document rendered on the server.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let policy = current_policy();
    let seeded = initial_presentation(policy);

    view! {
        <!DOCTYPE html>
        <html
            lang=seeded.language.as_str()
            data-theme=seeded.theme.as_str()
            data-theme-mode=seeded.mode.as_str()
            class=seeded.class_token()
            style=seeded.style_attr()
        >
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=PRECEDENCE_META content=policy.precedence.as_str()/>
                <meta name=SECURE_COOKIE_META content=policy.secure_meta()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component. Owns the preference context for the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let prefs = provide_preferences();
    let label = move |key| t(prefs.language(), key);

    view! {
        <Title text=move || label(Label::SiteTitle)/>
        <Meta name="description" content=move || label(Label::SiteDescription)/>
        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=move || view! { <p class="notice">{move || label(Label::NotFound)}</p> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("blog") view=BlogListPage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                </Routes>
            </main>
        </Router>
    }
}
