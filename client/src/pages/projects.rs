//! Projects page.

use leptos::prelude::*;
use models::Project;
use prefs::Language;

use crate::i18n::{Label, t};
use crate::state::content::Loadable;
use crate::state::preferences::PreferenceState;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let prefs = expect_context::<PreferenceState>();
    let projects = RwSignal::new(Loadable::<Vec<Project>>::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let fetched = crate::net::api::fetch_projects().await.map(Some);
        projects.set(Loadable::from_fetch(fetched));
    });

    view! {
        <section class="page page--projects">
            <h1>{move || t(prefs.language(), Label::NavProjects)}</h1>
            {move || {
                let language = prefs.language();
                match projects.get() {
                    Loadable::Loading => view! { <p class="notice">{t(language, Label::Loading)}</p> }.into_any(),
                    Loadable::Ready(list) if list.is_empty() => {
                        view! { <p class="notice">{t(language, Label::NoProjects)}</p> }.into_any()
                    }
                    Loadable::Ready(mut list) => {
                        list.sort_by(|a, b| b.featured.cmp(&a.featured));
                        list.iter().map(|project| project_card(project, language)).collect_view().into_any()
                    }
                    Loadable::Missing | Loadable::Failed(_) => {
                        view! { <p class="notice notice--error">{t(language, Label::LoadFailed)}</p> }.into_any()
                    }
                }
            }}
        </section>
    }
}

fn project_card(project: &Project, language: Language) -> impl IntoView {
    let technologies = project
        .technologies
        .iter()
        .map(|tech| view! { <span class="chip">{tech.clone()}</span> })
        .collect_view();
    let learned = project
        .learned
        .iter()
        .map(|lesson| view! { <li>{lesson.get(language).to_owned()}</li> })
        .collect_view();
    let demo = project.demo_url.clone().map(|url| {
        view! { <a class="project-card__link" href=url>{t(language, Label::LiveDemo)}</a> }
    });

    let card_class = if project.featured { "project-card project-card--featured" } else { "project-card" };

    view! {
        <article class=card_class>
            <h2>{project.title.clone()}</h2>
            <p class="project-card__summary">{project.short_description.get(language).to_owned()}</p>
            <p>{project.description.get(language).to_owned()}</p>
            <div class="project-card__tech">{technologies}</div>
            <ul class="project-card__learned">{learned}</ul>
            <a class="project-card__link" href=project.url.clone()>{t(language, Label::Source)}</a>
            {demo}
        </article>
    }
}
