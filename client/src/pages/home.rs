//! Home page: the resume.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use models::Resume;
use prefs::Language;

use crate::i18n::{Label, t};
use crate::state::content::Loadable;
use crate::state::preferences::PreferenceState;

/// `YYYY-MM` for display; anything shorter is shown as stored.
pub fn month_of(date: &str) -> &str {
    date.get(..7).unwrap_or(date)
}

/// "2021-03 – 2023-01", or "2021-03 – present" for an open range.
pub fn date_range(start: &str, end: Option<&str>, language: Language) -> String {
    let end = end.filter(|e| !e.is_empty()).map_or_else(|| t(language, Label::Present), month_of);
    format!("{} – {end}", month_of(start))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let prefs = expect_context::<PreferenceState>();
    let resume = RwSignal::new(Loadable::<Resume>::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        resume.set(Loadable::from_fetch(crate::net::api::fetch_resume().await));
    });

    view! {
        <section class="page page--home">
            {move || {
                let language = prefs.language();
                match resume.get() {
                    Loadable::Loading => view! { <p class="notice">{t(language, Label::Loading)}</p> }.into_any(),
                    Loadable::Missing => view! { <p class="notice">{t(language, Label::NotFound)}</p> }.into_any(),
                    Loadable::Failed(message) => {
                        log::warn!("resume fetch failed: {message}");
                        view! { <p class="notice notice--error">{t(language, Label::LoadFailed)}</p> }.into_any()
                    }
                    Loadable::Ready(resume) => resume_view(&resume, language).into_any(),
                }
            }}
        </section>
    }
}

fn resume_view(resume: &Resume, language: Language) -> impl IntoView {
    let info = &resume.personal_info;
    let experience = resume
        .work_experience
        .iter()
        .map(|job| {
            let range = date_range(&job.start_date, job.end_date.as_deref(), language);
            let duties = job
                .responsibilities
                .iter()
                .map(|duty| view! { <li>{duty.get(language).to_owned()}</li> })
                .collect_view();
            view! {
                <li class="resume__entry">
                    <h3>{job.position.get(language).to_owned()}</h3>
                    <p class="resume__meta">{job.company.clone()} " · " {range}</p>
                    <ul>{duties}</ul>
                </li>
            }
        })
        .collect_view();
    let education = resume
        .education
        .iter()
        .map(|school| {
            let range = date_range(&school.start_date, school.end_date.as_deref(), language);
            view! {
                <li class="resume__entry">
                    <h3>{school.institution.get(language).to_owned()}</h3>
                    <p class="resume__meta">{school.field.get(language).to_owned()} " · " {range}</p>
                </li>
            }
        })
        .collect_view();
    let skills = resume
        .skills
        .iter()
        .map(|group| {
            let names = group
                .skills
                .iter()
                .map(|skill| view! { <span class="chip" style:border-color=skill.color.clone()>{skill.name.clone()}</span> })
                .collect_view();
            view! {
                <div class="resume__skills">
                    <h3>{group.title.get(language).to_owned()}</h3>
                    {names}
                </div>
            }
        })
        .collect_view();
    let interests = resume
        .interests
        .iter()
        .map(|interest| view! { <li>{interest.name.get(language).to_owned()}</li> })
        .collect_view();
    let links = resume
        .links
        .iter()
        .map(|link| view! { <a class="resume__link" href=link.url.clone()>{link.name.get(language).to_owned()}</a> })
        .collect_view();

    view! {
        <header class="resume__header">
            <h1>{info.name.clone()}</h1>
            <p class="resume__title">{info.title.get(language).to_owned()}</p>
            <p class="resume__location">{info.location.get(language).to_owned()}</p>
            <nav class="resume__links">{links}</nav>
        </header>
        <h2>{t(language, Label::Experience)}</h2>
        <ul class="resume__list">{experience}</ul>
        <h2>{t(language, Label::Education)}</h2>
        <ul class="resume__list">{education}</ul>
        <h2>{t(language, Label::Skills)}</h2>
        {skills}
        <h2>{t(language, Label::Interests)}</h2>
        <ul class="resume__interests">{interests}</ul>
        <footer class="resume__footer">{resume.footer_text.get(language).to_owned()}</footer>
    }
}
