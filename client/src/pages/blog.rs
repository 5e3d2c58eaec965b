//! Blog list and single-post pages.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use models::{BlogCategory, BlogPost, TableOfContentsItem};
use prefs::Language;

use crate::i18n::{Label, t};
use crate::state::content::{Loadable, categories_in, filter_by_category, order_posts};
use crate::state::preferences::PreferenceState;
use crate::util::markdown;

/// `YYYY-MM-DD` for display.
pub fn day_of(date: &str) -> &str {
    date.get(..10).unwrap_or(date)
}

/// Indentation class for a table-of-contents entry.
pub fn toc_class(item: &TableOfContentsItem) -> String {
    let depth = item.sub_level.map_or(item.main_level, |sub| item.main_level + sub);
    format!("toc__item toc__item--level-{}", depth.min(4))
}

#[component]
pub fn BlogListPage() -> impl IntoView {
    let prefs = expect_context::<PreferenceState>();
    let posts = RwSignal::new(Loadable::<Vec<BlogPost>>::Loading);
    let category = RwSignal::new(None::<BlogCategory>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let fetched = crate::net::api::fetch_published_blogs().await.map(|list| Some(order_posts(list)));
        posts.set(Loadable::from_fetch(fetched));
    });

    view! {
        <section class="page page--blog">
            <h1>{move || t(prefs.language(), Label::NavBlog)}</h1>
            {move || {
                let language = prefs.language();
                match posts.get() {
                    Loadable::Loading => view! { <p class="notice">{t(language, Label::Loading)}</p> }.into_any(),
                    Loadable::Ready(list) if list.is_empty() => {
                        view! { <p class="notice">{t(language, Label::NoPosts)}</p> }.into_any()
                    }
                    Loadable::Ready(list) => {
                        let filters = categories_in(&list)
                            .into_iter()
                            .map(|c| {
                                let active = category.get() == Some(c);
                                view! {
                                    <button
                                        class=if active { "chip chip--active" } else { "chip" }
                                        on:click=move |_| category.update(|current| {
                                            *current = if *current == Some(c) { None } else { Some(c) };
                                        })
                                    >
                                        {c.as_str()}
                                    </button>
                                }
                            })
                            .collect_view();
                        let cards = filter_by_category(&list, category.get())
                            .iter()
                            .map(|post| post_card(post, language))
                            .collect_view();
                        view! {
                            <div class="blog__filters">{filters}</div>
                            <div class="blog__list">{cards}</div>
                        }
                        .into_any()
                    }
                    Loadable::Missing | Loadable::Failed(_) => {
                        view! { <p class="notice notice--error">{t(language, Label::LoadFailed)}</p> }.into_any()
                    }
                }
            }}
        </section>
    }
}

fn post_card(post: &BlogPost, language: Language) -> impl IntoView + use<> {
    let href = format!("/blog/{}", post.value);
    let date = post.publish_date.as_deref().map(|d| day_of(d).to_owned()).unwrap_or_default();
    view! {
        <article class="blog-card">
            <a href=href>
                <h2>{post.title.get(language).to_owned()}</h2>
            </a>
            <p class="blog-card__meta">
                <span>{date}</span>
                " · "
                <span>{post.category.as_str()}</span>
                " · "
                <span>{post.view_count} " " {t(language, Label::Views)}</span>
            </p>
        </article>
    }
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let prefs = expect_context::<PreferenceState>();
    let params = use_params_map();
    let post = RwSignal::new(Loadable::<BlogPost>::Loading);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let slug = params.read().get("slug").unwrap_or_default();
        post.set(Loadable::Loading);
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_blog(&slug).await;
            let found = matches!(fetched, Ok(Some(_)));
            post.set(Loadable::from_fetch(fetched));
            if found {
                crate::net::api::record_view(&slug).await;
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = params;

    view! {
        <section class="page page--post">
            {move || {
                let language = prefs.language();
                match post.get() {
                    Loadable::Loading => view! { <p class="notice">{t(language, Label::Loading)}</p> }.into_any(),
                    Loadable::Missing => view! { <p class="notice">{t(language, Label::NotFound)}</p> }.into_any(),
                    Loadable::Failed(message) => {
                        log::warn!("blog fetch failed: {message}");
                        view! { <p class="notice notice--error">{t(language, Label::LoadFailed)}</p> }.into_any()
                    }
                    Loadable::Ready(post) => post_view(&post, language).into_any(),
                }
            }}
        </section>
    }
}

fn post_view(post: &BlogPost, language: Language) -> impl IntoView {
    let body = markdown::render_html(post.content.get(language));
    let contents = post
        .table_of_contents
        .iter()
        .map(|item| {
            let href = format!("#{}", item.id);
            view! {
                <li class=toc_class(item)>
                    <a href=href>{item.title.get(language).to_owned()}</a>
                </li>
            }
        })
        .collect_view();
    let toc = (!post.table_of_contents.is_empty()).then(|| {
        view! {
            <nav class="toc">
                <h2>{t(language, Label::Contents)}</h2>
                <ul>{contents}</ul>
            </nav>
        }
    });
    let published = post.publish_date.as_deref().map(|d| day_of(d).to_owned()).unwrap_or_default();
    let image = post.image.clone().map(|src| view! { <img class="post__image" src=src alt=""/> });

    view! {
        <article class="post">
            <h1>{post.title.get(language).to_owned()}</h1>
            <p class="post__meta">
                {t(language, Label::Published)} " " {published} " · " {post.view_count} " " {t(language, Label::Views)}
            </p>
            {image}
            {toc}
            <div class="post__body" inner_html=body></div>
        </article>
    }
}
